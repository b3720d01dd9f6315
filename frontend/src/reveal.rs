use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// One-shot visibility flag. Starts hidden, flips to revealed on the first
/// intersecting report and ignores everything after that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only for the report that performs the reveal.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal-visible"
    } else {
        "reveal-hidden"
    }
}

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("section element is not mounted")]
    MissingElement,
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Live subscription to viewport intersections for a single element.
/// Dropping it disconnects the observer.
pub struct RevealWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealWatch {
    pub fn install(
        element: &Element,
        threshold: f64,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, RevealError> {
        let mut latch = RevealLatch::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if latch.observe(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    on_reveal();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| RevealError::ObserverUnavailable(describe(err)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches the element behind `node` and reports whether it has been revealed.
#[hook]
pub fn use_reveal_on_scroll(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let installed = node
                    .cast::<Element>()
                    .ok_or(RevealError::MissingElement)
                    .and_then(|element| {
                        RevealWatch::install(&element, config::REVEAL_THRESHOLD, move || {
                            debug!("Section scrolled into view");
                            revealed.set(true);
                        })
                    });

                let watch = match installed {
                    Ok(watch) => Some(watch),
                    Err(err) => {
                        warn!("Section will stay hidden: {}", err);
                        None
                    }
                };

                move || drop(watch)
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert_eq!(reveal_class(latch.is_revealed()), "reveal-hidden");
    }

    #[test]
    fn ignores_reports_until_intersecting() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());
        assert_eq!(reveal_class(latch.is_revealed()), "reveal-visible");
    }

    #[test]
    fn fires_once_and_never_reverts() {
        let mut latch = RevealLatch::default();
        let fired = [true, false, true, false, true]
            .into_iter()
            .filter(|&intersecting| latch.observe(intersecting))
            .count();

        assert_eq!(fired, 1);
        assert!(latch.is_revealed());
    }

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(RevealError::MissingElement.to_string(), "section element is not mounted");
        let err = RevealError::ObserverUnavailable("ReferenceError".to_string());
        assert_eq!(err.to_string(), "intersection observer unavailable: ReferenceError");
    }
}
