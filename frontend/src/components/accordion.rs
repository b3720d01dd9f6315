use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

/// Colour scheme of an accordion item. Behaviour is identical for both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionTheme {
    #[default]
    Light,
    Dark,
}

impl AccordionTheme {
    pub fn class(&self) -> &'static str {
        match self {
            AccordionTheme::Light => "accordion-item--light",
            AccordionTheme::Dark => "accordion-item--dark",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub expanded: bool,
}

impl AccordionState {
    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub title: String,
    #[prop_or_default]
    pub theme: AccordionTheme,
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let state = use_state(AccordionState::default);

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set(state.toggled());
        })
    };

    let expanded = state.expanded;

    html! {
        <div class={classes!("accordion-item", props.theme.class())}>
            <button class="accordion-trigger" onclick={toggle} aria-expanded={expanded.to_string()}>
                <span class="accordion-title">{&props.title}</span>
                <span class="accordion-icon">
                    <svg
                        class={classes!("accordion-chevron", expanded.then(|| "rotated"))}
                        fill="none"
                        stroke="currentColor"
                        viewBox="0 0 24 24"
                        xmlns="http://www.w3.org/2000/svg"
                    >
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                    </svg>
                </span>
            </button>
            <div class={classes!("accordion-content", expanded.then(|| "open"))}>
                <div class="accordion-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_with_light_theme() {
        assert!(!AccordionState::default().expanded);
        assert_eq!(AccordionTheme::default(), AccordionTheme::Light);
    }

    #[test]
    fn items_toggle_independently() {
        let mut a = AccordionState::default();
        let b = AccordionState::default();

        a = a.toggled();
        assert!(a.expanded);
        assert!(!b.expanded);

        a = a.toggled();
        assert!(!a.expanded);
        assert!(!b.expanded);
    }

    #[test]
    fn themes_only_swap_the_colour_class() {
        assert_ne!(AccordionTheme::Light.class(), AccordionTheme::Dark.class());
        assert!(AccordionTheme::Dark.class().starts_with("accordion-item--"));
    }
}
