use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::countdown::{two_digits, Countdown};

#[derive(Properties, PartialEq)]
struct CountdownCellProps {
    value: i64,
    label: &'static str,
}

#[function_component(CountdownCell)]
fn countdown_cell(props: &CountdownCellProps) -> Html {
    html! {
        <div class="countdown-cell">
            <div class="countdown-value">{two_digits(props.value)}</div>
            <div class="countdown-label">{props.label}</div>
        </div>
    }
}

#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    // Expiry is captured on first render only.
    let countdown = use_state(Countdown::starting_now);
    let time_left = {
        let countdown = *countdown;
        use_state_eq(move || countdown.time_left())
    };

    {
        let countdown = *countdown;
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                debug!("Offer countdown expires at {}", countdown.expiry());
                let mut announced = false;
                let interval = Interval::new(config::COUNTDOWN_TICK_MS, move || {
                    let next = countdown.time_left();
                    if next.is_zero() && !announced {
                        debug!("Offer countdown reached zero");
                        announced = true;
                    }
                    time_left.set(next);
                });

                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="countdown">
            <CountdownCell value={time_left.hours} label="Horas" />
            <CountdownCell value={time_left.minutes} label="Min." />
            <CountdownCell value={time_left.seconds} label="Seg." />
        </div>
    }
}
