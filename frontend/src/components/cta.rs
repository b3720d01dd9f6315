use yew::prelude::*;
use yew::{Children, Properties};

use crate::components::icons::WhatsAppIcon;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static(config::COMPLETE_PLAN_CHECKOUT_URL))]
    pub href: AttrValue,
}

/// Checkout link styled as the page's primary button. Opens in a new tab.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("cta-button", props.class.clone())}
        >
            { for props.children.iter() }
        </a>
    }
}

#[function_component(FloatingCta)]
pub fn floating_cta() -> Html {
    html! {
        <a
            href={config::whatsapp_link()}
            target="_blank"
            rel="noopener noreferrer"
            class="floating-cta"
            aria-label="WhatsApp"
        >
            <WhatsAppIcon />
        </a>
    }
}
