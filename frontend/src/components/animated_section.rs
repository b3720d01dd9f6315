use yew::prelude::*;
use yew::{Children, Properties};

use crate::reveal::{reveal_class, use_reveal_on_scroll};

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Page section that fades and slides into place the first time it scrolls into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_on_scroll(node.clone());

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", reveal_class(revealed), props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}
