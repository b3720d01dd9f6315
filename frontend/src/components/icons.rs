use yew::prelude::*;

fn default_icon_class() -> Classes {
    classes!("icon-check")
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_else(default_icon_class)]
    pub class: Classes,
}

#[function_component(CheckCircleIcon)]
pub fn check_circle_icon(props: &IconProps) -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class={props.class.clone()} viewBox="0 0 20 20" fill="currentColor">
            <path
                fill-rule="evenodd"
                d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                clip-rule="evenodd"
            />
        </svg>
    }
}

#[function_component(WhatsAppIcon)]
pub fn whatsapp_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class="icon-whatsapp" fill="currentColor" viewBox="0 0 24 24">
            <path d="M.057 24l1.687-6.163c-1.041-1.804-1.588-3.849-1.587-5.946.003-6.556 5.338-11.891 11.893-11.891 3.181.001 6.167 1.24 8.413 3.488 2.245 2.248 3.481 5.236 3.48 8.414-.003 6.557-5.338 11.892-11.894 11.892-1.99 0-3.903-.52-5.687-1.475L.057 24zm6.597-3.807c1.676.995 3.276 1.591 5.392 1.592 5.448 0 9.886-4.434 9.889-9.885.002-5.462-4.415-9.89-9.881-9.892-5.452 0-9.887 4.434-9.889 9.886-.001 2.267.655 4.398 1.803 6.182l-.341 1.236 1.241-.328z" />
        </svg>
    }
}
