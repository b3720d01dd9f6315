use log::Level;

pub const COMPLETE_PLAN_CHECKOUT_URL: &str = "https://pay.cakto.com.br/534Mbmi";
pub const BASIC_PLAN_CHECKOUT_URL: &str = "https://pay.cakto.com.br/7XkBX6G";

pub const WHATSAPP_NUMBER: &str = "5583981578532";
pub const SUPPORT_EMAIL: &str = "contato@therifmarketingdigital.net";

pub const COVER_IMAGE_URL: &str =
    "https://therifmarketingdigital.net/wp-content/uploads/2025/09/OIG3-2-1.jpeg";

/// How long the "special offer" countdown runs from page load.
pub const OFFER_WINDOW_HOURS: i64 = 5;
pub const COUNTDOWN_TICK_MS: u32 = 1000;

/// Fraction of a section that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub fn whatsapp_link() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

pub fn support_mailto() -> String {
    format!("mailto:{}", SUPPORT_EMAIL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_embeds_number() {
        assert_eq!(whatsapp_link(), "https://wa.me/5583981578532");
    }

    #[test]
    fn support_mailto_uses_support_address() {
        assert_eq!(support_mailto(), "mailto:contato@therifmarketingdigital.net");
    }

    #[test]
    fn checkout_links_differ_per_plan() {
        assert_ne!(COMPLETE_PLAN_CHECKOUT_URL, BASIC_PLAN_CHECKOUT_URL);
        assert!(COMPLETE_PLAN_CHECKOUT_URL.starts_with("https://"));
        assert!(BASIC_PLAN_CHECKOUT_URL.starts_with("https://"));
    }
}
