//! WhatsApp deep links and the home-page floating button rule.

use tdc_site_types::WhatsAppConfig;

pub fn greeting(contact_name: &str) -> String {
    format!("Hi {contact_name}, I would like to enquire.")
}

/// `https://wa.me/<number>?text=<greeting>`
pub fn deep_link(cfg: &WhatsAppConfig) -> String {
    format!(
        "https://wa.me/{}?text={}",
        cfg.number,
        urlencoding::encode(&greeting(&cfg.contact_name))
    )
}

pub fn float_label(contact_name: &str) -> String {
    format!("Chat with {contact_name}")
}

/// Root, empty, or one of the configured home-page suffixes (case-insensitive).
pub fn is_home_path(pathname: &str, cfg: &WhatsAppConfig) -> bool {
    let path = pathname.to_lowercase();
    path.is_empty()
        || path == "/"
        || cfg
            .home_paths
            .iter()
            .any(|suffix| path.ends_with(&suffix.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_link_percent_encodes_greeting() {
        let cfg = WhatsAppConfig::default();
        assert_eq!(
            deep_link(&cfg),
            "https://wa.me/27616219784?text=Hi%20Neville%2C%20I%20would%20like%20to%20enquire."
        );
    }

    #[test]
    fn home_detection() {
        let cfg = WhatsAppConfig::default();
        assert!(is_home_path("", &cfg));
        assert!(is_home_path("/", &cfg));
        assert!(is_home_path("/INDEX.HTML", &cfg));
        assert!(is_home_path("/site/index.html", &cfg));
        assert!(!is_home_path("/tours.html", &cfg));
        assert!(!is_home_path("/index.html/extra", &cfg));
    }

    #[test]
    fn label_names_the_contact() {
        assert_eq!(float_label("Neville"), "Chat with Neville");
    }
}
