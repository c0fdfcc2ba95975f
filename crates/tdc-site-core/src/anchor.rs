//! In-page anchor detection for smooth scrolling.

/// Target element id when a link points into the current page.
///
/// `link_hash` is the link's `hash` property (`"#section"`); both paths are
/// `pathname` values. Cross-page links and bare `#` yield `None`.
pub fn in_page_target(link_pathname: &str, link_hash: &str, current_pathname: &str) -> Option<String> {
    let fragment = link_hash.strip_prefix('#').unwrap_or(link_hash);
    if fragment.is_empty() || link_pathname != current_pathname {
        return None;
    }
    let id = urlencoding::decode(fragment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| fragment.to_owned());
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_page_fragment_resolves() {
        assert_eq!(
            in_page_target("/tours.html", "#wine", "/tours.html"),
            Some("wine".to_owned())
        );
    }

    #[test]
    fn encoded_fragment_is_decoded() {
        assert_eq!(
            in_page_target("/", "#caf%C3%A9", "/"),
            Some("café".to_owned())
        );
    }

    #[test]
    fn cross_page_and_empty_fall_through() {
        assert_eq!(in_page_target("/about.html", "#team", "/"), None);
        assert_eq!(in_page_target("/", "", "/"), None);
        assert_eq!(in_page_target("/", "#", "/"), None);
    }
}
