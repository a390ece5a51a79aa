//! What an event target means to the page, resolved once per event.

use web_sys::Element;

use super::contract;

#[derive(Debug, Clone, PartialEq)]
pub enum TargetRole {
    /// A `.nav__link`; `href` is its raw attribute.
    NavLink { element: Element, href: String },
    /// The `.operations__tab` at or above the target.
    Tab { element: Element, tab: Option<String> },
    /// A `.dots__dot` with a parsable `data-slide`.
    Dot { element: Element, slide: usize },
    Other,
}

impl TargetRole {
    pub fn resolve(target: &Element) -> Self {
        let classes = target.class_list();

        if classes.contains(contract::NAV_LINK) {
            return Self::NavLink {
                element: target.clone(),
                href: target.get_attribute("href").unwrap_or_default(),
            };
        }

        if classes.contains(contract::DOT) {
            let raw = target.get_attribute(contract::DATA_SLIDE).unwrap_or_default();
            return match parse_slide(&raw) {
                Some(slide) => Self::Dot {
                    element: target.clone(),
                    slide,
                },
                None => {
                    log::warn!("[soho][role] dot with bad data-slide {raw:?}");
                    Self::Other
                }
            };
        }

        if let Ok(Some(tab)) = target.closest(contract::TAB_SELECTOR) {
            let id = tab.get_attribute(contract::DATA_TAB);
            return Self::Tab {
                element: tab,
                tab: id,
            };
        }

        Self::Other
    }
}

/// Element id referenced by an in-page link, `None` for anything else.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn parse_slide(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_id_accepts_only_in_page_links() {
        assert_eq!(fragment_id("#section--2"), Some("section--2"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("https://soho.page/#pricing"), None);
        assert_eq!(fragment_id("/about"), None);
    }

    #[test]
    fn parse_slide_reads_indices() {
        assert_eq!(parse_slide("0"), Some(0));
        assert_eq!(parse_slide(" 3 "), Some(3));
        assert_eq!(parse_slide("-1"), None);
        assert_eq!(parse_slide("two"), None);
        assert_eq!(parse_slide(""), None);
    }
}
