//! Class names, selectors and attributes the behaviors rely on.
//! The markup in `sections` (or any hand-written page) must provide them.

// Marker classes
pub const HIDDEN: &str = "hidden";
pub const STICKY: &str = "sticky";
pub const SECTION_HIDDEN: &str = "section--hidden";
pub const LAZY_IMG: &str = "lazy-img";
pub const DOT: &str = "dots__dot";
pub const DOT_ACTIVE: &str = "dots__dot--active";
pub const TAB: &str = "operations__tab";
pub const TAB_ACTIVE: &str = "operations__tab--active";
pub const CONTENT_ACTIVE: &str = "operations__content--active";
pub const NAV_LINK: &str = "nav__link";
pub const NAV_LINKS_ACTIVE: &str = "nav__links--active";
pub const DARK_MODE: &str = "dark-mode";

// Selectors
pub const MODAL: &str = ".modal";
pub const OVERLAY: &str = ".overlay";
pub const BTN_CLOSE_MODAL: &str = ".btn--close-modal";
pub const BTN_SHOW_MODAL: &str = ".btn--show-modal";
pub const BTN_SCROLL_TO: &str = ".btn--scroll-to";
pub const FIRST_SECTION: &str = "#section--1";
pub const NAV: &str = ".nav";
pub const NAV_LINKS: &str = ".nav__links";
pub const NAV_LINK_SELECTOR: &str = ".nav__link";
pub const NAV_LOGO: &str = "img";
pub const HEADER: &str = ".header";
pub const SECTIONS: &str = ".section";
pub const LAZY_IMAGES: &str = "img[data-src]";
pub const TAB_CONTAINER: &str = ".operations__tab-container";
pub const TAB_SELECTOR: &str = ".operations__tab";
pub const CONTENTS: &str = ".operations__content";
pub const SLIDES: &str = ".slide";
pub const SLIDER_BTN_LEFT: &str = ".slider__btn--left";
pub const SLIDER_BTN_RIGHT: &str = ".slider__btn--right";
pub const DOTS: &str = ".dots";
pub const DOT_SELECTOR: &str = ".dots__dot";
pub const HAMBURGER: &str = "#hamburger";
pub const HAMBURGER_BARS: &str = ".nav__hamburger span";
pub const LOGO: &str = "#logo";
pub const MODE_TOGGLE: &str = "#modeToggleBtn";
pub const SCROLL_TOP_BTN: &str = "#scrollToTopBtn";

// Data attributes
pub const DATA_SRC: &str = "data-src";
pub const DATA_TAB: &str = "data-tab";
pub const DATA_SLIDE: &str = "data-slide";

/// Class of the content panel paired with the tab whose `data-tab` is `tab`.
pub fn content_class(tab: &str) -> String {
    format!("operations__content--{tab}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_class_uses_tab_suffix() {
        assert_eq!(content_class("2"), "operations__content--2");
    }
}
