//! Sticky nav driven by the header scrolling out of view.

use web_sys::Element;

use super::context::PageContext;
use super::contract;
use super::observer::{WatchOptions, Watcher};
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct StickyNav {
    nav: Element,
    // keeps the header observed for as long as the component lives
    _watcher: Watcher,
}

impl StickyNav {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let doc = &ctx.document;
        let nav = dom::query(doc, contract::NAV)?;
        let header = dom::query(doc, contract::HEADER)?;

        // The header counts as gone once only the nav's height of it is left.
        let nav_height = nav.get_bounding_client_rect().height();
        let options = WatchOptions::new(0.0, -nav_height);

        let on_nav = nav.clone();
        let watcher = Watcher::new(options, move |_, intersecting, _| {
            apply(&on_nav, intersecting);
        })?;
        watcher.observe(&header);

        Ok(Self {
            nav,
            _watcher: watcher,
        })
    }

    /// Same as a visibility report for the header.
    pub fn update(&self, header_visible: bool) {
        apply(&self.nav, header_visible);
    }

    pub fn is_sticky(&self) -> bool {
        self.nav.class_list().contains(contract::STICKY)
    }
}

/// Apply the sticky marker for the header's visibility.
pub fn apply(nav: &Element, header_visible: bool) {
    let classes = nav.class_list();
    let _ = if should_stick(header_visible) {
        classes.add_1(contract::STICKY)
    } else {
        classes.remove_1(contract::STICKY)
    };
}

pub fn should_stick(header_visible: bool) -> bool {
    !header_visible
}
