//! Smooth scrolling for in-page navigation.

use web_sys::{Document, Event};

use super::context::PageContext;
use super::contract;
use super::role::{TargetRole, fragment_id};
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct ScrollNav;

impl ScrollNav {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let doc = &ctx.document;

        let links = dom::query(doc, contract::NAV_LINKS)?;
        let link_doc = doc.clone();
        dom::listen(&links, "click", move |event: Event| {
            Self::on_link_click(&link_doc, &event);
        })?;

        // The header button is optional; the nav links work without it.
        match (
            dom::query(doc, contract::BTN_SCROLL_TO),
            dom::query(doc, contract::FIRST_SECTION),
        ) {
            (Ok(button), Ok(target)) => {
                dom::listen(&button, "click", move |_| dom::scroll_into_view_smooth(&target))?;
            }
            (Err(e), _) | (_, Err(e)) => log::debug!("[soho][scroll] {e}"),
        }

        Ok(Self)
    }

    fn on_link_click(doc: &Document, event: &Event) {
        let Some(target) = dom::event_element(event) else {
            return;
        };
        let TargetRole::NavLink { href, .. } = TargetRole::resolve(&target) else {
            return;
        };
        // External links navigate normally.
        let Some(id) = fragment_id(&href) else {
            return;
        };
        event.prevent_default();
        Self::scroll_to_id(doc, id);
    }

    /// Smooth-scroll `#id` into view. Returns whether the target exists.
    pub fn scroll_to_id(doc: &Document, id: &str) -> bool {
        match doc.get_element_by_id(id) {
            Some(element) => {
                dom::scroll_into_view_smooth(&element);
                true
            }
            None => {
                log::warn!("[soho][scroll] link points at missing #{id}");
                false
            }
        }
    }
}
