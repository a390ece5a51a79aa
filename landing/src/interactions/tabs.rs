//! Operations tabs: one active tab, one active content panel.

use web_sys::{Document, Element, Event};

use super::context::PageContext;
use super::contract;
use super::role::TargetRole;
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Tabs {
    document: Document,
    tabs: Vec<Element>,
    contents: Vec<Element>,
}

impl Tabs {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let doc = &ctx.document;
        let container = dom::query(doc, contract::TAB_CONTAINER)?;
        let tabs = Self {
            document: doc.clone(),
            tabs: dom::query_all(doc, contract::TAB_SELECTOR)?,
            contents: dom::query_all(doc, contract::CONTENTS)?,
        };

        let on_click = tabs.clone();
        dom::listen(&container, "click", move |event: Event| {
            let Some(target) = dom::event_element(&event) else {
                return;
            };
            if let TargetRole::Tab { element, tab } = TargetRole::resolve(&target) {
                match tab {
                    Some(tab) => {
                        on_click.activate(&element, &tab);
                    }
                    None => log::warn!("[soho][tabs] tab without {}", contract::DATA_TAB),
                }
            }
        })?;

        Ok(tabs)
    }

    /// Make `tab` and the panel for `tab_id` the only active ones.
    /// Leaves everything as it was if no panel matches.
    pub fn activate(&self, tab: &Element, tab_id: &str) -> bool {
        let panel_class = contract::content_class(tab_id);
        let panel = match self.document.query_selector(&format!(".{panel_class}")) {
            Ok(Some(panel)) => panel,
            _ => {
                log::warn!("[soho][tabs] no panel .{panel_class}");
                return false;
            }
        };

        for t in &self.tabs {
            let _ = t.class_list().remove_1(contract::TAB_ACTIVE);
        }
        for c in &self.contents {
            let _ = c.class_list().remove_1(contract::CONTENT_ACTIVE);
        }

        let _ = tab.class_list().add_1(contract::TAB_ACTIVE);
        let _ = panel.class_list().add_1(contract::CONTENT_ACTIVE);
        true
    }
}
