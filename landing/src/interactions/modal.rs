//! Sign-up modal: dialog plus full-page overlay.

use web_sys::{Element, Event, KeyboardEvent};
use wasm_bindgen::JsCast;

use super::context::PageContext;
use super::contract;
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Modal {
    dialog: Element,
    overlay: Element,
}

impl Modal {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let doc = &ctx.document;
        let modal = Self {
            dialog: dom::query(doc, contract::MODAL)?,
            overlay: dom::query(doc, contract::OVERLAY)?,
        };

        let openers = dom::query_all(doc, contract::BTN_SHOW_MODAL)?;
        if openers.is_empty() {
            log::warn!("[soho][modal] no {} buttons", contract::BTN_SHOW_MODAL);
        }
        for button in &openers {
            let modal = modal.clone();
            dom::listen(button, "click", move |event| modal.open(&event))?;
        }

        let close_button = dom::query(doc, contract::BTN_CLOSE_MODAL)?;
        let on_close = modal.clone();
        dom::listen(&close_button, "click", move |_| on_close.close())?;

        let on_overlay = modal.clone();
        dom::listen(&modal.overlay, "click", move |_| on_overlay.close())?;

        let on_key = modal.clone();
        dom::listen(doc, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if key == "Escape" && on_key.is_open() {
                on_key.close();
            }
        })?;

        Ok(modal)
    }

    /// Open in response to `event`, suppressing its default action
    /// (the openers are links).
    pub fn open(&self, event: &Event) {
        event.prevent_default();
        self.show();
    }

    pub fn show(&self) {
        let _ = self.dialog.class_list().remove_1(contract::HIDDEN);
        let _ = self.overlay.class_list().remove_1(contract::HIDDEN);
    }

    pub fn close(&self) {
        let _ = self.dialog.class_list().add_1(contract::HIDDEN);
        let _ = self.overlay.class_list().add_1(contract::HIDDEN);
    }

    pub fn is_open(&self) -> bool {
        !self.dialog.class_list().contains(contract::HIDDEN)
    }
}
