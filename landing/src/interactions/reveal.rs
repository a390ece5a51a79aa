//! Reveal each page section the first time it scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::context::PageContext;
use super::contract;
use super::observer::{WatchOptions, Watcher};
use super::one_shot::OneShot;
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SectionReveal {
    watcher: Watcher,
    pending: Rc<RefCell<OneShot<Element>>>,
}

impl SectionReveal {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let sections = dom::query_all(&ctx.document, contract::SECTIONS)?;
        if sections.is_empty() {
            log::debug!("[soho][reveal] no sections to watch");
        }

        let pending = Rc::new(RefCell::new(OneShot::new(sections.clone())));
        let options = WatchOptions::new(ctx.config.reveal_threshold, 0.0);

        let on_pending = pending.clone();
        let watcher = Watcher::new(options, move |target, intersecting, watcher| {
            on_report(&on_pending, watcher, target, intersecting);
        })?;

        for section in &sections {
            watcher.observe(section);
        }

        Ok(Self { watcher, pending })
    }

    /// Handle one visibility report for `target`. Returns whether it was
    /// revealed by this call.
    pub fn handle(&self, target: &Element, intersecting: bool) -> bool {
        on_report(&self.pending, &self.watcher, target, intersecting)
    }

    pub fn remaining(&self) -> usize {
        self.pending.borrow().remaining()
    }
}

fn on_report(
    pending: &RefCell<OneShot<Element>>,
    watcher: &Watcher,
    section: &Element,
    intersecting: bool,
) -> bool {
    if !intersecting || !pending.borrow_mut().fire(section) {
        return false;
    }
    let _ = section.class_list().remove_1(contract::SECTION_HIDDEN);
    watcher.unobserve(section);
    if pending.borrow().is_exhausted() {
        watcher.disconnect();
    }
    true
}
