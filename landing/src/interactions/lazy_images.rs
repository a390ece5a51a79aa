//! Swap low-quality placeholders for the real image near the viewport.
//!
//! The swap and the unobserve happen together when the image intersects;
//! `lazy-img` (the blur) only comes off once the real file has loaded.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use super::context::PageContext;
use super::contract;
use super::observer::{WatchOptions, Watcher};
use super::one_shot::OneShot;
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct LazyImages {
    watcher: Watcher,
    pending: Rc<RefCell<OneShot<Element>>>,
}

impl LazyImages {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let images = dom::query_all(&ctx.document, contract::LAZY_IMAGES)?;
        let pending = Rc::new(RefCell::new(OneShot::new(images.clone())));
        let options = WatchOptions::new(0.0, ctx.config.lazy_root_margin_px);

        let on_pending = pending.clone();
        let watcher = Watcher::new(options, move |target, intersecting, watcher| {
            on_report(&on_pending, watcher, target, intersecting);
        })?;

        for image in &images {
            watcher.observe(image);
        }
        log::debug!("[soho][lazy] watching {} images", images.len());

        Ok(Self { watcher, pending })
    }

    /// Handle one visibility report for `target`. Returns whether a load
    /// was started by this call.
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
    target: &Element,
    intersecting: bool,
) -> bool {
    if !intersecting || !pending.borrow_mut().fire(target) {
        return false;
    }
    watcher.unobserve(target);
    if pending.borrow().is_exhausted() {
        watcher.disconnect();
    }

    match load_full_image(target) {
        Ok(started) => started,
        Err(e) => {
            log::warn!("[soho][lazy] {e}");
            false
        }
    }
}

/// Point `src` at `data-src` and drop `lazy-img` once it has loaded.
fn load_full_image(target: &Element) -> Result<bool> {
    let Some(src) = target
        .get_attribute(contract::DATA_SRC)
        .filter(|src| !src.trim().is_empty())
    else {
        log::warn!("[soho][lazy] image without {}", contract::DATA_SRC);
        return Ok(false);
    };

    let on_load = target.clone();
    dom::listen(target, "load", move |_| {
        let _ = on_load.class_list().remove_1(contract::LAZY_IMG);
    })?;

    match target.dyn_ref::<HtmlImageElement>() {
        Some(image) => image.set_src(&src),
        None => target.set_attribute("src", &src)?,
    }
    Ok(true)
}
