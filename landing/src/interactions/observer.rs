//! Viewport visibility watcher built on `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

/// Observer options; the root is always the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Visible fraction needed to count as intersecting.
    pub threshold: f64,
    /// Grows (positive) or shrinks (negative) the viewport box, in pixels.
    pub root_margin_px: f64,
}

impl WatchOptions {
    pub fn new(threshold: f64, root_margin_px: f64) -> Self {
        Self {
            threshold,
            root_margin_px,
        }
    }

    /// CSS margin string handed to the browser, e.g. `-200px`.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

#[derive(Debug, Clone)]
pub struct Watcher {
    inner: IntersectionObserver,
}

impl Watcher {
    /// `on_entry` runs once per reported entry, in report order, with the
    /// entry's target, whether it intersects, and the watcher itself.
    pub fn new<F>(options: WatchOptions, mut on_entry: F) -> Result<Self>
    where
        F: FnMut(&Element, bool, &Watcher) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let watcher = Watcher { inner: observer };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                on_entry(&entry.target(), entry.is_intersecting(), &watcher);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();
        Ok(Self { inner })
    }

    pub fn observe(&self, target: &Element) {
        self.inner.observe(target);
    }

    pub fn unobserve(&self, target: &Element) {
        self.inner.unobserve(target);
    }

    pub fn disconnect(&self) {
        self.inner.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_formats_pixels() {
        assert_eq!(WatchOptions::new(0.0, -200.0).root_margin(), "-200px");
        assert_eq!(WatchOptions::new(0.0, -64.5).root_margin(), "-64.5px");
        assert_eq!(WatchOptions::new(0.1, 0.0).root_margin(), "0px");
    }
}
