//! Back-to-top button, shown once the page is scrolled far enough.

use web_sys::{HtmlElement, Window};

use super::context::PageContext;
use super::contract;
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ScrollTop {
    button: HtmlElement,
    threshold: f64,
}

impl ScrollTop {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let control = Self {
            button: dom::query_html(&ctx.document, contract::SCROLL_TOP_BTN)?,
            threshold: ctx.config.scroll_top_threshold_px,
        };

        let on_scroll = control.clone();
        let window = ctx.window.clone();
        dom::listen(&ctx.window, "scroll", move |_| {
            on_scroll.update(current_offset(&window));
        })?;

        let top_window = ctx.window.clone();
        dom::listen(&control.button, "click", move |_| {
            dom::scroll_to_top_smooth(&top_window);
        })?;

        control.update(current_offset(&ctx.window));
        Ok(control)
    }

    pub fn update(&self, offset: f64) {
        let display = if is_visible(offset, self.threshold) { "block" } else { "none" };
        dom::set_style(&self.button, "display", display);
    }
}

fn current_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn is_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_strictly_past_threshold() {
        assert!(!is_visible(0.0, 300.0));
        assert!(!is_visible(300.0, 300.0));
        assert!(is_visible(300.5, 300.0));
        assert!(is_visible(2_000.0, 300.0));
    }
}
