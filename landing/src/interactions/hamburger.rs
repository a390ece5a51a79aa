//! Mobile nav: the hamburger button opens and closes the link list.

use web_sys::{Element, HtmlElement};

use super::context::PageContext;
use super::contract;
use super::theme::Theme;
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Hamburger {
    links: Element,
    bars: Vec<HtmlElement>,
}

impl Hamburger {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let doc = &ctx.document;
        let button = dom::query(doc, contract::HAMBURGER)?;
        let menu = Self {
            links: dom::query(doc, contract::NAV_LINKS)?,
            bars: dom::query_all_html(doc, contract::HAMBURGER_BARS)?,
        };

        let on_click = menu.clone();
        dom::listen(&button, "click", move |_| {
            on_click.toggle();
        })?;

        Ok(menu)
    }

    pub fn toggle(&self) -> bool {
        self.links
            .class_list()
            .toggle(contract::NAV_LINKS_ACTIVE)
            .unwrap_or(false)
    }

    pub fn is_open(&self) -> bool {
        self.links.class_list().contains(contract::NAV_LINKS_ACTIVE)
    }

    /// White bars on the dark theme, stylesheet colors otherwise.
    pub fn paint(&self, theme: Theme) {
        for bar in &self.bars {
            match theme {
                Theme::Dark => dom::set_style(bar, "background-color", "white"),
                Theme::Light => dom::clear_style(bar, "background-color"),
            }
        }
    }
}
