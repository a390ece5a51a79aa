//! Dim the other nav links and the logo while one link is hovered.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use super::context::PageContext;
use super::contract;
use super::role::TargetRole;
use crate::dom;
use crate::error::{LandingError, Result};

pub const FULL_OPACITY: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct HoverFade {
    dim: f64,
}

impl HoverFade {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let nav = dom::query(&ctx.document, contract::NAV)?;
        let fade = Self {
            dim: ctx.config.hover_dim_opacity,
        };

        let dim = fade.dim;
        let on_enter = move |event: Event| fade_from_event(&event, dim);
        let on_leave = move |event: Event| fade_from_event(&event, FULL_OPACITY);
        dom::listen(&nav, "mouseover", on_enter)?;
        dom::listen(&nav, "mouseout", on_leave)?;

        Ok(fade)
    }

    pub fn dim(&self) -> f64 {
        self.dim
    }
}

fn fade_from_event(event: &Event, opacity: f64) {
    let Some(target) = dom::event_element(event) else {
        return;
    };
    if let TargetRole::NavLink { element, .. } = TargetRole::resolve(&target) {
        if let Err(e) = fade_siblings(&element, opacity) {
            log::debug!("[soho][hover] {e}");
        }
    }
}

/// Set `opacity` on every nav link except `link`, and on the nav logo.
pub fn fade_siblings(link: &Element, opacity: f64) -> Result<()> {
    let nav = link
        .closest(contract::NAV)?
        .ok_or_else(|| LandingError::missing(contract::NAV))?;
    let value = opacity.to_string();

    for sibling in dom::query_all_within(&nav, contract::NAV_LINK_SELECTOR)? {
        let sibling_el: &Element = &sibling;
        if sibling_el != link {
            dom::set_style(&sibling, "opacity", &value);
        }
    }

    let logo = nav
        .query_selector(contract::NAV_LOGO)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| LandingError::missing(contract::NAV_LOGO))?;
    dom::set_style(&logo, "opacity", &value);
    Ok(())
}
