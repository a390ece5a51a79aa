//! Thin helpers over web-sys used by the interactive components.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Window,
};

use crate::error::{LandingError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(LandingError::NoDocument)
}

/// First element matching `selector` under `root`.
pub fn query(root: &Document, selector: &str) -> Result<Element> {
    root.query_selector(selector)?
        .ok_or_else(|| LandingError::missing(selector))
}

/// Like [`query`], but the match must be an `HtmlElement`.
pub fn query_html(root: &Document, selector: &str) -> Result<HtmlElement> {
    query(root, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| LandingError::NotAnElement {
            selector: selector.to_string(),
        })
}

/// Every element matching `selector` under `root`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Every `HtmlElement` matching `selector` under `root`, in document order.
pub fn query_all_html(root: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(query_all(root, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Every `HtmlElement` matching `selector` under `element`.
pub fn query_all_within(element: &Element, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = element.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Keep the closure alive
    Ok(())
}

/// The element an event was dispatched on, if it is one.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top_smooth(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::debug!("[soho][dom] style {property}: {}", LandingError::from(e));
    }
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    if let Err(e) = element.style().remove_property(property) {
        log::debug!("[soho][dom] clear {property}: {}", LandingError::from(e));
    }
}
