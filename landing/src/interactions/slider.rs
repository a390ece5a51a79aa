//! Testimonial slider: looping slides, dot indicators, buttons and arrow keys.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use super::context::PageContext;
use super::contract;
use super::role::TargetRole;
use crate::dom;
use crate::error::{LandingError, Result};

/// Position of a looping slider with `count` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    count: usize,
}

impl SliderState {
    /// `None` for an empty slider.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { current: 0, count })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn next(&mut self) -> usize {
        self.current = if self.current == self.count - 1 {
            0
        } else {
            self.current + 1
        };
        self.current
    }

    /// Go back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.count - 1
        } else {
            self.current - 1
        };
        self.current
    }

    /// Jump straight to `slide`. Out-of-range indices are rejected and
    /// leave the position unchanged.
    pub fn jump_to(&mut self, slide: usize) -> Option<usize> {
        if slide >= self.count {
            return None;
        }
        self.current = slide;
        Some(slide)
    }

    /// Horizontal offset of `slide` in percent: 0 for the current one,
    /// whole widths left or right for the others.
    pub fn offset_percent(&self, slide: usize) -> i64 {
        100 * (slide as i64 - self.current as i64)
    }

    pub fn transform(&self, slide: usize) -> String {
        format!("translateX({}%)", self.offset_percent(slide))
    }
}

#[derive(Debug, Clone)]
pub struct Slider {
    state: Rc<Cell<SliderState>>,
    slides: Rc<Vec<HtmlElement>>,
    dots: Rc<Vec<Element>>,
}

impl Slider {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let doc = &ctx.document;
        let slides = dom::query_all_html(doc, contract::SLIDES)?;
        let Some(state) = SliderState::new(slides.len()) else {
            return Err(LandingError::missing(contract::SLIDES));
        };

        // Everything is looked up before the dots are generated.
        let container = dom::query(doc, contract::DOTS)?;
        let right = dom::query(doc, contract::SLIDER_BTN_RIGHT)?;
        let left = dom::query(doc, contract::SLIDER_BTN_LEFT)?;
        let dots = create_dots(doc, &container, slides.len())?;

        let slider = Self {
            state: Rc::new(Cell::new(state)),
            slides: Rc::new(slides),
            dots: Rc::new(dots),
        };
        slider.jump_to(0);

        let on_right = slider.clone();
        dom::listen(&right, "click", move |_| {
            on_right.next();
        })?;
        let on_left = slider.clone();
        dom::listen(&left, "click", move |_| {
            on_left.prev();
        })?;

        let on_key = slider.clone();
        dom::listen(doc, "keydown", move |event: Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                on_key.on_key(&key);
            }
        })?;

        let on_dot = slider.clone();
        dom::listen(&container, "click", move |event: Event| {
            let Some(target) = dom::event_element(&event) else {
                return;
            };
            if let TargetRole::Dot { slide, .. } = TargetRole::resolve(&target) {
                on_dot.jump_to(slide);
            }
        })?;

        log::debug!("[soho][slider] {} slides", slider.slides.len());
        Ok(slider)
    }

    pub fn next(&self) -> usize {
        self.transition(SliderState::next)
    }

    pub fn prev(&self) -> usize {
        self.transition(SliderState::prev)
    }

    pub fn jump_to(&self, slide: usize) -> bool {
        let mut state = self.state.get();
        if state.jump_to(slide).is_none() {
            log::warn!("[soho][slider] no slide {slide} (have {})", state.count());
            return false;
        }
        self.state.set(state);
        self.render();
        true
    }

    /// Arrow keys step the slider; other keys are ignored.
    pub fn on_key(&self, key: &str) {
        match key {
            "ArrowLeft" => {
                self.prev();
            }
            "ArrowRight" => {
                self.next();
            }
            _ => {}
        }
    }

    pub fn current(&self) -> usize {
        self.state.get().current()
    }

    pub fn dots(&self) -> &[Element] {
        &self.dots
    }

    pub fn slides(&self) -> &[HtmlElement] {
        &self.slides
    }

    fn transition(&self, step: fn(&mut SliderState) -> usize) -> usize {
        let mut state = self.state.get();
        let current = step(&mut state);
        self.state.set(state);
        self.render();
        current
    }

    /// Position every slide and mark the matching dot.
    fn render(&self) {
        let state = self.state.get();
        for (i, slide) in self.slides.iter().enumerate() {
            dom::set_style(slide, "transform", &state.transform(i));
        }
        for dot in self.dots.iter() {
            let _ = dot.class_list().remove_1(contract::DOT_ACTIVE);
        }
        if let Some(dot) = self.dots.get(state.current()) {
            let _ = dot.class_list().add_1(contract::DOT_ACTIVE);
        }
    }
}

/// Replace the contents of `container` with one dot button per slide.
fn create_dots(doc: &Document, container: &Element, count: usize) -> Result<Vec<Element>> {
    container.set_inner_html("");
    (0..count)
        .map(|i| -> Result<Element> {
            let dot = doc.create_element("button")?;
            dot.set_class_name(contract::DOT);
            dot.set_attribute(contract::DATA_SLIDE, &i.to_string())?;
            container.append_child(&dot)?;
            Ok(dot)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_slider_has_no_state() {
        assert!(SliderState::new(0).is_none());
    }

    #[test]
    fn next_cycles_back_after_count_steps() {
        for count in 1..=7 {
            for start in 0..count {
                let mut state = SliderState::new(count).unwrap();
                state.jump_to(start).unwrap();
                for _ in 0..count {
                    state.next();
                }
                assert_eq!(state.current(), start, "count={count} start={start}");
            }
        }
    }

    #[test]
    fn prev_undoes_next() {
        let mut state = SliderState::new(3).unwrap();
        state.next();
        state.next();
        state.prev();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut state = SliderState::new(4).unwrap();
        assert_eq!(state.prev(), 3);
        assert_eq!(state.next(), 0);
    }

    #[test]
    fn five_right_presses_on_four_slides() {
        let mut state = SliderState::new(4).unwrap();
        for _ in 0..5 {
            state.next();
        }
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut state = SliderState::new(1).unwrap();
        assert_eq!(state.next(), 0);
        assert_eq!(state.prev(), 0);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut state = SliderState::new(3).unwrap();
        state.next();
        assert_eq!(state.jump_to(3), None);
        assert_eq!(state.current(), 1);
        assert_eq!(state.jump_to(2), Some(2));
    }

    #[test]
    fn current_slide_sits_at_zero() {
        let mut state = SliderState::new(4).unwrap();
        state.jump_to(2).unwrap();
        let offsets: Vec<i64> = (0..4).map(|i| state.offset_percent(i)).collect();
        assert_eq!(offsets, vec![-200, -100, 0, 100]);
        assert_eq!(state.transform(3), "translateX(100%)");
        assert_eq!(offsets.iter().filter(|o| **o == 0).count(), 1);
    }
}
