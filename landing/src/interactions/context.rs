use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Window};

use super::theme::Theme;
use crate::config::LandingConfig;
use crate::dom;
use crate::error::{LandingError, Result};

/// Everything the components share, passed to each one explicitly.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: Rc<LandingConfig>,
    pub theme: Rc<Cell<Theme>>,
}

impl PageContext {
    pub fn new(window: Window, config: LandingConfig) -> Result<Self> {
        let document = window.document().ok_or(LandingError::NoDocument)?;
        Ok(Self {
            window,
            document,
            config: Rc::new(config),
            theme: Rc::new(Cell::new(Theme::Light)),
        })
    }

    /// Context for the running page, config read from the page itself.
    pub fn from_browser() -> Result<Self> {
        let window = dom::window()?;
        let document = window.document().ok_or(LandingError::NoDocument)?;
        let config = LandingConfig::load(&document);
        Self::new(window, config)
    }
}
