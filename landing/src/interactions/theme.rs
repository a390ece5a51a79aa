//! Light/dark theme toggle, persisted as a single localStorage flag.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement, Storage, Window};

use super::context::PageContext;
use super::contract;
use crate::config::ThemeConfig;
use crate::dom;
use crate::error::{LandingError, Result};

pub const ENABLED: &str = "enabled";
pub const DISABLED: &str = "disabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the literal `"enabled"` means dark; anything else is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(ENABLED) => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Dark => ENABLED,
            Self::Light => DISABLED,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Key-value storage holding the theme flag.
pub trait FlagStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`, if the browser grants it.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[soho][theme] localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| LandingError::Storage("localStorage unavailable".to_string()))
    }
}

impl FlagStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage()?.get_item(key)?)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.storage()?.set_item(key, value)?)
    }
}

/// The persisted theme preference under one storage key.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: FlagStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn read(&self) -> Theme {
        match self.store.load(&self.key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                log::warn!("[soho][theme] {e}");
                Theme::Light
            }
        }
    }

    pub fn write(&self, theme: Theme) {
        if let Err(e) = self.store.save(&self.key, theme.stored_value()) {
            log::warn!("[soho][theme] {e}");
        }
    }

    /// Flip the theme held in `current` and persist the result.
    pub fn toggle(&self, current: &Cell<Theme>) -> Theme {
        let next = current.get().toggled();
        current.set(next);
        self.write(next);
        next
    }
}

#[derive(Clone)]
pub struct ThemeToggle {
    body: HtmlElement,
    button: HtmlElement,
    logo: Element,
    assets: Rc<ThemeConfig>,
    current: Rc<Cell<Theme>>,
    preference: Rc<ThemePreference<BrowserStorage>>,
    on_change: Rc<dyn Fn(Theme)>,
}

impl std::fmt::Debug for ThemeToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeToggle")
            .field("current", &self.current.get())
            .finish_non_exhaustive()
    }
}

impl ThemeToggle {
    /// Apply the stored theme and wire the toggle button. `on_change` runs
    /// after every applied theme, the initial one included.
    pub fn attach<F>(ctx: &PageContext, on_change: F) -> Result<Self>
    where
        F: Fn(Theme) + 'static,
    {
        let doc = &ctx.document;
        let toggle = Self {
            body: doc.body().ok_or_else(|| LandingError::missing("body"))?,
            button: dom::query_html(doc, contract::MODE_TOGGLE)?,
            logo: dom::query(doc, contract::LOGO)?,
            assets: Rc::new(ctx.config.theme.clone()),
            current: ctx.theme.clone(),
            preference: Rc::new(ThemePreference::new(
                BrowserStorage::from_window(&ctx.window),
                ctx.config.theme.storage_key.clone(),
            )),
            on_change: Rc::new(on_change),
        };

        let initial = toggle.preference.read();
        toggle.current.set(initial);
        toggle.apply(initial);

        let on_click = toggle.clone();
        dom::listen(&toggle.button, "click", move |_| {
            on_click.toggle();
        })?;

        log::debug!("[soho][theme] starting in {initial:?}");
        Ok(toggle)
    }

    pub fn toggle(&self) -> Theme {
        let next = self.preference.toggle(&self.current);
        self.apply(next);
        next
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    fn apply(&self, theme: Theme) {
        let _ = self
            .body
            .class_list()
            .toggle_with_force(contract::DARK_MODE, theme.is_dark());

        let (icon, logo) = match theme {
            Theme::Dark => (&self.assets.dark_icon, &self.assets.dark_logo),
            Theme::Light => (&self.assets.light_icon, &self.assets.light_logo),
        };
        self.button.set_inner_html(&format!(r#"<i class="{icon}"></i>"#));

        match theme {
            Theme::Dark => {
                dom::clear_style(&self.button, "color");
                dom::clear_style(&self.button, "background-color");
            }
            Theme::Light => {
                dom::set_style(&self.button, "color", "var(--text-color)");
                dom::set_style(&self.button, "background-color", "#ffffff");
            }
        }

        match self.logo.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(logo),
            None => {
                let _ = self.logo.set_attribute("src", logo);
            }
        }

        (self.on_change)(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        broken: bool,
    }

    impl FlagStore for MemoryStore {
        fn load(&self, key: &str) -> Result<Option<String>> {
            if self.broken {
                return Err(LandingError::Storage("denied".into()));
            }
            Ok(self.values.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            if self.broken {
                return Err(LandingError::Storage("denied".into()));
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn stored_values_map_to_themes() {
        assert_eq!(Theme::from_stored(Some("enabled")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("disabled")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("ENABLED")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("true")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn stored_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.stored_value())), theme);
        }
    }

    #[test]
    fn toggle_persists_each_step() {
        let pref = ThemePreference::new(MemoryStore::default(), "darkMode");
        let current = Cell::new(pref.read());
        assert_eq!(current.get(), Theme::Light);

        assert_eq!(pref.toggle(&current), Theme::Dark);
        assert_eq!(pref.read(), Theme::Dark);
        assert_eq!(
            pref.store.values.borrow().get("darkMode").map(String::as_str),
            Some("enabled")
        );
    }

    #[test]
    fn toggling_twice_restores_stored_value() {
        let store = MemoryStore::default();
        store.save("darkMode", "enabled").unwrap();
        let pref = ThemePreference::new(store, "darkMode");
        let current = Cell::new(pref.read());

        pref.toggle(&current);
        pref.toggle(&current);

        assert_eq!(current.get(), Theme::Dark);
        assert_eq!(
            pref.store.values.borrow().get("darkMode").map(String::as_str),
            Some("enabled")
        );
    }

    #[test]
    fn broken_storage_falls_back_to_light() {
        let pref = ThemePreference::new(
            MemoryStore {
                broken: true,
                ..Default::default()
            },
            "darkMode",
        );
        let current = Cell::new(pref.read());
        assert_eq!(current.get(), Theme::Light);
        // toggling still works in memory
        assert_eq!(pref.toggle(&current), Theme::Dark);
    }
}
