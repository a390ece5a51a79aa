// Interactive behaviors of the landing page
// Each component attaches on its own; a missing piece of markup only
// disables the component that needs it.

mod context;
pub mod contract;
mod hamburger;
mod hover_fade;
mod lazy_images;
mod modal;
mod observer;
mod one_shot;
mod reveal;
mod role;
mod scroll_nav;
mod scroll_top;
mod slider;
mod sticky_nav;
mod tabs;
mod theme;

pub use context::PageContext;
pub use hamburger::Hamburger;
pub use hover_fade::{HoverFade, fade_siblings};
pub use lazy_images::LazyImages;
pub use modal::Modal;
pub use observer::{WatchOptions, Watcher};
pub use one_shot::OneShot;
pub use reveal::SectionReveal;
pub use role::{TargetRole, fragment_id, parse_slide};
pub use scroll_nav::ScrollNav;
pub use scroll_top::ScrollTop;
pub use slider::{Slider, SliderState};
pub use sticky_nav::StickyNav;
pub use tabs::Tabs;
pub use theme::{BrowserStorage, FlagStore, Theme, ThemePreference, ThemeToggle};

use leptos::prelude::*;

use crate::error::Result;

/// Every component of the page, `None` where attaching failed.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub modal: Option<Modal>,
    pub scroll_nav: Option<ScrollNav>,
    pub tabs: Option<Tabs>,
    pub hover_fade: Option<HoverFade>,
    pub sticky_nav: Option<StickyNav>,
    pub reveal: Option<SectionReveal>,
    pub lazy_images: Option<LazyImages>,
    pub slider: Option<Slider>,
    pub hamburger: Option<Hamburger>,
    pub theme: Option<ThemeToggle>,
    pub scroll_top: Option<ScrollTop>,
}

impl Page {
    pub fn attach(ctx: &PageContext) -> Self {
        let hamburger = attach("hamburger", Hamburger::attach(ctx));
        let painter = hamburger.clone();
        let theme = attach(
            "theme",
            ThemeToggle::attach(ctx, move |theme| {
                if let Some(menu) = &painter {
                    menu.paint(theme);
                }
            }),
        );

        Self {
            modal: attach("modal", Modal::attach(ctx)),
            scroll_nav: attach("scroll", ScrollNav::attach(ctx)),
            tabs: attach("tabs", Tabs::attach(ctx)),
            hover_fade: attach("hover", HoverFade::attach(ctx)),
            sticky_nav: attach("sticky", StickyNav::attach(ctx)),
            reveal: attach("reveal", SectionReveal::attach(ctx)),
            lazy_images: attach("lazy", LazyImages::attach(ctx)),
            slider: attach("slider", Slider::attach(ctx)),
            hamburger,
            theme,
            scroll_top: attach("scroll-top", ScrollTop::attach(ctx)),
        }
    }

    pub fn attached(&self) -> usize {
        [
            self.modal.is_some(),
            self.scroll_nav.is_some(),
            self.tabs.is_some(),
            self.hover_fade.is_some(),
            self.sticky_nav.is_some(),
            self.reveal.is_some(),
            self.lazy_images.is_some(),
            self.slider.is_some(),
            self.hamburger.is_some(),
            self.theme.is_some(),
            self.scroll_top.is_some(),
        ]
        .iter()
        .filter(|ok| **ok)
        .count()
    }
}

fn attach<T>(name: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(component) => Some(component),
        Err(e) => {
            log::warn!("[soho][{name}] not attached: {e}");
            None
        }
    }
}

/// Wire every behavior once the page has been mounted.
#[component]
#[allow(clippy::unused_unit)]
pub fn Interactions() -> impl IntoView {
    Effect::new(move || match PageContext::from_browser() {
        Ok(ctx) => {
            let page = Page::attach(&ctx);
            log::info!("[soho] {} of 11 components attached", page.attached());
        }
        Err(e) => log::error!("[soho] cannot start: {e}"),
    });

    view! {}
}
