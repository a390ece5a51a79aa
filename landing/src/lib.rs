//! Soho landing page.
//!
//! The page shell is rendered with Leptos (`sections`); everything that
//! reacts to the user or the viewport lives in `interactions` and talks to
//! the DOM through web-sys, so it works on any markup that follows
//! [`interactions::contract`].

pub mod config;
pub mod dom;
pub mod error;
pub mod interactions;
pub mod sections;

pub use config::LandingConfig;
pub use error::LandingError;

use interactions::Interactions;
use leptos::prelude::*;
use sections::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Header />
        <main>
            <Features />
            <Operations />
            <Testimonials />
            <Signup />
        </main>
        <Footer />
        <SignupModal />
        <ScrollTopButton />
        <Interactions />
    }
}
