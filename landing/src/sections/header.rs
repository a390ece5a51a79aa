use leptos::prelude::*;

use super::Nav;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <Nav />
            <div class="header__title">
                <h1>
                    "When "
                    <span class="highlight">"studying"</span>
                    " meets"
                    <br />
                    <span class="highlight">"the seaside"</span>
                </h1>
                <h4>"A calmer workspace. No distractions, just the sound of waves."</h4>
                <button class="btn--text btn--scroll-to">"Learn more ↓"</button>
                <img
                    src="img/hero.png"
                    class="header__img"
                    alt="Laptop on a beach towel"
                />
            </div>
        </header>
    }
}
