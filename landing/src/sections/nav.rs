use leptos::prelude::*;

use super::BRAND;

const LINKS: &[(&str, &str)] = &[
    ("#section--1", "Features"),
    ("#section--2", "Operations"),
    ("#section--3", "Testimonials"),
];

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <img src="img/physics.png" alt=format!("{BRAND} logo") class="nav__logo" id="logo" />
            <ul class="nav__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li class="nav__item">
                                <a class="nav__link" href=*href>{*label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
                <li class="nav__item">
                    <a class="nav__link nav__link--btn btn--show-modal" href="#">
                        "Open account"
                    </a>
                </li>
            </ul>
            <button class="nav__mode-toggle" id="modeToggleBtn" aria-label="Toggle dark mode">
                <i class="fa-solid fa-umbrella-beach"></i>
            </button>
            <div class="nav__hamburger" id="hamburger" aria-label="Menu">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </nav>
    }
}
