use leptos::prelude::*;

use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <ul class="footer__nav">
                <li class="footer__item"><a class="footer__link" href="#">"About"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Pricing"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Terms of Use"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Privacy Policy"</a></li>
                <li class="footer__item"><a class="footer__link" href="#">"Contact"</a></li>
            </ul>
            <img src="img/icon.png" alt="" class="footer__logo" />
            <p class="footer__copyright">{format!("© 2026 {BRAND}. Study somewhere nicer.")}</p>
        </footer>
    }
}

/// Hidden until the page is scrolled past the threshold.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    view! {
        <button id="scrollToTopBtn" class="scroll-top" style="display: none;" aria-label="Back to top">
            <i class="fa-solid fa-arrow-up"></i>
        </button>
    }
}
