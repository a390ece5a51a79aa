use leptos::prelude::*;

#[component]
pub fn Signup() -> impl IntoView {
    view! {
        <section class="section section--sign-up section--hidden">
            <div class="section__title">
                <h3 class="section__header">
                    "The best day to start was yesterday. The next best one is today."
                </h3>
            </div>
            <button class="btn btn--show-modal">"Open your free account today!"</button>
        </section>
    }
}

/// Sign-up dialog and its overlay, hidden until an opener is clicked.
#[component]
pub fn SignupModal() -> impl IntoView {
    view! {
        <div class="modal hidden">
            <button class="btn--close-modal" aria-label="Close">"×"</button>
            <h2 class="modal__header">
                "Open your account "
                <br />
                "in just "
                <span class="highlight">"1 minute"</span>
            </h2>
            <form class="modal__form">
                <label>"First name"</label>
                <input type="text" />
                <label>"Last name"</label>
                <input type="text" />
                <label>"Email address"</label>
                <input type="email" />
                <button class="btn">"Next step →"</button>
            </form>
        </div>
        <div class="overlay hidden"></div>
    }
}
