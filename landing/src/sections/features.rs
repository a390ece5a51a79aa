use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="section section--hidden" id="section--1">
            <div class="section__title">
                <h2 class="section__description">"Features"</h2>
                <h3 class="section__header">
                    "Everything you need for deep work, wherever the tide takes you."
                </h3>
            </div>

            <div class="features">
                <FeatureImage
                    placeholder="img/focus-lazy.webp"
                    full="img/focus.webp"
                    alt="Desk by the window"
                />
                <FeatureCard
                    icon="fa-solid fa-headphones"
                    title="Focus sessions"
                    description="Timed sessions with ambient soundscapes that fade out when the timer ends. Your streaks sync across devices."
                />

                <FeatureCard
                    icon="fa-solid fa-chart-line"
                    title="Progress you can see"
                    description="Weekly summaries show where your hours went, which subjects need attention and how your pace is trending."
                />
                <FeatureImage
                    placeholder="img/progress-lazy.webp"
                    full="img/progress.webp"
                    alt="Notebook with charts"
                />

                <FeatureImage
                    placeholder="img/group-lazy.webp"
                    full="img/group.webp"
                    alt="Friends studying together"
                />
                <FeatureCard
                    icon="fa-solid fa-user-group"
                    title="Study together"
                    description="Open a shared room, set a common goal and keep each other honest. Rooms close themselves when everyone is done."
                />
            </div>
        </section>
    }
}

/// Blurred placeholder first; the full image is swapped in near the viewport.
#[component]
fn FeatureImage(placeholder: &'static str, full: &'static str, alt: &'static str) -> impl IntoView {
    view! {
        <img src=placeholder data-src=full alt=alt class="features__img lazy-img" />
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="features__feature">
            <div class="features__icon">
                <i class=icon></i>
            </div>
            <h5 class="features__header">{title}</h5>
            <p>{description}</p>
        </div>
    }
}
