use leptos::prelude::*;

struct Testimonial {
    title: &'static str,
    quote: &'static str,
    name: &'static str,
    place: &'static str,
    photo: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        title: "Finally passed organic chemistry",
        quote: "Short sessions, real breaks, and a plan I actually followed. I stopped pulling all-nighters in my second month.",
        name: "Maya Lindqvist",
        place: "Uppsala, Sweden",
        photo: "img/user-1.jpg",
    },
    Testimonial {
        title: "My study group lives here now",
        quote: "We open a room every evening at eight. Seeing the others' timers tick keeps me off my phone.",
        name: "Tomás Aguirre",
        place: "Valparaíso, Chile",
        photo: "img/user-2.jpg",
    },
    Testimonial {
        title: "The recap is the best part",
        quote: "Every Sunday I know exactly where my week went. It turns vague guilt into a concrete plan.",
        name: "Aiko Tanabe",
        place: "Osaka, Japan",
        photo: "img/user-3.jpg",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section section--hidden" id="section--3">
            <div class="section__title section__title--testimonials">
                <h2 class="section__description">"Not sure yet?"</h2>
                <h3 class="section__header">"Thousands of students already study calmer."</h3>
            </div>

            <div class="slider">
                {TESTIMONIALS
                    .iter()
                    .enumerate()
                    .map(|(i, t)| {
                        view! {
                            <div class=format!("slide slide--{}", i + 1)>
                                <div class="testimonial">
                                    <h5 class="testimonial__header">{t.title}</h5>
                                    <blockquote class="testimonial__text">{t.quote}</blockquote>
                                    <address class="testimonial__author">
                                        <img src=t.photo alt="" class="testimonial__photo" />
                                        <h6 class="testimonial__name">{t.name}</h6>
                                        <p class="testimonial__location">{t.place}</p>
                                    </address>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
                <button class="slider__btn slider__btn--left" aria-label="Previous">"←"</button>
                <button class="slider__btn slider__btn--right" aria-label="Next">"→"</button>
                // Filled with one dot per slide on startup
                <div class="dots"></div>
            </div>
        </section>
    }
}
