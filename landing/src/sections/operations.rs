use leptos::prelude::*;

struct Operation {
    tab: &'static str,
    label: &'static str,
    icon: &'static str,
    heading: &'static str,
    body: &'static str,
}

const OPERATIONS: &[Operation] = &[
    Operation {
        tab: "1",
        label: "Plan",
        icon: "fa-solid fa-calendar-days",
        heading: "Plan the week in five minutes",
        body: "Drop your deadlines in and Soho lays out a schedule that leaves room for breaks. Move a block and the rest of the week adjusts.",
    },
    Operation {
        tab: "2",
        label: "Focus",
        icon: "fa-solid fa-hourglass-half",
        heading: "Stay in the zone",
        body: "Notifications stay muted while a session runs. When the timer ends you get a short break and a gentle nudge back.",
    },
    Operation {
        tab: "3",
        label: "Review",
        icon: "fa-solid fa-magnifying-glass-chart",
        heading: "Look back, then adjust",
        body: "A Sunday recap shows finished goals, missed ones and how much time each subject really took.",
    },
];

#[component]
pub fn Operations() -> impl IntoView {
    view! {
        <section class="section section--hidden" id="section--2">
            <div class="section__title">
                <h2 class="section__description">"Operations"</h2>
                <h3 class="section__header">"Plan, focus, review. Then repeat."</h3>
            </div>

            <div class="operations">
                <div class="operations__tab-container">
                    {OPERATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, op)| {
                            let class = if i == 0 {
                                format!("btn operations__tab operations__tab--{} operations__tab--active", op.tab)
                            } else {
                                format!("btn operations__tab operations__tab--{}", op.tab)
                            };
                            view! {
                                <button class=class data-tab=op.tab>
                                    <span>{format!("0{}", op.tab)}</span>
                                    {op.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {OPERATIONS
                    .iter()
                    .enumerate()
                    .map(|(i, op)| {
                        let class = if i == 0 {
                            format!("operations__content operations__content--{} operations__content--active", op.tab)
                        } else {
                            format!("operations__content operations__content--{}", op.tab)
                        };
                        view! {
                            <div class=class>
                                <div class=format!("operations__icon operations__icon--{}", op.tab)>
                                    <i class=op.icon></i>
                                </div>
                                <h5 class="operations__header">{op.heading}</h5>
                                <p>{op.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
