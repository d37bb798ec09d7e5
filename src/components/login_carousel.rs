//! Feature slides shown beside the sign-in form.

use leptos::prelude::*;

/// `(title, description)` per slide.
pub const SLIDES: &[(&str, &str)] = &[
    ("Discover your data", "Search every table, topic, dashboard and pipeline from one place."),
    ("Collaborate", "Describe, tag and own data assets with your team."),
    ("Track data insights", "Set KPIs and watch how documentation and ownership evolve."),
];

/// Index of the slide after `current`, wrapping around.
pub fn next_slide(current: usize) -> usize {
    (current + 1) % SLIDES.len()
}

/// Index of the slide before `current`, wrapping around.
pub fn prev_slide(current: usize) -> usize {
    (current + SLIDES.len() - 1) % SLIDES.len()
}

#[component]
pub fn LoginCarousel() -> impl IntoView {
    let current = RwSignal::new(0_usize);

    view! {
        <div class="login-carousel" data-testid="carousel-container">
            {move || {
                let (title, text) = SLIDES[current.get()];
                view! {
                    <div class="login-carousel__slide" data-testid="carousel-item">
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </div>
                }
            }}
            <div class="login-carousel__nav">
                <button class="login-carousel__prev" title="Previous" on:click=move |_| current.update(|c| *c = prev_slide(*c))>
                    "\u{2039}"
                </button>
                {(0..SLIDES.len())
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if current.get() == i {
                                        "login-carousel__dot login-carousel__dot--active"
                                    } else {
                                        "login-carousel__dot"
                                    }
                                }
                                on:click=move |_| current.set(i)
                            ></button>
                        }
                    })
                    .collect_view()}
                <button class="login-carousel__next" title="Next" on:click=move |_| current.update(|c| *c = next_slide(*c))>
                    "\u{203A}"
                </button>
            </div>
        </div>
    }
}
