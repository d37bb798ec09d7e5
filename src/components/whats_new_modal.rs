//! "What's new" release-notes modal opened from the support menu.

use leptos::prelude::*;

use crate::net::version::release_version;

/// Highlights of the running release.
const HIGHLIGHTS: &[(&str, &str)] = &[
    ("KPIs", "Track data-insight targets and their results over time."),
    ("Explore", "Search results open sorted by relevance."),
    ("Session", "Expired sessions are detected when the window regains focus."),
];

#[component]
pub fn WhatsNewModal(version: Signal<Option<String>>, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    let title = move || {
        let version = version.get();
        format!("What's new in {}", release_version(version.as_deref().unwrap_or_default()))
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog whats-new"
                data-testid="whats-new-dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>{title}</h2>
                <ul class="whats-new__list">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(name, text)| {
                            view! {
                                <li class="whats-new__item">
                                    <strong>{*name}</strong>
                                    " "
                                    <span>{*text}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
