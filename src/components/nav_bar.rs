//! Header bar: logo, search box and support menu.
//!
//! Purely presentational. Every interaction is reported through a callback
//! so `AppBar` can run it through `NavBarState`.

use leptos::prelude::*;

use super::support_menu::SupportMenu;
use crate::config::UiLinks;
use crate::routes;

#[component]
pub fn NavBar(
    /// Current search text.
    search_value: Signal<String>,
    /// Whether the suggestion box is shown.
    search_box_open: Signal<bool>,
    version: Signal<Option<String>>,
    logo_src: Signal<String>,
    links: StoredValue<UiLinks>,
    on_search_change: Callback<String>,
    /// Key name and the input's current text.
    on_key_down: Callback<(String, String)>,
    on_search_click: Callback<()>,
    on_clear: Callback<()>,
    on_search_box_close: Callback<()>,
    on_feature_modal: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="navbar" data-testid="navbar">
            <a class="navbar__brand" href=routes::MY_DATA>
                <img class="navbar__logo" data-testid="image" alt="logo" src=move || logo_src.get() />
            </a>

            <div class="navbar__search">
                <input
                    class="navbar__search-input"
                    data-testid="searchBox"
                    type="text"
                    placeholder="Search for Table, Topics, Dashboards, Pipelines and ML Models"
                    autocomplete="off"
                    prop:value=move || search_value.get()
                    on:input=move |ev| on_search_change.run(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        on_key_down.run((ev.key(), event_target_value(&ev)));
                    }
                    on:blur=move |_| on_search_box_close.run(())
                />
                <Show when=move || !search_value.get().is_empty()>
                    <button
                        class="navbar__search-clear"
                        data-testid="cancel-icon"
                        title="Clear"
                        on:click=move |_| on_clear.run(())
                    >
                        "\u{2715}"
                    </button>
                </Show>
                <button
                    class="navbar__search-icon"
                    data-testid="search-icon"
                    title="Search"
                    on:click=move |_| on_search_click.run(())
                >
                    "\u{1F50D}"
                </button>
                <Show when=move || search_box_open.get()>
                    <div class="navbar__suggestions" data-testid="suggestion-box">
                        <span class="navbar__suggestions-hint">
                            "Press Enter to search for \"" {move || search_value.get()} "\""
                        </span>
                    </div>
                </Show>
            </div>

            <span class="navbar__spacer"></span>

            <SupportMenu links=links version=version on_feature_modal=on_feature_modal />
        </header>
    }
}
