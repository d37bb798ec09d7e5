//! Application bar: wires `NavBarState` to the router, storage and API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App` above the routed pages. Renders the navbar only on
//! protected routes for an authenticated user, but always owns the session
//! watcher and the version fetch so both run for the page's lifetime.
//!
//! Dependencies arrive as one explicit `NavBarDeps` bundle instead of
//! ambient context so the wiring is visible at the call site.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::nav_bar::NavBar;
use super::whats_new_modal::WhatsNewModal;
use crate::config::UiLinks;
use crate::routes::{is_protected_route, search_query_param};
use crate::state::auth::AuthState;
use crate::state::branding::ApplicationConfig;
use crate::state::nav_bar::{NavBarState, SearchAction};
use crate::state::search::GlobalSearchState;
use crate::state::toast::ToastState;
use crate::state::tour::TourState;
use crate::util::clock::now_ms;
use crate::util::recent_search::add_to_recent_searched;

/// Reactive state the app bar reads and writes.
#[derive(Clone, Copy)]
pub struct NavBarDeps {
    pub auth: RwSignal<AuthState>,
    pub tour: RwSignal<TourState>,
    pub search: RwSignal<GlobalSearchState>,
    pub toasts: RwSignal<ToastState>,
    pub branding: RwSignal<ApplicationConfig>,
}

#[component]
pub fn AppBar(deps: NavBarDeps, links: UiLinks) -> impl IntoView {
    let NavBarDeps { auth, tour, search, toasts, branding } = deps;
    let location = use_location();
    let links = StoredValue::new(links);

    // Only a change of `search` itself re-syncs; other parameters leave typed text alone.
    let query_search = Memo::new(move |_| location.search.with(|s| search_query_param(s)));
    let nav = RwSignal::new(NavBarState::new(&query_search.get_untracked()));
    let pending = RwSignal::new(None::<SearchAction>);

    // Keep the box in step with the URL and with the tour.
    Effect::new(move || {
        query_search.with(|query| nav.update(|n| n.sync_from_query(query)));
    });
    Effect::new(move || {
        tour.with(|t| nav.update(|n| n.sync_from_tour(t)));
    });

    let navigate = use_navigate();
    Effect::new(move || {
        let Some(action) = pending.get() else {
            return;
        };
        pending.set(None);
        if let SearchAction::Explore { path, term } = action {
            add_to_recent_searched(&term, now_ms());
            navigate(&path, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::config::ApiConfig;
        use crate::net::ApiClient;
        use crate::net::transport::BrowserTransport;
        use crate::state::session::{BrowserSessionHost, SessionWatcher, WindowFocusTarget};
        use crate::state::toast::entity_fetch_error;

        leptos::task::spawn_local(async move {
            let client = ApiClient::new(BrowserTransport, &ApiConfig::default());
            match client.get_version().await {
                Ok(info) => nav.update(|n| n.version = Some(info.version)),
                Err(e) => toasts.update(|t| {
                    t.api_error(&e, &entity_fetch_error("Version"));
                }),
            }
        });

        let watcher = SessionWatcher::new(BrowserSessionHost { auth, toasts });
        let focus_handle = StoredValue::new_local(watcher.setup(&WindowFocusTarget));
        on_cleanup(move || {
            if let Some(handle) = focus_handle.try_update_value(Option::take) {
                SessionWatcher::<BrowserSessionHost>::teardown(&WindowFocusTarget, handle);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let on_search_change = Callback::new(move |value: String| {
        tour.update(|t| nav.update(|n| n.handle_search_change(&value, t)));
    });

    let on_key_down = Callback::new(move |(key, input): (String, String)| {
        if key != "Enter" {
            return;
        }
        let criteria = search.get_untracked();
        let mut action = None;
        tour.update(|t| nav.update(|n| action = n.handle_key_down(&key, &input, t, &criteria)));
        if let Some(SearchAction::Explore { .. }) = action {
            pending.set(action);
        }
    });

    let on_search_click = Callback::new(move |()| {
        let action = tour.with_untracked(|t| {
            search.with_untracked(|s| {
                let mut action = SearchAction::Stay;
                nav.update(|n| action = n.handle_click(t, s));
                action
            })
        });
        if action != SearchAction::Stay {
            pending.set(Some(action));
        }
    });

    let on_clear = Callback::new(move |()| {
        let action = tour.with_untracked(|t| {
            search.with_untracked(|s| {
                let mut action = SearchAction::Stay;
                nav.update(|n| action = n.handle_clear(t, s));
                action
            })
        });
        if action != SearchAction::Stay {
            pending.set(Some(action));
        }
    });

    let on_search_box_close = Callback::new(move |()| nav.update(|n| n.set_search_box_open(false)));
    let on_feature_modal = Callback::new(move |()| nav.update(|n| n.set_feature_modal_open(true)));
    let on_feature_modal_close = Callback::new(move |()| nav.update(|n| n.set_feature_modal_open(false)));

    let search_value = Signal::derive(move || nav.with(|n| n.search_value.clone()));
    let search_box_open = Signal::derive(move || nav.with(|n| n.search_box_open));
    let version = Signal::derive(move || nav.with(|n| n.version.clone()));
    let logo_src = Signal::derive(move || branding.with(|b| b.monogram_src().to_owned()));

    let visible = move || is_protected_route(&location.pathname.get()) && auth.with(|a| a.is_authenticated);

    view! {
        <Show when=visible>
            <NavBar
                search_value=search_value
                search_box_open=search_box_open
                version=version
                logo_src=logo_src
                links=links
                on_search_change=on_search_change
                on_key_down=on_key_down
                on_search_click=on_search_click
                on_clear=on_clear
                on_search_box_close=on_search_box_close
                on_feature_modal=on_feature_modal
            />
        </Show>
        <Show when=move || nav.with(|n| n.feature_modal_open)>
            <WhatsNewModal version=version on_close=on_feature_modal_close />
        </Show>
    }
}
