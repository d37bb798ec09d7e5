//! Root application component with routing and shared state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_bar::{AppBar, NavBarDeps};
use crate::components::toast_host::ToastHost;
use crate::config::UiLinks;
use crate::pages::signin::SignInPage;
use crate::state::auth::AuthState;
use crate::state::branding::ApplicationConfig;
use crate::state::search::GlobalSearchState;
use crate::state::toast::ToastState;
use crate::state::tour::TourState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the shared state signals and hands them to the app bar and pages
/// as explicit props.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let tour = RwSignal::new(TourState::default());
    let search = RwSignal::new(GlobalSearchState::default());
    let toasts = RwSignal::new(ToastState::default());
    let branding = RwSignal::new(ApplicationConfig::default());
    let deps = NavBarDeps { auth, tour, search, toasts, branding };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::config::ApiConfig;
        use crate::net::ApiClient;
        use crate::net::transport::BrowserTransport;
        use crate::state::toast::entity_fetch_error;

        auth.update(AuthState::sync_from_storage);

        let client = ApiClient::new(BrowserTransport, &ApiConfig::default());
        match client.get_auth_config().await {
            Ok(config) => auth.update(|a| a.auth_config = Some(config)),
            Err(e) => toasts.update(|t| {
                t.api_error(&e, &entity_fetch_error("auth configuration"));
            }),
        }
        match client.get_application_config().await {
            Ok(config) => branding.set(config),
            Err(e) => tracing::warn!(error = %e, "custom logo configuration unavailable; using bundled logo"),
        }
    });

    let auth_config = Signal::derive(move || auth.with(|a| a.auth_config.clone()));
    let branding_signal = Signal::derive(move || branding.get());
    let on_login = Callback::new(move |()| {
        let provider = auth.with_untracked(|a| a.auth_config.as_ref().map(|c| c.provider.as_str().to_owned()));
        tracing::info!(provider = provider.as_deref().unwrap_or("none"), "sign-in requested");
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-ui.css"/>
        <Title text="Metadata Catalog"/>

        <Router>
            <AppBar deps=deps links=UiLinks::default()/>
            <main class="page-content">
                <Routes fallback=|| view! { <div class="page-placeholder"></div> }>
                    <Route
                        path=StaticSegment("signin")
                        view=move || view! { <SignInPage auth_config=auth_config branding=branding_signal on_login=on_login/> }
                    />
                </Routes>
            </main>
            <ToastHost toasts=toasts/>
        </Router>
    }
}
