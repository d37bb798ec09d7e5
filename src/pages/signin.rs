//! Sign-in page: branding, login carousel and the provider sign-in button.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

use crate::components::login_carousel::LoginCarousel;
use crate::state::auth::{AuthConfig, AuthProvider};
use crate::state::branding::ApplicationConfig;

/// What the sign-in area shows for a configured provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInButton {
    /// Render a button with this label.
    Label(String),
    /// No sign-in flow for the provider; show this message instead.
    Unsupported(String),
}

pub fn sign_in_button(config: &AuthConfig) -> SignInButton {
    let name = match &config.provider {
        AuthProvider::Google => "google",
        AuthProvider::Okta => "okta",
        AuthProvider::Auth0 => "auth0",
        AuthProvider::Azure => "azure",
        AuthProvider::CustomOidc => config
            .provider_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("sso"),
        AuthProvider::AwsCognito => "aws cognito",
        AuthProvider::Unknown(raw) => {
            return SignInButton::Unsupported(format!("SSO Provider {raw} is not supported"));
        }
    };
    SignInButton::Label(format!("Sign in with {name}"))
}

#[component]
pub fn SignInPage(
    auth_config: Signal<Option<AuthConfig>>,
    branding: Signal<ApplicationConfig>,
    on_login: Callback<()>,
) -> impl IntoView {
    let button = move || {
        auth_config.get().map(|config| match sign_in_button(&config) {
            SignInButton::Label(label) => view! {
                <button class="btn btn--primary signin__button" on:click=move |_| on_login.run(())>
                    {label}
                </button>
            }
            .into_any(),
            SignInButton::Unsupported(message) => {
                view! { <p class="signin__unsupported">{message}</p> }.into_any()
            }
        })
    };

    view! {
        <div class="signin-page" data-testid="signin-page">
            <div class="signin-page__form">
                <img
                    class="signin-page__logo"
                    data-testid="brand-logo-image"
                    alt="logo"
                    src=move || branding.with(|b| b.logo_src().to_owned())
                />
                <p class="signin-page__tagline">"Centralized metadata store, discover, collaborate and get your data right"</p>
                {button}
            </div>
            <div class="signin-page__aside">
                <div class="signin-page__bg" data-testid="bg-image"></div>
                <LoginCarousel />
            </div>
        </div>
    }
}
