//! Session-expiry watcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per window `focus` event: reads the stored ID token, decodes
//! its `exp` claim and, when the token has expired while the page is
//! visible, shows the session-expired notice and logs out. There is no
//! timer; a token that expires while the tab keeps focus is only caught
//! on the next focus.
//!
//! LIFECYCLE
//! =========
//! `setup` registers the listener on a `FocusTarget` and returns its handle;
//! `teardown` consumes that handle. The browser target wraps `window`; tests
//! use an in-memory target they can fire by hand.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use super::toast::SESSION_EXPIRED_MESSAGE;
use crate::routes::{is_protected_route, is_tour_route};

// =============================================================================
// TOKEN DECODING
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims the client cares about. Signature is never verified here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Expiry in seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub sub: Option<String>,
}

/// Decode the payload segment of a JWT.
///
/// # Errors
///
/// Returns [`TokenError`] when the token is not `header.payload.signature`
/// or the payload is not base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenDetails {
    pub exp: Option<i64>,
    pub is_expired: bool,
}

/// Expiry details for an optional stored token at `now_ms`.
///
/// Missing or undecodable tokens count as not expired; a token without an
/// `exp` claim never expires.
pub fn extract_token_details(token: Option<&str>, now_ms: i64) -> TokenDetails {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return TokenDetails::default();
    };
    match decode_claims(token) {
        Ok(claims) => TokenDetails {
            exp: claims.exp,
            is_expired: claims.exp.is_some_and(|exp| now_ms >= exp.saturating_mul(1000)),
        },
        Err(e) => {
            tracing::warn!(error = %e, "stored token could not be decoded");
            TokenDetails::default()
        }
    }
}

// =============================================================================
// WATCHER
// =============================================================================

/// Outcome of one focus check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    /// Route is both protected and the tour: nothing inspected.
    Skipped,
    /// Token still valid, absent, or page hidden.
    Active,
    /// Token expired; `notify` is set when an expiry claim was present.
    Expired { notify: bool },
}

/// Everything the watcher reads from or does to its environment.
pub trait SessionHost {
    fn pathname(&self) -> String;
    fn document_hidden(&self) -> bool;
    fn stored_token(&self) -> Option<String>;
    fn now_ms(&self) -> i64;
    fn notify(&self, message: &str);
    fn logout(&self);
}

/// Source of window focus events.
pub trait FocusTarget {
    type Handle;

    fn add_focus_listener(&self, listener: Rc<dyn Fn()>) -> Self::Handle;
    fn remove_focus_listener(&self, handle: Self::Handle);
}

/// Evaluate the session without side effects.
pub fn evaluate<H: SessionHost + ?Sized>(host: &H) -> SessionCheck {
    let pathname = host.pathname();
    if is_protected_route(&pathname) && is_tour_route(&pathname) {
        return SessionCheck::Skipped;
    }
    let details = extract_token_details(host.stored_token().as_deref(), host.now_ms());
    if !host.document_hidden() && details.is_expired {
        SessionCheck::Expired { notify: details.exp.is_some() }
    } else {
        SessionCheck::Active
    }
}

/// Evaluate and act: notify and log out on expiry.
pub fn handle_focus<H: SessionHost + ?Sized>(host: &H) -> SessionCheck {
    let check = evaluate(host);
    if let SessionCheck::Expired { notify } = check {
        tracing::info!("session expired; logging out");
        if notify {
            host.notify(SESSION_EXPIRED_MESSAGE);
        }
        host.logout();
    }
    check
}

/// Focus-driven session watcher bound to one host.
pub struct SessionWatcher<H> {
    host: Rc<H>,
}

impl<H: SessionHost + 'static> SessionWatcher<H> {
    pub fn new(host: H) -> Self {
        Self { host: Rc::new(host) }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Run one check now, as a focus event would.
    pub fn on_focus(&self) -> SessionCheck {
        handle_focus(self.host.as_ref())
    }

    /// Register the focus listener. Pass the handle to [`Self::teardown`].
    pub fn setup<F: FocusTarget>(&self, target: &F) -> F::Handle {
        let host = Rc::clone(&self.host);
        target.add_focus_listener(Rc::new(move || {
            handle_focus(host.as_ref());
        }))
    }

    /// Deregister a listener created by [`Self::setup`].
    pub fn teardown<F: FocusTarget>(target: &F, handle: F::Handle) {
        target.remove_focus_listener(handle);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserSessionHost, WindowFocusTarget};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{FocusTarget, SessionHost};
    use crate::routes::SIGNIN;
    use crate::state::auth::{AuthState, stored_id_token};
    use crate::state::toast::ToastState;

    /// `window` as a focus event source.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WindowFocusTarget;

    pub struct WindowFocusHandle {
        closure: Closure<dyn Fn()>,
    }

    impl FocusTarget for WindowFocusTarget {
        type Handle = Option<WindowFocusHandle>;

        fn add_focus_listener(&self, listener: Rc<dyn Fn()>) -> Self::Handle {
            let window = web_sys::window()?;
            let closure = Closure::<dyn Fn()>::new(move || listener());
            if window
                .add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::warn!("focus listener registration failed");
                return None;
            }
            Some(WindowFocusHandle { closure })
        }

        fn remove_focus_listener(&self, handle: Self::Handle) {
            let (Some(window), Some(handle)) = (web_sys::window(), handle) else {
                return;
            };
            let _ = window.remove_event_listener_with_callback("focus", handle.closure.as_ref().unchecked_ref());
        }
    }

    /// Session host backed by the browser and the app's reactive state.
    pub struct BrowserSessionHost {
        pub auth: RwSignal<AuthState>,
        pub toasts: RwSignal<ToastState>,
    }

    impl SessionHost for BrowserSessionHost {
        fn pathname(&self) -> String {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }

        fn document_hidden(&self) -> bool {
            web_sys::window()
                .and_then(|w| w.document())
                .is_some_and(|d| d.hidden())
        }

        fn stored_token(&self) -> Option<String> {
            stored_id_token()
        }

        fn now_ms(&self) -> i64 {
            crate::util::clock::now_ms()
        }

        fn notify(&self, message: &str) {
            self.toasts.update(|t| {
                t.info(message);
            });
        }

        fn logout(&self) {
            self.auth.update(AuthState::logout);
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(SIGNIN);
            }
        }
    }
}
