//! Non-blocking notifications.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::net::ApiError;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has timed out! Please sign in again to continue.";

/// Generic fetch-failure text with the entity name interpolated.
pub fn entity_fetch_error(entity: &str) -> String {
    format!("Error while fetching {entity}!")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    /// Show an API failure: the server's message when it sent one, else `fallback`.
    pub fn api_error(&mut self, err: &ApiError, fallback: &str) -> u64 {
        tracing::warn!(error = %err, "request failed");
        let message = err.server_message().unwrap_or_else(|| fallback.to_owned());
        self.error(message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message });
        id
    }
}
