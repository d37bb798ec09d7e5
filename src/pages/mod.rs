//! Routed pages.

pub mod signin;
