//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Components receive these as explicit props (`NavBarDeps`) rather than
//! looking them up implicitly; the plain structs here carry the logic and
//! are tested without a reactive runtime.

pub mod auth;
pub mod branding;
pub mod nav_bar;
pub mod search;
pub mod session;
pub mod toast;
pub mod tour;
