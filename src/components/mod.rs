//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome. They receive state signals as explicit
//! props and delegate decisions to the plain models in `state`.

pub mod app_bar;
pub mod login_carousel;
pub mod nav_bar;
pub mod support_menu;
pub mod toast_host;
pub mod whats_new_modal;
