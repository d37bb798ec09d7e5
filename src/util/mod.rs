//! Browser-facing helpers with native fallbacks.

pub mod clock;
pub mod recent_search;
pub mod storage;
