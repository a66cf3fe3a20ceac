//! Platform-agnostic helpers shared by views and the data layer.

pub mod format;
pub mod platform;
pub mod sanitize;
