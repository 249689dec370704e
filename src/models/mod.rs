//! Models loaded from outside the listing core.

pub mod config;
