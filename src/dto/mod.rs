//! DTO modules that bridge the listing endpoints with the search core.

pub mod listing;
