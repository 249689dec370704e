//! Domain types shared by the listing pages.

pub mod message;
pub mod property;
pub mod resource;
pub mod search;
pub mod types;
