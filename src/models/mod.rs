//! Request-scoped data models for the bucket browser.
//!
//! Nothing here is persisted: a `Listing` lives for one store query and an
//! `EpisodeSequence` for one player page.

pub mod episode;
pub mod object;
