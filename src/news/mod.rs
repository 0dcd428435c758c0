//! # news — AI News Aggregation Pipeline
//!
//! Fan-out over the configured RSS/Atom feeds, per-feed failure isolation,
//! normalization into one item shape, then a fan-in merge with a uniqueness
//! invariant (no two items share a link) and a total order guarantee
//! (non-increasing by publish timestamp).

pub mod aggregate;
pub mod feeds;
pub mod fetch;
pub mod parse;
