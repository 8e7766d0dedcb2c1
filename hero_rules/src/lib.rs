//! # Hero Rules
//!
//! Data model for a single hero across a multi-day narrative session.
//! This crate owns the shape of the hero and the invariants each piece enforces
//! on itself (write-once fields, slot capacity, ordered history). It contains no
//! text analysis and no session plumbing.

pub mod entities;
pub mod mechanics;
pub mod progress;

pub use entities::*;
pub use mechanics::*;
pub use progress::*;
