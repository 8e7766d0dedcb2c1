//! # Hero Core
//!
//! Owns the hero for one narrative session. Free-form player text goes through
//! the attribute extractor, the extracted fields are merged into the player
//! state store, and the store's snapshot travels to and from the session
//! gateway.
//!
//! ## Core Components
//!
//! - **extractor**: Pattern-based identity extraction from raw player text
//! - **store**: The player state store and its derived views
//! - **gateway**: Request/response payloads exchanged with the narrative service
//! - **persist**: Save envelope for the flat hero state
//! - **config**: TOML-backed store configuration
//!
//! Every store mutation reports failure through a `bool` or a silent no-op.
//! Only configuration and persistence return [`HeroError`].

pub mod config;
pub mod error;
pub mod extractor;
pub mod gateway;
pub mod persist;
pub mod store;

pub use config::*;
pub use error::*;
pub use extractor::*;
pub use gateway::*;
pub use persist::*;
pub use store::*;
