//! Entity definitions for the hero.

mod components;
mod hero;
mod identity;

pub use components::*;
pub use hero::*;
pub use identity::*;
