//! Domain entities for the pokemon review model.
//!
//! Entities are plain data with serde derives so the store adapters can
//! persist them without an extra mapping layer. Identity is a plain `u32`
//! assigned by the store on creation.

pub mod catalog;
pub mod pokemon;
pub mod review;

pub use catalog::{Category, ElementType, Owner};
pub use pokemon::{Pokemon, PokemonCategory, PokemonDraft, PokemonOwner, PokemonType};
pub use review::{Review, ReviewDraft, Reviewer};
