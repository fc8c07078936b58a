//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "create a pokemon" or "look up a category".

pub mod catalog_service;
pub mod pokemon_service;

pub use catalog_service::CatalogService;
pub use pokemon_service::{CreatePokemon, CreatedPokemon, PokemonService};
