//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `revdex-store` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `PokemonRepository`, `CategoryRepository`, `OwnerRepository`, `TypeRepository`
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CategoryRepository, OwnerRepository, PokemonRepository, TypeRepository};

#[cfg(test)]
pub use output::{
    MockCategoryRepository, MockOwnerRepository, MockPokemonRepository, MockTypeRepository,
};
