//! Revdex Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Revdex
//! pokemon review backend, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           revdex-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (PokemonService, CatalogService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Pokemon/Category/Owner/Type repos)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      revdex-store (Infrastructure)      │
//! │      (MemoryStore, JsonStore)           │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (Pokemon, Category, Owner, Review)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use revdex_core::application::{CreatePokemon, PokemonService};
//!
//! // 1. Build the service with injected repository adapters
//! let service = PokemonService::new(pokemons, categories, owners, types);
//!
//! // 2. Run the validated creation workflow
//! let created = service.create(Some(CreatePokemon {
//!     name: "Pikachu".into(),
//!     birth_date: chrono::NaiveDate::from_ymd_opt(1996, 2, 27).unwrap(),
//!     category_id: 1,
//!     owner_id: 1,
//!     type_id: 1,
//!     reviews: Vec::new(),
//! }))?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, CreatePokemon, CreatedPokemon, PokemonService, Reference, Rejection,
        StoreError,
        ports::{CategoryRepository, OwnerRepository, PokemonRepository, TypeRepository},
    };
    pub use crate::domain::{
        Category, ElementType, Owner, Pokemon, PokemonDraft, Review, ReviewDraft, Reviewer,
    };
    pub use crate::error::{RevdexError, RevdexResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
