//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define the repository facade the services depend on, one per
//! entity family. The `revdex-store` crate provides implementations.
//!
//! ## Design Notes
//!
//! - Existence checks and creation are separate operations by contract: the
//!   services run the ordered existence checks immediately before `create`,
//!   accepting the race window between them.
//! - `create` reports commit as a bool: `true` means the pokemon row and all
//!   of its join rows exist, `false` means nothing was written. Adapters must
//!   never leave partial state behind.

#[cfg(test)]
use mockall::automock;

use crate::application::error::StoreResult;
use crate::domain::{Category, ElementType, Owner, Pokemon, PokemonDraft};

/// Port for pokemon storage.
///
/// Implemented by:
/// - `revdex_store::MemoryStore` (in-process)
/// - `revdex_store::JsonStore` (file-backed)
#[cfg_attr(test, automock)]
pub trait PokemonRepository: Send + Sync {
    /// Check whether a pokemon with this id exists.
    fn exists(&self, id: u32) -> StoreResult<bool>;

    /// Check whether a pokemon with exactly this name exists (case-sensitive).
    fn exists_by_name(&self, name: &str) -> StoreResult<bool>;

    /// Fetch a pokemon with its resolved links and reviews.
    fn get(&self, id: u32) -> StoreResult<Option<Pokemon>>;

    /// Fetch by exact name.
    fn get_by_name(&self, name: &str) -> StoreResult<Option<Pokemon>>;

    /// List every stored pokemon.
    fn list(&self) -> StoreResult<Vec<Pokemon>>;

    /// Atomically create the pokemon row plus its category/owner/type join
    /// rows and attached reviews. Returns `true` when everything committed,
    /// `false` when nothing was written.
    fn create(
        &self,
        draft: PokemonDraft,
        category_id: u32,
        owner_id: u32,
        type_id: u32,
    ) -> StoreResult<bool>;
}

/// Port for category storage.
#[cfg_attr(test, automock)]
pub trait CategoryRepository: Send + Sync {
    fn exists(&self, id: u32) -> StoreResult<bool>;
    fn exists_by_name(&self, name: &str) -> StoreResult<bool>;
    fn get(&self, id: u32) -> StoreResult<Option<Category>>;
    fn get_by_name(&self, name: &str) -> StoreResult<Option<Category>>;
    fn list(&self) -> StoreResult<Vec<Category>>;
}

/// Port for owner storage.
#[cfg_attr(test, automock)]
pub trait OwnerRepository: Send + Sync {
    fn exists(&self, id: u32) -> StoreResult<bool>;
    fn exists_by_name(&self, name: &str) -> StoreResult<bool>;
    fn get(&self, id: u32) -> StoreResult<Option<Owner>>;
    fn get_by_name(&self, name: &str) -> StoreResult<Option<Owner>>;
    fn list(&self) -> StoreResult<Vec<Owner>>;
}

/// Port for element-type storage.
#[cfg_attr(test, automock)]
pub trait TypeRepository: Send + Sync {
    fn exists(&self, id: u32) -> StoreResult<bool>;
    fn exists_by_name(&self, name: &str) -> StoreResult<bool>;
    fn get(&self, id: u32) -> StoreResult<Option<ElementType>>;
    fn get_by_name(&self, name: &str) -> StoreResult<Option<ElementType>>;
    fn list(&self) -> StoreResult<Vec<ElementType>>;
}
