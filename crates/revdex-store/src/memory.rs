//! Thread-safe in-memory store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use revdex_core::{
    application::{
        error::{StoreError, StoreResult},
        ports::{CategoryRepository, OwnerRepository, PokemonRepository, TypeRepository},
    },
    domain::{Category, ElementType, Owner, Pokemon, PokemonDraft},
};

use crate::{seed, tables::Tables};

/// Thread-safe in-memory store implementing every repository port.
///
/// Cloning is cheap and shares the underlying tables, so one store can be
/// handed to several services as separate boxed repositories.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the seed fixtures.
    pub fn with_seed() -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed::seeded_tables())),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl PokemonRepository for MemoryStore {
    fn exists(&self, id: u32) -> StoreResult<bool> {
        Ok(self.read()?.pokemon_exists(id))
    }

    fn exists_by_name(&self, name: &str) -> StoreResult<bool> {
        Ok(self.read()?.pokemon_exists_by_name(name))
    }

    fn get(&self, id: u32) -> StoreResult<Option<Pokemon>> {
        Ok(self.read()?.pokemon(id))
    }

    fn get_by_name(&self, name: &str) -> StoreResult<Option<Pokemon>> {
        Ok(self.read()?.pokemon_by_name(name))
    }

    fn list(&self) -> StoreResult<Vec<Pokemon>> {
        Ok(self.read()?.pokemons())
    }

    fn create(
        &self,
        draft: PokemonDraft,
        category_id: u32,
        owner_id: u32,
        type_id: u32,
    ) -> StoreResult<bool> {
        // All rows go in under one write lock; no partial state is ever
        // observable from another thread.
        let mut tables = self.write()?;
        let id = tables.insert_pokemon(draft, category_id, owner_id, type_id);
        debug!(id, "Pokemon row and join rows committed");
        Ok(true)
    }
}

impl CategoryRepository for MemoryStore {
    fn exists(&self, id: u32) -> StoreResult<bool> {
        Ok(self.read()?.category_exists(id))
    }

    fn exists_by_name(&self, name: &str) -> StoreResult<bool> {
        Ok(self.read()?.category_exists_by_name(name))
    }

    fn get(&self, id: u32) -> StoreResult<Option<Category>> {
        Ok(self.read()?.category(id))
    }

    fn get_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        Ok(self.read()?.category_by_name(name))
    }

    fn list(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories())
    }
}

impl OwnerRepository for MemoryStore {
    fn exists(&self, id: u32) -> StoreResult<bool> {
        Ok(self.read()?.owner_exists(id))
    }

    fn exists_by_name(&self, name: &str) -> StoreResult<bool> {
        Ok(self.read()?.owner_exists_by_name(name))
    }

    fn get(&self, id: u32) -> StoreResult<Option<Owner>> {
        Ok(self.read()?.owner(id))
    }

    fn get_by_name(&self, name: &str) -> StoreResult<Option<Owner>> {
        Ok(self.read()?.owner_by_name(name))
    }

    fn list(&self) -> StoreResult<Vec<Owner>> {
        Ok(self.read()?.owners())
    }
}

impl TypeRepository for MemoryStore {
    fn exists(&self, id: u32) -> StoreResult<bool> {
        Ok(self.read()?.type_exists(id))
    }

    fn exists_by_name(&self, name: &str) -> StoreResult<bool> {
        Ok(self.read()?.type_exists_by_name(name))
    }

    fn get(&self, id: u32) -> StoreResult<Option<ElementType>> {
        Ok(self.read()?.element_type(id))
    }

    fn get_by_name(&self, name: &str) -> StoreResult<Option<ElementType>> {
        Ok(self.read()?.element_type_by_name(name))
    }

    fn list(&self) -> StoreResult<Vec<ElementType>> {
        Ok(self.read()?.element_types())
    }
}
