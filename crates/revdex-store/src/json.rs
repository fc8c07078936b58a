//! JSON-file-backed store.
//!
//! The same tables as [`crate::memory::MemoryStore`], persisted to a single
//! JSON file so the CLI keeps its data across invocations. Reads are served
//! from memory; the only mutation (`create`) applies the rows in memory,
//! persists the whole state, and rolls the rows back if persisting fails.
//! That keeps the all-or-nothing contract: a half-written create is never
//! observable, in memory or on disk.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard},
};

use tracing::{debug, warn};

use revdex_core::{
    application::{
        error::{StoreError, StoreResult},
        ports::{CategoryRepository, OwnerRepository, PokemonRepository, TypeRepository},
    },
    domain::{Category, ElementType, Owner, Pokemon, PokemonDraft},
};

use crate::{seed, tables::Tables};

/// File-backed store implementing every repository port.
#[derive(Clone)]
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: Arc<RwLock<Tables>>,
}

impl JsonStore {
    /// Open a store at `path`, loading existing data. A missing file starts
    /// as the seed fixture and is written on the first successful create.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let tables = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| StoreError::Persistence {
                reason: format!("reading {}: {e}", path.display()),
            })?;
            serde_json::from_str(&raw).map_err(|e| StoreError::Persistence {
                reason: format!("parsing {}: {e}", path.display()),
            })?
        } else {
            debug!(path = %path.display(), "No data file yet, starting from seed");
            seed::seeded_tables()
        };

        Ok(Self {
            path,
            inner: Arc::new(RwLock::new(tables)),
        })
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    /// Serialize the tables next to the target file, then rename into place
    /// so a crash mid-write cannot corrupt existing data.
    fn persist(path: &Path, tables: &Tables) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(tables).map_err(|e| StoreError::Persistence {
            reason: format!("serializing store: {e}"),
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|e| StoreError::Persistence {
            reason: format!("writing {}: {e}", tmp.display()),
        })?;
        fs::rename(&tmp, path).map_err(|e| StoreError::Persistence {
            reason: format!("replacing {}: {e}", path.display()),
        })
    }
}

impl PokemonRepository for JsonStore {
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
        let mut tables = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = tables.insert_pokemon(draft, category_id, owner_id, type_id);

        match Self::persist(&self.path, &tables) {
            Ok(()) => {
                debug!(id, path = %self.path.display(), "Pokemon committed to data file");
                Ok(true)
            }
            Err(e) => {
                // Keep memory consistent with the file: the rows never existed.
                warn!(id, error = %e, "Persist failed, rolling back in-memory rows");
                tables.remove_pokemon(id);
                Err(e)
            }
        }
    }
}

impl CategoryRepository for JsonStore {
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

impl OwnerRepository for JsonStore {
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

impl TypeRepository for JsonStore {
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
