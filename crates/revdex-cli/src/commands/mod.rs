//! Command handlers.
//!
//! Each submodule translates parsed CLI arguments into service calls and
//! displays the result. No business logic lives here; the validation chain
//! and the rejection taxonomy are entirely `revdex-core`'s.

pub mod completions;
pub mod create;
pub mod get;
pub mod list;

use std::path::PathBuf;

use tracing::debug;

use revdex_core::{
    application::ports::{
        CategoryRepository, OwnerRepository, PokemonRepository, TypeRepository,
    },
    error::RevdexError,
};
use revdex_store::{JsonStore, MemoryStore};

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// One boxed repository per entity family, all backed by the same store.
pub(crate) struct Repositories {
    pub pokemons: Box<dyn PokemonRepository>,
    pub categories: Box<dyn CategoryRepository>,
    pub owners: Box<dyn OwnerRepository>,
    pub types: Box<dyn TypeRepository>,
}

/// Open the store selected by `--data` / config, falling back to a seeded
/// in-memory store.
pub(crate) fn open_repositories(
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<Repositories> {
    let data_file: Option<PathBuf> = global
        .data
        .clone()
        .or_else(|| config.store.data_file.clone());

    match data_file {
        Some(path) => {
            debug!(path = %path.display(), "Opening JSON store");
            let store = JsonStore::open(path).map_err(RevdexError::from)?;
            Ok(Repositories {
                pokemons: Box::new(store.clone()),
                categories: Box::new(store.clone()),
                owners: Box::new(store.clone()),
                types: Box::new(store),
            })
        }
        None => {
            debug!("No data file configured, using seeded in-memory store");
            let store = MemoryStore::with_seed();
            Ok(Repositories {
                pokemons: Box::new(store.clone()),
                categories: Box::new(store.clone()),
                owners: Box::new(store.clone()),
                types: Box::new(store),
            })
        }
    }
}
