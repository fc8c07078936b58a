//! Implementation of the `revdex list` command.

use tracing::instrument;

use revdex_core::{
    application::{CatalogService, PokemonService},
    error::RevdexError,
};

use crate::{
    cli::{EntityKindPlural, GlobalArgs, ListArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `revdex list` command.
#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let repos = super::open_repositories(&global, &config)?;

    match args.kind {
        EntityKindPlural::Pokemons => {
            let service = PokemonService::new(
                repos.pokemons,
                repos.categories,
                repos.owners,
                repos.types,
            );
            let pokemons = service.list().map_err(RevdexError::from)?;

            if output.format() == OutputFormat::Json {
                output.payload(&serde_json::to_string_pretty(&pokemons)?)?;
                return Ok(());
            }
            output.header(&format!("Pokemons ({})", pokemons.len()))?;
            for p in &pokemons {
                output.payload(&format!(
                    "  #{:<4} {:<16} born {}  ({} reviews)",
                    p.id,
                    p.name,
                    p.birth_date,
                    p.reviews.len()
                ))?;
            }
        }
        EntityKindPlural::Categories => {
            let catalog = CatalogService::new(repos.categories, repos.owners, repos.types);
            let categories = catalog.list_categories().map_err(RevdexError::from)?;

            if output.format() == OutputFormat::Json {
                output.payload(&serde_json::to_string_pretty(&categories)?)?;
                return Ok(());
            }
            output.header(&format!("Categories ({})", categories.len()))?;
            for c in &categories {
                output.payload(&format!("  #{:<4} {}", c.id, c.name))?;
            }
        }
        EntityKindPlural::Owners => {
            let catalog = CatalogService::new(repos.categories, repos.owners, repos.types);
            let owners = catalog.list_owners().map_err(RevdexError::from)?;

            if output.format() == OutputFormat::Json {
                output.payload(&serde_json::to_string_pretty(&owners)?)?;
                return Ok(());
            }
            output.header(&format!("Owners ({})", owners.len()))?;
            for o in &owners {
                output.payload(&format!("  #{:<4} {:<20} gym: {}", o.id, o.name, o.gym))?;
            }
        }
        EntityKindPlural::Types => {
            let catalog = CatalogService::new(repos.categories, repos.owners, repos.types);
            let types = catalog.list_types().map_err(RevdexError::from)?;

            if output.format() == OutputFormat::Json {
                output.payload(&serde_json::to_string_pretty(&types)?)?;
                return Ok(());
            }
            output.header(&format!("Types ({})", types.len()))?;
            for t in &types {
                output.payload(&format!("  #{:<4} {}", t.id, t.name))?;
            }
        }
    }

    Ok(())
}
