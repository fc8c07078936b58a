//! Implementation of the `revdex create` command.
//!
//! Responsibility: translate CLI arguments into a creation request, run it
//! through the `PokemonService` validation chain, and display the outcome.

use tracing::{info, instrument};

use revdex_core::{
    application::{CreatePokemon, PokemonService},
    error::RevdexError,
};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `revdex create` command.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let repos = super::open_repositories(&global, &config)?;
    let service = PokemonService::new(repos.pokemons, repos.categories, repos.owners, repos.types);

    let request = CreatePokemon {
        name: args.name,
        birth_date: args.birth_date,
        category_id: args.category_id,
        owner_id: args.owner_id,
        type_id: args.type_id,
        reviews: Vec::new(),
    };

    let created = service.create(Some(request)).map_err(RevdexError::from)?;
    info!(id = created.id, name = %created.name, "Pokemon created");

    // The 201-style answer: a reference pointing at the get-by-id lookup.
    output.success(&format!(
        "Created pokemon '{}' (id {})",
        created.name, created.id
    ))?;
    output.print(&format!("View it with: revdex get {}", created.id))?;

    Ok(())
}
