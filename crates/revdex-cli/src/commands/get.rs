//! Implementation of the `revdex get` command.
//!
//! A numeric selector looks up by id, anything else by exact name; both
//! routes answer `NotFound` through the shared rejection taxonomy.

use tracing::instrument;

use revdex_core::{
    application::{CatalogService, PokemonService},
    domain::Pokemon,
    error::RevdexError,
};

use crate::{
    cli::{EntityKind, GetArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `revdex get` command.
#[instrument(skip_all, fields(selector = %args.selector, kind = ?args.kind))]
pub fn execute(
    args: GetArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let repos = super::open_repositories(&global, &config)?;
    let by_id = args.selector.parse::<u32>().ok();

    match args.kind {
        EntityKind::Pokemon => {
            let service = PokemonService::new(
                repos.pokemons,
                repos.categories,
                repos.owners,
                repos.types,
            );
            let pokemon = match by_id {
                Some(id) => service.get(id),
                None => service.get_by_name(&args.selector),
            }
            .map_err(RevdexError::from)?;
            render_pokemon(&pokemon, &output)?;
        }
        EntityKind::Category => {
            let catalog = CatalogService::new(repos.categories, repos.owners, repos.types);
            let category = match by_id {
                Some(id) => catalog.get_category(id),
                None => catalog.get_category_by_name(&args.selector),
            }
            .map_err(RevdexError::from)?;
            render(&category, &output, |c| format!("Category #{}: {}", c.id, c.name))?;
        }
        EntityKind::Owner => {
            let catalog = CatalogService::new(repos.categories, repos.owners, repos.types);
            let owner = match by_id {
                Some(id) => catalog.get_owner(id),
                None => catalog.get_owner_by_name(&args.selector),
            }
            .map_err(RevdexError::from)?;
            render(&owner, &output, |o| {
                format!("Owner #{}: {} ({})", o.id, o.name, o.gym)
            })?;
        }
        EntityKind::Type => {
            let catalog = CatalogService::new(repos.categories, repos.owners, repos.types);
            let element = match by_id {
                Some(id) => catalog.get_type(id),
                None => catalog.get_type_by_name(&args.selector),
            }
            .map_err(RevdexError::from)?;
            render(&element, &output, |t| format!("Type #{}: {}", t.id, t.name))?;
        }
    }

    Ok(())
}

fn render<T: serde::Serialize>(
    entity: &T,
    output: &OutputManager,
    line: impl Fn(&T) -> String,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.payload(&serde_json::to_string_pretty(entity)?)?;
    } else {
        output.payload(&line(entity))?;
    }
    Ok(())
}

fn render_pokemon(pokemon: &Pokemon, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.payload(&serde_json::to_string_pretty(pokemon)?)?;
        return Ok(());
    }

    output.payload(&format!("Pokemon #{}: {}", pokemon.id, pokemon.name))?;
    output.payload(&format!("  Born:       {}", pokemon.birth_date))?;
    output.payload(&format!("  Categories: {}", ids(&pokemon.category_ids)))?;
    output.payload(&format!("  Types:      {}", ids(&pokemon.type_ids)))?;
    output.payload(&format!("  Owners:     {}", ids(&pokemon.owner_ids)))?;
    output.payload(&format!("  Reviews:    {}", pokemon.reviews.len()))?;
    for review in &pokemon.reviews {
        output.payload(&format!(
            "    [{}/5] {} - {}",
            review.rating, review.title, review.text
        ))?;
    }
    Ok(())
}

fn ids(ids: &[u32]) -> String {
    if ids.is_empty() {
        return "-".into();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
