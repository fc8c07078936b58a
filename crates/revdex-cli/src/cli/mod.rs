//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "revdex",
    bin_name = "revdex",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Pokemon review backend - validated creation and lookups",
    long_about = "Revdex stores pokemons, their categories, types, owners, and \
                  reviews, and guards creation behind an ordered chain of \
                  existence checks.",
    after_help = "EXAMPLES:\n\
        \x20 revdex create Bulbasaur --birth-date 1996-02-27 --category-id 1 --owner-id 1 --type-id 1\n\
        \x20 revdex get Pikachu\n\
        \x20 revdex list --kind categories\n\
        \x20 revdex completions bash > /usr/share/bash-completion/completions/revdex",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new pokemon after the full validation chain passes.
    #[command(
        visible_alias = "c",
        about = "Create a new pokemon",
        after_help = "EXAMPLES:\n\
            \x20 revdex create Bulbasaur --birth-date 1996-02-27 --category-id 1 --owner-id 1 --type-id 1\n\
            \x20 revdex --data pokedex.json create Eevee --birth-date 1996-02-27 --category-id 2 --owner-id 2 --type-id 2"
    )]
    Create(CreateArgs),

    /// Look up a single entity by id or name.
    #[command(
        visible_alias = "g",
        about = "Get an entity by id or name",
        after_help = "EXAMPLES:\n\
            \x20 revdex get 1\n\
            \x20 revdex get Pikachu\n\
            \x20 revdex get Mouse --kind category"
    )]
    Get(GetArgs),

    /// List stored entities.
    #[command(
        visible_alias = "ls",
        about = "List entities",
        after_help = "EXAMPLES:\n\
            \x20 revdex list\n\
            \x20 revdex list --kind owners\n\
            \x20 revdex --output-format json list --kind types"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 revdex completions bash > ~/.local/share/bash-completion/completions/revdex\n\
            \x20 revdex completions zsh  > ~/.zfunc/_revdex\n\
            \x20 revdex completions fish > ~/.config/fish/completions/revdex.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `revdex create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Pokemon name; unique, matched case-sensitively.
    #[arg(value_name = "NAME", help = "Pokemon name")]
    pub name: String,

    /// Birth date in ISO format.
    #[arg(
        long = "birth-date",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date,
        help = "Birth date (ISO format)"
    )]
    pub birth_date: NaiveDate,

    /// Id of an existing category.
    #[arg(long = "category-id", value_name = "ID", help = "Category id")]
    pub category_id: u32,

    /// Id of an existing owner.
    #[arg(long = "owner-id", value_name = "ID", help = "Owner id")]
    pub owner_id: u32,

    /// Id of an existing element type.
    #[arg(long = "type-id", value_name = "ID", help = "Element type id")]
    pub type_id: u32,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{raw}': {e}"))
}

// ── get ───────────────────────────────────────────────────────────────────────

/// Arguments for `revdex get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Numeric input looks up by id, anything else by exact name.
    #[arg(value_name = "ID_OR_NAME", help = "Entity id or exact name")]
    pub selector: String,

    /// Which entity family to look in.
    #[arg(
        long = "kind",
        value_enum,
        default_value = "pokemon",
        help = "Entity kind"
    )]
    pub kind: EntityKind,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `revdex list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which entity family to list.
    #[arg(
        long = "kind",
        value_enum,
        default_value = "pokemons",
        help = "Entity kind"
    )]
    pub kind: EntityKindPlural,
}

/// Entity family selector for `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Pokemon,
    Category,
    Owner,
    Type,
}

/// Entity family selector for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKindPlural {
    Pokemons,
    Categories,
    Owners,
    Types,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `revdex completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL", help = "Target shell")]
    pub shell: clap_complete::Shell,
}
