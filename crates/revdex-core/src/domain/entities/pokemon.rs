//! Pokemon aggregate and its join records.
//!
//! A `Pokemon` is linked to categories, types, and owners through explicit
//! join records (many-to-many), and owns zero or more reviews. The read model
//! returned by the store carries the resolved link ids so callers never need
//! to walk the join tables themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::review::{Review, ReviewDraft};

/// A stored pokemon with its resolved associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    /// Unique across the store; matched case-sensitively.
    pub name: String,
    pub birth_date: NaiveDate,
    pub category_ids: Vec<u32>,
    pub type_ids: Vec<u32>,
    pub owner_ids: Vec<u32>,
    pub reviews: Vec<Review>,
}

impl Pokemon {
    /// Build a freshly-created pokemon from a draft. Links and reviews are
    /// attached by the store after the row exists.
    pub fn new(id: u32, draft: PokemonDraft) -> Self {
        Self {
            id,
            name: draft.name,
            birth_date: draft.birth_date,
            category_ids: Vec::new(),
            type_ids: Vec::new(),
            owner_ids: Vec::new(),
            reviews: Vec::new(),
        }
    }
}

/// Creation payload for a pokemon, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDraft {
    pub name: String,
    pub birth_date: NaiveDate,
    /// Reviews submitted alongside the creation request (may be empty).
    pub reviews: Vec<ReviewDraft>,
}

/// Join record: pokemon ↔ category (many-to-many).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCategory {
    pub pokemon_id: u32,
    pub category_id: u32,
}

/// Join record: pokemon ↔ element type (many-to-many).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub pokemon_id: u32,
    pub type_id: u32,
}

/// Join record: pokemon ↔ owner (many-to-many).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonOwner {
    pub pokemon_id: u32,
    pub owner_id: u32,
}
