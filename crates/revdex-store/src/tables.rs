//! The relational model shared by every store adapter.
//!
//! `Tables` holds plain rows plus explicit join records, mirroring the
//! conceptual schema: pokemons link to categories, types, and owners through
//! many-to-many join rows, and own their reviews. Adapters wrap a `Tables`
//! in whatever locking/persistence they need; nothing in here blocks or
//! does I/O.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use revdex_core::domain::{
    Category, ElementType, Owner, Pokemon, PokemonCategory, PokemonDraft, PokemonOwner,
    PokemonType, Review, Reviewer,
};

/// A pokemon row without its associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PokemonRow {
    pub id: u32,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// All rows of the store. `BTreeMap` keeps listings in id order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Tables {
    pokemons: BTreeMap<u32, PokemonRow>,
    categories: BTreeMap<u32, Category>,
    owners: BTreeMap<u32, Owner>,
    types: BTreeMap<u32, ElementType>,
    reviewers: BTreeMap<u32, Reviewer>,
    reviews: BTreeMap<u32, Review>,
    pokemon_categories: Vec<PokemonCategory>,
    pokemon_types: Vec<PokemonType>,
    pokemon_owners: Vec<PokemonOwner>,
}

/// Ids are dense and never reused; there are no delete operations.
fn next_id<T>(map: &BTreeMap<u32, T>) -> u32 {
    map.keys().next_back().map_or(1, |last| last + 1)
}

impl Tables {
    // ── pokemons ──────────────────────────────────────────────────────────

    pub fn pokemon_exists(&self, id: u32) -> bool {
        self.pokemons.contains_key(&id)
    }

    /// Case-sensitive exact match.
    pub fn pokemon_exists_by_name(&self, name: &str) -> bool {
        self.pokemons.values().any(|row| row.name == name)
    }

    pub fn pokemon(&self, id: u32) -> Option<Pokemon> {
        self.pokemons.get(&id).map(|row| self.assemble(row))
    }

    pub fn pokemon_by_name(&self, name: &str) -> Option<Pokemon> {
        self.pokemons
            .values()
            .find(|row| row.name == name)
            .map(|row| self.assemble(row))
    }

    pub fn pokemons(&self) -> Vec<Pokemon> {
        self.pokemons.values().map(|row| self.assemble(row)).collect()
    }

    /// Insert a pokemon row plus its join rows and attached reviews.
    ///
    /// Returns the new id. The caller guarantees the referenced rows exist;
    /// the tables do not re-check foreign keys.
    pub fn insert_pokemon(
        &mut self,
        draft: PokemonDraft,
        category_id: u32,
        owner_id: u32,
        type_id: u32,
    ) -> u32 {
        let id = next_id(&self.pokemons);
        self.pokemons.insert(
            id,
            PokemonRow {
                id,
                name: draft.name,
                birth_date: draft.birth_date,
            },
        );
        self.pokemon_categories.push(PokemonCategory {
            pokemon_id: id,
            category_id,
        });
        self.pokemon_types.push(PokemonType {
            pokemon_id: id,
            type_id,
        });
        self.pokemon_owners.push(PokemonOwner {
            pokemon_id: id,
            owner_id,
        });
        for review in draft.reviews {
            let review_id = next_id(&self.reviews);
            self.reviews.insert(
                review_id,
                Review {
                    id: review_id,
                    title: review.title,
                    text: review.text,
                    rating: review.rating,
                    pokemon_id: id,
                    reviewer_id: None,
                },
            );
        }
        id
    }

    /// Undo an `insert_pokemon`. Used by adapters that must roll back the
    /// in-memory rows when persisting them fails.
    pub fn remove_pokemon(&mut self, id: u32) {
        self.pokemons.remove(&id);
        self.pokemon_categories.retain(|link| link.pokemon_id != id);
        self.pokemon_types.retain(|link| link.pokemon_id != id);
        self.pokemon_owners.retain(|link| link.pokemon_id != id);
        self.reviews.retain(|_, review| review.pokemon_id != id);
    }

    fn assemble(&self, row: &PokemonRow) -> Pokemon {
        Pokemon {
            id: row.id,
            name: row.name.clone(),
            birth_date: row.birth_date,
            category_ids: self
                .pokemon_categories
                .iter()
                .filter(|link| link.pokemon_id == row.id)
                .map(|link| link.category_id)
                .collect(),
            type_ids: self
                .pokemon_types
                .iter()
                .filter(|link| link.pokemon_id == row.id)
                .map(|link| link.type_id)
                .collect(),
            owner_ids: self
                .pokemon_owners
                .iter()
                .filter(|link| link.pokemon_id == row.id)
                .map(|link| link.owner_id)
                .collect(),
            reviews: self
                .reviews
                .values()
                .filter(|review| review.pokemon_id == row.id)
                .cloned()
                .collect(),
        }
    }

    // ── categories ────────────────────────────────────────────────────────

    pub fn category_exists(&self, id: u32) -> bool {
        self.categories.contains_key(&id)
    }

    pub fn category_exists_by_name(&self, name: &str) -> bool {
        self.categories.values().any(|c| c.name == name)
    }

    pub fn category(&self, id: u32) -> Option<Category> {
        self.categories.get(&id).cloned()
    }

    pub fn category_by_name(&self, name: &str) -> Option<Category> {
        self.categories.values().find(|c| c.name == name).cloned()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    pub fn add_category(&mut self, name: &str) -> u32 {
        let id = next_id(&self.categories);
        self.categories.insert(
            id,
            Category {
                id,
                name: name.to_string(),
            },
        );
        id
    }

    // ── owners ────────────────────────────────────────────────────────────

    pub fn owner_exists(&self, id: u32) -> bool {
        self.owners.contains_key(&id)
    }

    pub fn owner_exists_by_name(&self, name: &str) -> bool {
        self.owners.values().any(|o| o.name == name)
    }

    pub fn owner(&self, id: u32) -> Option<Owner> {
        self.owners.get(&id).cloned()
    }

    pub fn owner_by_name(&self, name: &str) -> Option<Owner> {
        self.owners.values().find(|o| o.name == name).cloned()
    }

    pub fn owners(&self) -> Vec<Owner> {
        self.owners.values().cloned().collect()
    }

    pub fn add_owner(&mut self, name: &str, gym: &str) -> u32 {
        let id = next_id(&self.owners);
        self.owners.insert(
            id,
            Owner {
                id,
                name: name.to_string(),
                gym: gym.to_string(),
            },
        );
        id
    }

    // ── element types ─────────────────────────────────────────────────────

    pub fn type_exists(&self, id: u32) -> bool {
        self.types.contains_key(&id)
    }

    pub fn type_exists_by_name(&self, name: &str) -> bool {
        self.types.values().any(|t| t.name == name)
    }

    pub fn element_type(&self, id: u32) -> Option<ElementType> {
        self.types.get(&id).cloned()
    }

    pub fn element_type_by_name(&self, name: &str) -> Option<ElementType> {
        self.types.values().find(|t| t.name == name).cloned()
    }

    pub fn element_types(&self) -> Vec<ElementType> {
        self.types.values().cloned().collect()
    }

    pub fn add_type(&mut self, name: &str) -> u32 {
        let id = next_id(&self.types);
        self.types.insert(
            id,
            ElementType {
                id,
                name: name.to_string(),
            },
        );
        id
    }

    // ── reviewers / reviews (seed-time only) ──────────────────────────────

    pub fn add_reviewer(&mut self, first_name: &str, last_name: &str) -> u32 {
        let id = next_id(&self.reviewers);
        self.reviewers.insert(
            id,
            Reviewer {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
        );
        id
    }

    pub fn add_review(
        &mut self,
        pokemon_id: u32,
        reviewer_id: u32,
        title: &str,
        text: &str,
        rating: u8,
    ) -> u32 {
        let id = next_id(&self.reviews);
        self.reviews.insert(
            id,
            Review {
                id,
                title: title.to_string(),
                text: text.to_string(),
                rating,
                pokemon_id,
                reviewer_id: Some(reviewer_id),
            },
        );
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> PokemonDraft {
        PokemonDraft {
            name: name.into(),
            birth_date: NaiveDate::from_ymd_opt(1903, 1, 1).unwrap(),
            reviews: Vec::new(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut tables = Tables::default();
        assert_eq!(tables.add_category("Mouse"), 1);
        assert_eq!(tables.add_category("Flame"), 2);
    }

    #[test]
    fn insert_pokemon_writes_all_join_rows() {
        let mut tables = Tables::default();
        let category = tables.add_category("Mouse");
        let owner = tables.add_owner("Ash Ketchum", "Pallet Town Gym");
        let element = tables.add_type("Electric");

        let id = tables.insert_pokemon(draft("Pikachu"), category, owner, element);

        let pokemon = tables.pokemon(id).unwrap();
        assert_eq!(pokemon.category_ids, vec![category]);
        assert_eq!(pokemon.owner_ids, vec![owner]);
        assert_eq!(pokemon.type_ids, vec![element]);
    }

    #[test]
    fn remove_pokemon_leaves_no_trace() {
        let mut tables = Tables::default();
        let category = tables.add_category("Mouse");
        let owner = tables.add_owner("Ash Ketchum", "Pallet Town Gym");
        let element = tables.add_type("Electric");

        let mut d = draft("Pikachu");
        d.reviews.push(revdex_core::domain::ReviewDraft {
            title: "Pikachu".into(),
            text: "the best".into(),
            rating: 5,
        });
        let id = tables.insert_pokemon(d, category, owner, element);
        tables.remove_pokemon(id);

        assert!(!tables.pokemon_exists(id));
        assert!(!tables.pokemon_exists_by_name("Pikachu"));
        assert!(tables.pokemons().is_empty());
        // Join rows and reviews went with it.
        assert!(tables.pokemon_categories.is_empty());
        assert!(tables.pokemon_types.is_empty());
        assert!(tables.pokemon_owners.is_empty());
        assert!(tables.reviews.is_empty());
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let mut tables = Tables::default();
        let category = tables.add_category("Mouse");
        let owner = tables.add_owner("Ash Ketchum", "Pallet Town Gym");
        let element = tables.add_type("Electric");
        tables.insert_pokemon(draft("Pikachu"), category, owner, element);

        assert!(tables.pokemon_exists_by_name("Pikachu"));
        assert!(!tables.pokemon_exists_by_name("pikachu"));
        assert!(tables.pokemon_by_name("PIKACHU").is_none());
    }
}
