//! Reference entities a pokemon links against.
//!
//! Categories, owners, and element types are independent rows identified by
//! id, each with a unique name used for secondary lookup.

use serde::{Deserialize, Serialize};

/// A pokemon category, e.g. "Mouse".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// An element type, e.g. "Electric".
///
/// Named `ElementType` because `Type` is too generic to survive a `use` at
/// most call-sites; the join record keeps the domain name [`super::pokemon::PokemonType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementType {
    pub id: u32,
    pub name: String,
}

/// A pokemon owner (trainer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: u32,
    /// Display name, unique across owners.
    pub name: String,
    pub gym: String,
}
