//! Catalog Service - read paths for the reference entities.
//!
//! Categories, owners, and element types are plain lookups with no ordering
//! or concurrency complexity; the service only translates store answers into
//! the shared rejection taxonomy.

use crate::{
    application::{
        error::Rejection,
        ports::{CategoryRepository, OwnerRepository, TypeRepository},
    },
    domain::{Category, ElementType, Owner},
};

/// Lookup service over the reference entities a pokemon links against.
pub struct CatalogService {
    categories: Box<dyn CategoryRepository>,
    owners: Box<dyn OwnerRepository>,
    types: Box<dyn TypeRepository>,
}

impl CatalogService {
    pub fn new(
        categories: Box<dyn CategoryRepository>,
        owners: Box<dyn OwnerRepository>,
        types: Box<dyn TypeRepository>,
    ) -> Self {
        Self {
            categories,
            owners,
            types,
        }
    }

    // ── categories ────────────────────────────────────────────────────────

    pub fn list_categories(&self) -> Result<Vec<Category>, Rejection> {
        Ok(self.categories.list()?)
    }

    pub fn get_category(&self, id: u32) -> Result<Category, Rejection> {
        if !self.categories.exists(id)? {
            return Err(Rejection::NotFound);
        }
        self.categories.get(id)?.ok_or(Rejection::NotFound)
    }

    pub fn get_category_by_name(&self, name: &str) -> Result<Category, Rejection> {
        require_name(name)?;
        if !self.categories.exists_by_name(name)? {
            return Err(Rejection::NotFound);
        }
        self.categories.get_by_name(name)?.ok_or(Rejection::NotFound)
    }

    // ── owners ────────────────────────────────────────────────────────────

    pub fn list_owners(&self) -> Result<Vec<Owner>, Rejection> {
        Ok(self.owners.list()?)
    }

    pub fn get_owner(&self, id: u32) -> Result<Owner, Rejection> {
        if !self.owners.exists(id)? {
            return Err(Rejection::NotFound);
        }
        self.owners.get(id)?.ok_or(Rejection::NotFound)
    }

    pub fn get_owner_by_name(&self, name: &str) -> Result<Owner, Rejection> {
        require_name(name)?;
        if !self.owners.exists_by_name(name)? {
            return Err(Rejection::NotFound);
        }
        self.owners.get_by_name(name)?.ok_or(Rejection::NotFound)
    }

    // ── element types ─────────────────────────────────────────────────────

    pub fn list_types(&self) -> Result<Vec<ElementType>, Rejection> {
        Ok(self.types.list()?)
    }

    pub fn get_type(&self, id: u32) -> Result<ElementType, Rejection> {
        if !self.types.exists(id)? {
            return Err(Rejection::NotFound);
        }
        self.types.get(id)?.ok_or(Rejection::NotFound)
    }

    pub fn get_type_by_name(&self, name: &str) -> Result<ElementType, Rejection> {
        require_name(name)?;
        if !self.types.exists_by_name(name)? {
            return Err(Rejection::NotFound);
        }
        self.types.get_by_name(name)?.ok_or(Rejection::NotFound)
    }
}

fn require_name(name: &str) -> Result<(), Rejection> {
    if name.trim().is_empty() {
        return Err(Rejection::InvalidRequest("name must not be blank".into()));
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
