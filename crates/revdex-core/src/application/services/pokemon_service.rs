//! Pokemon Service - main application orchestrator.
//!
//! This service runs the validated creation workflow:
//! 1. Structural validation of the request payload
//! 2. Duplicate-name check
//! 3. Category, owner, and type existence checks, in that order
//! 4. Delegation to the repository's atomic create
//!
//! Every check short-circuits: the first violated precondition becomes the
//! terminal [`Rejection`] and nothing later in the chain runs. The order of
//! checks 2-4 is part of the public contract - when several preconditions are
//! violated at once, callers see the earliest message.

use tracing::{info, instrument, warn};

use crate::{
    application::{
        error::{Reference, Rejection},
        ports::{CategoryRepository, OwnerRepository, PokemonRepository, TypeRepository},
    },
    domain::{DomainValidator, Pokemon, PokemonDraft, ReviewDraft},
};

use chrono::NaiveDate;

/// Creation request as a transport layer hands it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePokemon {
    pub name: String,
    pub birth_date: NaiveDate,
    pub category_id: u32,
    pub owner_id: u32,
    pub type_id: u32,
    /// Reviews to attach at creation time (may be empty).
    pub reviews: Vec<ReviewDraft>,
}

/// Reference to a successfully created pokemon.
///
/// Intended for a "created" response pointing callers at the get-by-id
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPokemon {
    pub id: u32,
    pub name: String,
}

/// Main pokemon service.
///
/// Orchestrates the creation workflow and the read paths over the injected
/// repository adapters.
pub struct PokemonService {
    pokemons: Box<dyn PokemonRepository>,
    categories: Box<dyn CategoryRepository>,
    owners: Box<dyn OwnerRepository>,
    types: Box<dyn TypeRepository>,
}

impl PokemonService {
    /// Create a new pokemon service with the given adapters.
    pub fn new(
        pokemons: Box<dyn PokemonRepository>,
        categories: Box<dyn CategoryRepository>,
        owners: Box<dyn OwnerRepository>,
        types: Box<dyn TypeRepository>,
    ) -> Self {
        Self {
            pokemons,
            categories,
            owners,
            types,
        }
    }

    /// Create a pokemon after the full precondition chain passes.
    ///
    /// `request` may be absent - transport layers forward missing bodies
    /// as `None` and get `InvalidRequest` back.
    #[instrument(skip_all, fields(name = request.as_ref().map(|r| r.name.as_str()).unwrap_or("<missing>")))]
    pub fn create(&self, request: Option<CreatePokemon>) -> Result<CreatedPokemon, Rejection> {
        // 1. Request present and structurally valid
        let CreatePokemon {
            name,
            birth_date,
            category_id,
            owner_id,
            type_id,
            reviews,
        } = request.ok_or_else(|| Rejection::InvalidRequest("request body is missing".into()))?;

        let draft = PokemonDraft {
            name,
            birth_date,
            reviews,
        };
        DomainValidator::validate_draft(&draft)
            .map_err(|e| Rejection::InvalidRequest(e.to_string()))?;

        // 2. No pokemon with the same name (case-sensitive exact match)
        if self.pokemons.exists_by_name(&draft.name)? {
            warn!(name = %draft.name, "Creation rejected: duplicate name");
            return Err(Rejection::Duplicate);
        }

        // 3-5. Referenced rows must exist, checked strictly in this order.
        // The checks are logically independent but the first failing one
        // fixes which message the caller sees - do not reorder.
        if !self.categories.exists(category_id)? {
            return Err(Rejection::MissingReference(Reference::Category));
        }
        if !self.owners.exists(owner_id)? {
            return Err(Rejection::MissingReference(Reference::Owner));
        }
        if !self.types.exists(type_id)? {
            return Err(Rejection::MissingReference(Reference::Type));
        }

        // 6. Delegate to the store; `false` means nothing was committed.
        let name = draft.name.clone();
        if !self.pokemons.create(draft, category_id, owner_id, type_id)? {
            warn!(name = %name, "Store reported failed commit");
            return Err(Rejection::Persistence);
        }

        // The facade reports commit as a bool, so the new identity comes from
        // a follow-up name lookup. Absence here means the commit lied.
        let created = self
            .pokemons
            .get_by_name(&name)?
            .ok_or(Rejection::Persistence)?;

        info!(id = created.id, name = %created.name, "Pokemon created");
        Ok(CreatedPokemon {
            id: created.id,
            name: created.name,
        })
    }

    /// Fetch a pokemon by id.
    pub fn get(&self, id: u32) -> Result<Pokemon, Rejection> {
        if !self.pokemons.exists(id)? {
            return Err(Rejection::NotFound);
        }
        self.pokemons.get(id)?.ok_or(Rejection::NotFound)
    }

    /// Fetch a pokemon by exact name.
    pub fn get_by_name(&self, name: &str) -> Result<Pokemon, Rejection> {
        if name.trim().is_empty() {
            return Err(Rejection::InvalidRequest("name must not be blank".into()));
        }
        if !self.pokemons.exists_by_name(name)? {
            return Err(Rejection::NotFound);
        }
        self.pokemons.get_by_name(name)?.ok_or(Rejection::NotFound)
    }

    /// List every pokemon in the store.
    pub fn list(&self) -> Result<Vec<Pokemon>, Rejection> {
        Ok(self.pokemons.list()?)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        error::StoreError,
        ports::{
            MockCategoryRepository, MockOwnerRepository, MockPokemonRepository,
            MockTypeRepository,
        },
    };
    use mockall::Sequence;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1903, 1, 1).unwrap()
    }

    fn request() -> CreatePokemon {
        CreatePokemon {
            name: "Pikachu".into(),
            birth_date: birth_date(),
            category_id: 1,
            owner_id: 1,
            type_id: 1,
            reviews: Vec::new(),
        }
    }

    fn stored(id: u32, name: &str) -> Pokemon {
        Pokemon::new(
            id,
            PokemonDraft {
                name: name.into(),
                birth_date: birth_date(),
                reviews: Vec::new(),
            },
        )
    }

    fn service(
        pokemons: MockPokemonRepository,
        categories: MockCategoryRepository,
        owners: MockOwnerRepository,
        types: MockTypeRepository,
    ) -> PokemonService {
        PokemonService::new(
            Box::new(pokemons),
            Box::new(categories),
            Box::new(owners),
            Box::new(types),
        )
    }

    // ── create: success ───────────────────────────────────────────────────

    #[test]
    fn create_returns_created_reference() {
        let mut pokemons = MockPokemonRepository::new();
        let mut categories = MockCategoryRepository::new();
        let mut owners = MockOwnerRepository::new();
        let mut types = MockTypeRepository::new();

        pokemons
            .expect_exists_by_name()
            .withf(|name| name == "Pikachu")
            .returning(|_| Ok(false));
        categories.expect_exists().returning(|_| Ok(true));
        owners.expect_exists().returning(|_| Ok(true));
        types.expect_exists().returning(|_| Ok(true));
        pokemons
            .expect_create()
            .withf(|draft, category_id, owner_id, type_id| {
                draft.name == "Pikachu" && (*category_id, *owner_id, *type_id) == (1, 1, 1)
            })
            .returning(|_, _, _, _| Ok(true));
        pokemons
            .expect_get_by_name()
            .withf(|name| name == "Pikachu")
            .returning(|name| Ok(Some(stored(42, name))));

        let created = service(pokemons, categories, owners, types)
            .create(Some(request()))
            .unwrap();

        assert_eq!(
            created,
            CreatedPokemon {
                id: 42,
                name: "Pikachu".into()
            }
        );
    }

    #[test]
    fn create_runs_checks_in_fixed_order() {
        let mut seq = Sequence::new();
        let mut pokemons = MockPokemonRepository::new();
        let mut categories = MockCategoryRepository::new();
        let mut owners = MockOwnerRepository::new();
        let mut types = MockTypeRepository::new();

        pokemons
            .expect_exists_by_name()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));
        categories
            .expect_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        owners
            .expect_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        types
            .expect_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        pokemons
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(true));
        pokemons
            .expect_get_by_name()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|name| Ok(Some(stored(1, name))));

        service(pokemons, categories, owners, types)
            .create(Some(request()))
            .unwrap();
    }

    // ── create: invalid request ───────────────────────────────────────────

    #[test]
    fn create_missing_request_is_invalid() {
        // No expectations: touching any repository would panic the mock.
        let svc = service(
            MockPokemonRepository::new(),
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        let err = svc.create(None).unwrap_err();
        assert!(matches!(err, Rejection::InvalidRequest(_)));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn create_blank_name_is_invalid() {
        let svc = service(
            MockPokemonRepository::new(),
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        let mut req = request();
        req.name = "   ".into();
        let err = svc.create(Some(req)).unwrap_err();
        assert!(matches!(err, Rejection::InvalidRequest(_)));
    }

    #[test]
    fn create_bad_review_rating_is_invalid() {
        let svc = service(
            MockPokemonRepository::new(),
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        let mut req = request();
        req.reviews.push(ReviewDraft {
            title: "Pikachu".into(),
            text: "off the charts".into(),
            rating: 11,
        });
        let err = svc.create(Some(req)).unwrap_err();
        assert!(matches!(err, Rejection::InvalidRequest(_)));
    }

    // ── create: duplicate ─────────────────────────────────────────────────

    #[test]
    fn create_duplicate_name_short_circuits() {
        let mut pokemons = MockPokemonRepository::new();
        let mut categories = MockCategoryRepository::new();
        let mut owners = MockOwnerRepository::new();
        let mut types = MockTypeRepository::new();

        pokemons.expect_exists_by_name().returning(|_| Ok(true));
        // No reference check may run after the duplicate fires.
        categories.expect_exists().times(0);
        owners.expect_exists().times(0);
        types.expect_exists().times(0);
        pokemons.expect_create().times(0);

        let err = service(pokemons, categories, owners, types)
            .create(Some(request()))
            .unwrap_err();

        assert_eq!(err, Rejection::Duplicate);
        assert_eq!(err.to_string(), "This pokemon already exists.");
        assert_eq!(err.status(), 422);
    }

    // ── create: dangling references ───────────────────────────────────────

    #[test]
    fn create_missing_category_fires_before_other_references() {
        let mut pokemons = MockPokemonRepository::new();
        let mut categories = MockCategoryRepository::new();
        let mut owners = MockOwnerRepository::new();
        let mut types = MockTypeRepository::new();

        pokemons.expect_exists_by_name().returning(|_| Ok(false));
        categories.expect_exists().returning(|_| Ok(false));
        // Even if owner/type ids were also dangling, the category message wins.
        owners.expect_exists().times(0);
        types.expect_exists().times(0);
        pokemons.expect_create().times(0);

        let err = service(pokemons, categories, owners, types)
            .create(Some(request()))
            .unwrap_err();

        assert_eq!(err, Rejection::MissingReference(Reference::Category));
        assert_eq!(
            err.to_string(),
            "This category doesn't exist, please check the id and try again."
        );
    }

    #[test]
    fn create_missing_owner() {
        let mut pokemons = MockPokemonRepository::new();
        let mut categories = MockCategoryRepository::new();
        let mut owners = MockOwnerRepository::new();
        let mut types = MockTypeRepository::new();

        pokemons.expect_exists_by_name().returning(|_| Ok(false));
        categories.expect_exists().returning(|_| Ok(true));
        owners.expect_exists().returning(|_| Ok(false));
        types.expect_exists().times(0);
        pokemons.expect_create().times(0);

        let err = service(pokemons, categories, owners, types)
            .create(Some(request()))
            .unwrap_err();

        assert_eq!(err, Rejection::MissingReference(Reference::Owner));
        assert_eq!(
            err.to_string(),
            "This owner doesn't exist, please check the id and try again."
        );
    }

    #[test]
    fn create_missing_type() {
        let mut pokemons = MockPokemonRepository::new();
        let mut categories = MockCategoryRepository::new();
        let mut owners = MockOwnerRepository::new();
        let mut types = MockTypeRepository::new();

        pokemons.expect_exists_by_name().returning(|_| Ok(false));
        categories.expect_exists().returning(|_| Ok(true));
        owners.expect_exists().returning(|_| Ok(true));
        types.expect_exists().returning(|_| Ok(false));
        pokemons.expect_create().times(0);

        let err = service(pokemons, categories, owners, types)
            .create(Some(request()))
            .unwrap_err();

        assert_eq!(err, Rejection::MissingReference(Reference::Type));
        assert_eq!(
            err.to_string(),
            "This type doesn't exist, please check the id and try again."
        );
    }

    // ── create: store failures ────────────────────────────────────────────

    #[test]
    fn create_failed_commit_is_persistence_failure() {
        let mut pokemons = MockPokemonRepository::new();
        let mut categories = MockCategoryRepository::new();
        let mut owners = MockOwnerRepository::new();
        let mut types = MockTypeRepository::new();

        pokemons.expect_exists_by_name().returning(|_| Ok(false));
        categories.expect_exists().returning(|_| Ok(true));
        owners.expect_exists().returning(|_| Ok(true));
        types.expect_exists().returning(|_| Ok(true));
        pokemons.expect_create().returning(|_, _, _, _| Ok(false));
        // A false commit means nothing was written - no lookup follows.
        pokemons.expect_get_by_name().times(0);

        let err = service(pokemons, categories, owners, types)
            .create(Some(request()))
            .unwrap_err();

        assert_eq!(err, Rejection::Persistence);
        assert_eq!(err.to_string(), "Something went wrong saving this pokemon.");
        assert_eq!(err.status(), 500);
    }

    #[test]
    fn create_store_error_is_persistence_failure() {
        let mut pokemons = MockPokemonRepository::new();
        let categories = MockCategoryRepository::new();
        let owners = MockOwnerRepository::new();
        let types = MockTypeRepository::new();

        pokemons
            .expect_exists_by_name()
            .returning(|_| Err(StoreError::LockPoisoned));

        let err = service(pokemons, categories, owners, types)
            .create(Some(request()))
            .unwrap_err();

        assert_eq!(err, Rejection::Persistence);
    }

    // ── read paths ────────────────────────────────────────────────────────

    #[test]
    fn get_missing_id_is_not_found() {
        let mut pokemons = MockPokemonRepository::new();
        pokemons.expect_exists().returning(|_| Ok(false));
        pokemons.expect_get().times(0);

        let svc = service(
            pokemons,
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        let err = svc.get(1).unwrap_err();
        assert_eq!(err, Rejection::NotFound);
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn get_returns_pokemon() {
        let mut pokemons = MockPokemonRepository::new();
        pokemons.expect_exists().returning(|_| Ok(true));
        pokemons.expect_get().returning(|id| Ok(Some(stored(id, "Pikachu"))));

        let svc = service(
            pokemons,
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        let pokemon = svc.get(1).unwrap();
        assert_eq!(pokemon.id, 1);
        assert_eq!(pokemon.name, "Pikachu");
    }

    #[test]
    fn get_by_name_blank_is_invalid() {
        let svc = service(
            MockPokemonRepository::new(),
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        assert!(matches!(
            svc.get_by_name("  ").unwrap_err(),
            Rejection::InvalidRequest(_)
        ));
    }

    #[test]
    fn get_by_name_missing_is_not_found() {
        let mut pokemons = MockPokemonRepository::new();
        pokemons.expect_exists_by_name().returning(|_| Ok(false));

        let svc = service(
            pokemons,
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        assert_eq!(svc.get_by_name("Missingno").unwrap_err(), Rejection::NotFound);
    }

    #[test]
    fn get_by_name_is_case_sensitive_passthrough() {
        let mut pokemons = MockPokemonRepository::new();
        pokemons
            .expect_exists_by_name()
            .withf(|name| name == "pikachu")
            .returning(|_| Ok(false));

        let svc = service(
            pokemons,
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        // The service forwards the name untouched; matching is the store's
        // concern and is exact.
        assert_eq!(svc.get_by_name("pikachu").unwrap_err(), Rejection::NotFound);
    }

    #[test]
    fn list_returns_all() {
        let mut pokemons = MockPokemonRepository::new();
        pokemons
            .expect_list()
            .returning(|| Ok(vec![stored(1, "Pikachu"), stored(2, "Raichu")]));

        let svc = service(
            pokemons,
            MockCategoryRepository::new(),
            MockOwnerRepository::new(),
            MockTypeRepository::new(),
        );

        let all = svc.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].name, "Raichu");
    }
}
