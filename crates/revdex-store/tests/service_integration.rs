//! End-to-end tests wiring the services to the real in-memory store.
//!
//! Each case builds a fresh store (seeded or empty), runs the workflow, and
//! checks the observable state afterwards.

use chrono::NaiveDate;

use revdex_core::prelude::*;
use revdex_store::MemoryStore;

fn services(store: &MemoryStore) -> (PokemonService, CatalogService) {
    let pokemons = PokemonService::new(
        Box::new(store.clone()),
        Box::new(store.clone()),
        Box::new(store.clone()),
        Box::new(store.clone()),
    );
    let catalog = CatalogService::new(
        Box::new(store.clone()),
        Box::new(store.clone()),
        Box::new(store.clone()),
    );
    (pokemons, catalog)
}

fn request(name: &str) -> CreatePokemon {
    CreatePokemon {
        name: name.into(),
        birth_date: NaiveDate::from_ymd_opt(1996, 2, 27).unwrap(),
        category_id: 1,
        owner_id: 1,
        type_id: 1,
        reviews: Vec::new(),
    }
}

#[test]
fn valid_creation_is_visible_by_id_and_name() {
    let store = MemoryStore::with_seed();
    let (service, _) = services(&store);

    let created = service.create(Some(request("Bulbasaur"))).unwrap();
    assert_eq!(created.name, "Bulbasaur");

    let by_id = service.get(created.id).unwrap();
    let by_name = service.get_by_name("Bulbasaur").unwrap();
    assert_eq!(by_id, by_name);
    assert_eq!(by_id.category_ids, vec![1]);
    assert_eq!(by_id.owner_ids, vec![1]);
    assert_eq!(by_id.type_ids, vec![1]);
}

#[test]
fn seeded_pikachu_makes_pikachu_a_duplicate() {
    let store = MemoryStore::with_seed();
    let (service, _) = services(&store);

    let err = service.create(Some(request("Pikachu"))).unwrap_err();
    assert_eq!(err, Rejection::Duplicate);
    assert_eq!(err.to_string(), "This pokemon already exists.");
}

#[test]
fn duplicate_name_leaves_store_unchanged() {
    let store = MemoryStore::with_seed();
    let (service, _) = services(&store);

    let before = service.list().unwrap().len();
    assert_eq!(
        service.create(Some(request("Pikachu"))).unwrap_err(),
        Rejection::Duplicate
    );
    assert_eq!(service.list().unwrap().len(), before);
}

#[test]
fn dangling_references_reject_in_order() {
    let store = MemoryStore::with_seed();
    let (service, _) = services(&store);

    let mut req = request("Bulbasaur");
    req.category_id = 99;
    req.owner_id = 99;
    req.type_id = 99;
    // All three are dangling; the category check fires first.
    assert_eq!(
        service.create(Some(req)).unwrap_err(),
        Rejection::MissingReference(Reference::Category)
    );

    let mut req = request("Bulbasaur");
    req.owner_id = 99;
    req.type_id = 99;
    assert_eq!(
        service.create(Some(req)).unwrap_err(),
        Rejection::MissingReference(Reference::Owner)
    );

    let mut req = request("Bulbasaur");
    req.type_id = 99;
    assert_eq!(
        service.create(Some(req)).unwrap_err(),
        Rejection::MissingReference(Reference::Type)
    );

    // Nothing was created along the way.
    assert_eq!(service.get_by_name("Bulbasaur").unwrap_err(), Rejection::NotFound);
}

#[test]
fn attached_reviews_ride_along_with_creation() {
    let store = MemoryStore::with_seed();
    let (service, _) = services(&store);

    let mut req = request("Bulbasaur");
    req.reviews.push(ReviewDraft {
        title: "Solid starter".into(),
        text: "Vine whip carries the early game".into(),
        rating: 4,
    });

    let created = service.create(Some(req)).unwrap();
    let stored = service.get(created.id).unwrap();
    assert_eq!(stored.reviews.len(), 1);
    assert_eq!(stored.reviews[0].rating, 4);
}

#[test]
fn catalog_lookups_resolve_seeded_rows() {
    let store = MemoryStore::with_seed();
    let (_, catalog) = services(&store);

    assert_eq!(catalog.get_category(1).unwrap().name, "Mouse");
    assert_eq!(catalog.get_category_by_name("Flame").unwrap().id, 2);
    assert_eq!(catalog.get_owner(1).unwrap().name, "Ash Ketchum");
    assert_eq!(catalog.get_type_by_name("Electric").unwrap().id, 1);
    assert_eq!(catalog.get_type(99).unwrap_err(), Rejection::NotFound);
    assert_eq!(catalog.list_owners().unwrap().len(), 2);
}
