//! Seed fixtures.
//!
//! A small, fixed data set so a fresh store is immediately usable: the
//! classic Pikachu row with its category, type, owner, and three reviews.

use chrono::NaiveDate;

use revdex_core::domain::PokemonDraft;

use crate::tables::Tables;

pub(crate) fn seeded_tables() -> Tables {
    let mut tables = Tables::default();

    let mouse = tables.add_category("Mouse");
    tables.add_category("Flame");

    let electric = tables.add_type("Electric");
    tables.add_type("Fire");

    let ash = tables.add_owner("Ash Ketchum", "Pallet Town Gym");
    tables.add_owner("Brock Harrison", "Pewter City Gym");

    let pikachu = tables.insert_pokemon(
        PokemonDraft {
            name: "Pikachu".into(),
            birth_date: NaiveDate::from_ymd_opt(1903, 1, 1).expect("fixed fixture date"),
            reviews: Vec::new(),
        },
        mouse,
        ash,
        electric,
    );

    let teddy = tables.add_reviewer("Teddy", "Smith");
    let taylor = tables.add_reviewer("Taylor", "Jones");
    let jessica = tables.add_reviewer("Jessica", "McGregor");

    tables.add_review(
        pikachu,
        teddy,
        "Pikachu",
        "Pikachu is the best pokemon, because it is electric",
        5,
    );
    tables.add_review(pikachu, taylor, "Pikachu", "Pikachu is the best at killing rocks", 5);
    tables.add_review(pikachu, jessica, "Pikachu", "Pikachu, pikachu, pikachu", 1);

    tables
}
