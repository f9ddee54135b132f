//! Catalog loading from external tables and the fallback chain.

use periodle_engine::{Catalog, CatalogConfig, CatalogSource, Hint, catalog};

use crate::common::{catalog_file, element_json};

#[test]
fn external_table_drops_superheavy_rows() {
    let file = catalog_file(&[
        element_json(7, "Nitrogen", "N", Some(15)),
        element_json(119, "Ununennium", "Uue", Some(1)),
        element_json(120, "Unbinilium", "Ubn", Some(2)),
    ]);

    let table = catalog::load_file(file.path()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.atomic_range().map(|(lo, hi)| (lo.value(), hi.value())), Some((7, 7)));
}

#[test]
fn duplicate_keys_resolve_to_first_in_order() {
    let file = catalog_file(&[
        element_json(7, "Nitrogen", "N", Some(15)),
        element_json(8, "Nitrogen", "Nx", Some(16)),
    ]);
    let table = catalog::load_file(file.path()).unwrap();
    assert_eq!(table.lookup("nitrogen").unwrap().atomic_number.value(), 7);
    assert_eq!(table.lookup("NX").unwrap().atomic_number.value(), 8);
}

#[test]
fn missing_econf_hints_unknown_orbital() {
    let mut row = element_json(7, "Nitrogen", "N", Some(15));
    row.as_object_mut().unwrap().remove("econf");
    let file = catalog_file(&[row]);
    let table = catalog::load_file(file.path()).unwrap();

    assert_eq!(table.list_all()[0].last_orbital(), None);
    assert_eq!(
        Hint::for_attempt(3, &table.list_all()[0]).to_string(),
        "Hint: Electron config ends in Unknown."
    );
}

#[test]
fn configured_path_beats_configured_source() {
    let file = catalog_file(&[element_json(7, "Nitrogen", "N", Some(15))]);
    let config = CatalogConfig {
        source: Some(CatalogSource::Minimal),
        path: Some(file.path().display().to_string()),
    };
    let table = catalog::load(Some(&config));
    assert_eq!(table.len(), 1);
    assert!(table.lookup("N").is_some());
}

#[test]
fn unreadable_path_falls_back_to_bundled() {
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig {
        source: None,
        path: Some(dir.path().join("absent.json").display().to_string()),
    };
    let table = catalog::load(Some(&config));
    assert_eq!(table.len(), 118);
    assert_eq!(table.lookup("og").unwrap().name, "Oganesson");
}

#[test]
fn minimal_catalog_plays_like_the_full_one() {
    let minimal = Catalog::minimal();
    let full = catalog::bundled().unwrap();
    for record in minimal.list_all() {
        assert_eq!(
            Hint::for_attempt(1, record),
            Hint::for_attempt(1, full.find(&record.name).unwrap())
        );
    }
}
