//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::io::Write;

use periodle_engine::{App, Catalog, ElementRecord, GuessEngine, UiOptions};
use tempfile::NamedTempFile;

/// An app over the minimal catalog with the round pinned to `target`.
pub fn app_with_target(target: &str) -> App {
    let catalog = Catalog::minimal();
    let record = catalog
        .find(target)
        .unwrap_or_else(|| panic!("{target} is not in the minimal set"))
        .clone();
    let mut app = App::with_parts(catalog, GuessEngine::seeded(7), UiOptions::default())
        .expect("minimal catalog is not empty");
    app.start_new_game_with(record);
    app
}

/// Type `text` into the draft and press Enter.
pub fn submit(app: &mut App, text: &str) {
    for c in text.chars() {
        app.insert_char(c);
    }
    app.submit();
}

pub fn record(catalog: &Catalog, key: &str) -> ElementRecord {
    catalog
        .find(key)
        .unwrap_or_else(|| panic!("{key} missing"))
        .clone()
}

/// A JSON element row in the catalog file format.
pub fn element_json(number: u32, name: &str, symbol: &str, group: Option<u8>) -> serde_json::Value {
    serde_json::json!({
        "atomic_number": number,
        "name": name,
        "symbol": symbol,
        "group_id": group,
        "period": 2,
        "block": "p",
        "series": "Nonmetal",
        "econf": "[He] 2s2 2p3",
        "mass": 14.007,
    })
}

/// Write `rows` to a temporary JSON catalog file.
pub fn catalog_file(rows: &[serde_json::Value]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    let body = serde_json::to_string(rows).expect("serialize rows");
    file.write_all(body.as_bytes()).expect("write catalog");
    file
}
