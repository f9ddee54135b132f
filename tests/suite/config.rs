//! Config files driving `App::new`.

use std::io::Write;

use periodle_engine::{App, CatalogSource, ConfigError, PeriodleConfig};
use tempfile::NamedTempFile;

use crate::common::{catalog_file, element_json};

fn config_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn app_honors_catalog_and_ui_settings() {
    let file = config_file(
        "[app]\nascii_only = true\nhigh_contrast = true\n\n[catalog]\nsource = \"minimal\"\n",
    );
    let config = PeriodleConfig::load_from(file.path()).unwrap();
    let app = App::new(Some(&config)).unwrap();

    assert_eq!(app.catalog().len(), 6);
    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
}

#[test]
fn fixed_seed_repeats_the_first_target() {
    let file = config_file("[catalog]\nsource = \"bundled\"\n\n[game]\nseed = 1234\n");
    let config = PeriodleConfig::load_from(file.path()).unwrap();

    let first = App::new(Some(&config)).unwrap();
    let second = App::new(Some(&config)).unwrap();
    let target = |app: &App| app.engine().round().unwrap().target().name.clone();
    assert_eq!(target(&first), target(&second));
}

#[test]
fn external_catalog_path_from_config() {
    let table = catalog_file(&[
        element_json(5, "Boron", "B", Some(13)),
        element_json(7, "Nitrogen", "N", Some(15)),
    ]);
    let body = format!(
        "[catalog]\npath = {}\n",
        toml_string(&table.path().display().to_string())
    );
    let file = config_file(&body);
    let config = PeriodleConfig::load_from(file.path()).unwrap();

    let mut app = App::new(Some(&config)).unwrap();
    assert_eq!(app.catalog().len(), 2);
    assert_eq!(
        app.transcript()[0].to_string(),
        "TARGET LOCKED. Range: 5-7"
    );
    assert!(app.guess("Carbon").is_err());
}

#[test]
fn no_config_uses_defaults() {
    let app = App::new(None).unwrap();
    assert!(!app.ui_options().ascii_only);
    assert!(app.accepts_guesses());
}

#[test]
fn broken_config_reports_its_path() {
    let file = config_file("[catalog]\nsource = \"enormous\"\n");
    let err = PeriodleConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), file.path());
    assert!(CatalogSource::parse("enormous").is_none());
}

fn toml_string(raw: &str) -> String {
    serde_json::to_string(raw).unwrap()
}
