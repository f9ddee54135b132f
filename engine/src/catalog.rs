//! Element catalog loading.
//!
//! Three sources, tried in order of preference:
//!
//! 1. an external JSON table named by `[catalog] path`,
//! 2. the bundled 118-element table compiled into this crate,
//! 3. the six-element minimal set.
//!
//! A failing source logs and falls through to the next one, so a game can
//! always start.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use periodle_types::{AtomicNumber, Catalog, ElementRecord};

use crate::config::{CatalogConfig, CatalogSource};

const BUNDLED_TABLE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/periodic_table.json"));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read element table at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse element table{}: {source}", origin(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
}

fn origin(path: Option<&Path>) -> String {
    path.map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

/// Parse a JSON array of element records.
///
/// Entries heavier than Oganesson are dropped rather than rejected, so a
/// table that also lists hypothetical elements still loads.
pub fn parse_table(json: &str) -> Result<Catalog, serde_json::Error> {
    let rows: Vec<Value> = serde_json::from_str(json)?;
    let max = u64::from(AtomicNumber::MAX.value());

    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;
    for row in rows {
        let heavy = row
            .get("atomic_number")
            .and_then(Value::as_u64)
            .is_some_and(|n| n > max);
        if heavy {
            dropped += 1;
            continue;
        }
        records.push(serde_json::from_value::<ElementRecord>(row)?);
    }

    if dropped > 0 {
        tracing::debug!(dropped, "Skipped elements beyond the known table");
    }
    Ok(Catalog::new(records))
}

/// The 118-element table shipped with the game.
pub fn bundled() -> Result<Catalog, CatalogError> {
    parse_table(BUNDLED_TABLE).map_err(|source| CatalogError::Parse { path: None, source })
}

pub fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&content).map_err(|source| CatalogError::Parse {
        path: Some(path.to_path_buf()),
        source,
    })
}

/// Build the catalog described by config, falling back as needed.
pub fn load(config: Option<&CatalogConfig>) -> Catalog {
    if let Some(path) = config.and_then(CatalogConfig::resolved_path) {
        match load_file(&path) {
            Ok(catalog) if !catalog.is_empty() => {
                tracing::info!(path = %path.display(), elements = catalog.len(), "Loaded element table");
                return catalog;
            }
            Ok(_) => {
                tracing::warn!(path = %path.display(), "Element table is empty, using bundled table");
            }
            Err(err) => tracing::warn!("{err}; using bundled table"),
        }
        return bundled_or_minimal();
    }

    let source = config
        .and_then(|c| c.source)
        .or_else(CatalogSource::from_env)
        .unwrap_or_default();

    match source {
        CatalogSource::Bundled => bundled_or_minimal(),
        CatalogSource::Minimal => {
            tracing::info!("Using minimal element set");
            Catalog::minimal()
        }
    }
}

fn bundled_or_minimal() -> Catalog {
    match bundled() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("{err}; falling back to minimal element set");
            Catalog::minimal()
        }
    }
}
