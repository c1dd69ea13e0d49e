// src/dataset/store.rs
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use super::key::{self, ColumnKey};

/// One dataset row: its parseable columns, in source order.
/// Rows have no identity beyond their position.
#[derive(Clone, Debug, Default)]
pub struct Row {
    pub cells: Vec<(ColumnKey, Value)>,
}

/// The full in-memory dataset. Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Distinct (railway, line) pairs present in the column keys, sorted.
    /// Drives the selection dropdowns and the --list-lines output.
    pub fn selections(&self) -> Vec<(String, String)> {
        let mut set = BTreeSet::new();
        for row in &self.rows {
            for (k, _) in &row.cells {
                set.insert((k.railway.clone(), k.line.clone()));
            }
        }
        set.into_iter().collect()
    }

    /// A short sample of key pairs for "why did nothing match" diagnostics.
    pub fn sample_selections(&self, max: usize) -> Vec<(String, String)> {
        let mut v = self.selections();
        v.truncate(max);
        v
    }
}

/// Parse the raw JSON payload into a Dataset.
///
/// The payload must be an array of objects; each object's keys are tuple-like
/// strings (see dataset::key). Unparseable keys and non-object elements are
/// dropped, not fatal.
pub fn parse_dataset(text: &str) -> Result<Dataset, Box<dyn std::error::Error>> {
    let payload: Value = serde_json::from_str(text)?;
    let arr = payload.as_array().ok_or("dataset payload is not an array")?;

    let mut rows = Vec::with_capacity(arr.len());
    let mut skipped_keys = 0usize;
    let mut skipped_rows = 0usize;

    for element in arr {
        let Some(obj) = element.as_object() else {
            skipped_rows += 1;
            continue;
        };
        let mut cells = Vec::with_capacity(obj.len());
        for (raw_key, value) in obj {
            match key::parse_key(raw_key) {
                Some(k) => cells.push((k, value.clone())),
                None => skipped_keys += 1,
            }
        }
        rows.push(Row { cells });
    }

    if skipped_keys > 0 || skipped_rows > 0 {
        logw!(
            "Dataset: skipped {} unparseable key(s), {} non-object row(s)",
            skipped_keys, skipped_rows
        );
    }
    Ok(Dataset { rows })
}

/// Session-scoped dataset cache.
/// Loaded once; every load after the first is a no-op until reset().
/// Load failures leave the store empty; dependents degrade to empty results.
#[derive(Default)]
pub struct DataStore {
    dataset: Option<Dataset>,
}

impl DataStore {
    pub fn new() -> Self { Self { dataset: None } }

    pub fn is_loaded(&self) -> bool { self.dataset.is_some() }

    /// Read-only view of the cached dataset, if any.
    pub fn dataset(&self) -> Option<&Dataset> { self.dataset.as_ref() }

    /// Drop the cache so the next load re-reads the source.
    pub fn reset(&mut self) { self.dataset = None; }

    /// Install from raw JSON text. `origin` is only for log lines.
    pub fn load_text(&mut self, text: &str, origin: &str) {
        if self.dataset.is_some() {
            return;
        }
        match parse_dataset(text) {
            Ok(ds) => {
                logf!("Dataset: loaded {} row(s) from {}", ds.row_count(), origin);
                self.dataset = Some(ds);
            }
            Err(e) => {
                loge!("Dataset: failed to parse {}: {}", origin, e);
            }
        }
    }

    pub fn load_file(&mut self, path: &Path) {
        if self.dataset.is_some() {
            return;
        }
        match fs::read_to_string(path) {
            Ok(text) => self.load_text(&text, &path.display().to_string()),
            Err(e) => {
                loge!("Dataset: cannot read {}: {}", path.display(), e);
            }
        }
    }

    pub fn fetch_remote(&mut self, host: &str, port: u16, path: &str) {
        if self.dataset.is_some() {
            return;
        }
        match crate::core::net::http_get(host, port, path) {
            Ok(body) => self.load_text(&body, &format!("http://{}:{}{}", host, port, path)),
            Err(e) => {
                loge!("Dataset: fetch from {}:{}{} failed: {}", host, port, path, e);
            }
        }
    }
}
