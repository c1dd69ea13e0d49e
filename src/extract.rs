// src/extract.rs
//
// Extractor: walks dataset rows with a LineSelection and pulls per-station
// attributes into four parallel sequences. Per-row scratch slots are only
// committed together, so index i in every sequence describes the same row.

use serde_json::Value;

use crate::core::num;
use crate::dataset::{Dataset, Item};
use crate::match_line::LineSelection;

/// Parallel per-station sequences for one selection.
/// Invariant: all four vectors have equal length.
#[derive(Clone, Debug, Default)]
pub struct LineSeries {
    pub stations: Vec<String>,
    pub rents: Vec<f64>,
    pub times: Vec<Option<f64>>,
    pub transfers: Vec<Option<f64>>,
}

impl LineSeries {
    pub fn len(&self) -> usize { self.stations.len() }
    pub fn is_empty(&self) -> bool { self.stations.is_empty() }
}

/// Per-station attribute bundle from the Single-Station Lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct StationDetails {
    pub time: Option<f64>,
    pub transfers: Option<f64>,
    pub rent: Option<f64>,
}

/// Row scratch: what the matching columns of one row yielded.
#[derive(Default)]
struct RowSlots<'a> {
    station: Option<&'a str>,
    rent: Option<f64>,
    time: Option<f64>,
    transfers: Option<f64>,
}

fn fill_slot<'a>(slots: &mut RowSlots<'a>, item: Item, value: &'a Value) {
    match item {
        Item::Station => {
            if let Value::String(s) = value {
                if !s.is_empty() {
                    slots.station = Some(s.as_str());
                }
            }
        }
        Item::Rent => {
            if let Some(v) = num::as_number(value) {
                slots.rent = Some(v);
            }
        }
        Item::TimeToRef => {
            if let Some(v) = num::as_minutes(value) {
                slots.time = Some(v);
            }
        }
        Item::Transfers => {
            if let Some(v) = num::as_number(value) {
                slots.transfers = Some(v);
            }
        }
        Item::Other => {}
    }
}

/// Produce the four parallel sequences for a selection, in dataset order.
///
/// A row contributes only if it yields a non-empty station name AND a finite
/// rent. Time and transfers are optional and propagate as None, never
/// defaulted at this layer.
///
/// No rows qualifying is a valid (empty) result, logged for debugging of
/// naming mismatches, never an error.
pub fn extract(ds: &Dataset, sel: &LineSelection) -> LineSeries {
    let mut out = LineSeries::default();

    for row in &ds.rows {
        let mut slots = RowSlots::default();
        for (key, value) in &row.cells {
            if !sel.matches(key) {
                continue;
            }
            fill_slot(&mut slots, key.item, value);
        }

        // Station + rent are mandatory; time and transfers ride along.
        if let (Some(station), Some(rent)) = (slots.station, slots.rent) {
            out.stations.push(station.to_string());
            out.rents.push(rent);
            out.times.push(slots.time);
            out.transfers.push(slots.transfers);
        }
    }

    if out.is_empty() {
        logw!(
            "Extract: no rows matched railway=\"{}\" line=\"{}\" (stripped=\"{}\")",
            sel.railway(), sel.line(), sel.clean_line()
        );
        for (r, l) in ds.sample_selections(10) {
            logd!("Extract: dataset has railway=\"{}\" line=\"{}\"", r, l);
        }
    } else {
        let with_time = out.times.iter().filter(|t| t.is_some()).count();
        logf!(
            "Extract: {} station(s) for \"{}\" / \"{}\" ({} with time data)",
            out.len(), sel.railway(), sel.line(), with_time
        );
    }

    out
}

/// Station Lister: de-duplicated, lexicographically sorted station names
/// matching the selection. Rent is NOT required here: any row that names a
/// station on the line counts.
pub fn station_names(ds: &Dataset, sel: &LineSelection) -> Vec<String> {
    let mut set = std::collections::BTreeSet::new();
    for row in &ds.rows {
        for (key, value) in &row.cells {
            if key.item != Item::Station || !sel.matches(key) {
                continue;
            }
            if let Value::String(s) = value {
                if !s.is_empty() {
                    set.insert(s.clone());
                }
            }
        }
    }
    set.into_iter().collect()
}

/// Single-Station Lookup: time/transfers/rent for one named station.
/// Scans rows in order; the first row whose station field equals the target
/// wins, and its fields are committed together (scratch-then-commit).
pub fn station_details(ds: &Dataset, sel: &LineSelection, station: &str) -> StationDetails {
    if station.is_empty() {
        return StationDetails::default();
    }

    for row in &ds.rows {
        let mut slots = RowSlots::default();
        let mut found = false;
        for (key, value) in &row.cells {
            if !sel.matches(key) {
                continue;
            }
            if key.item == Item::Station && value.as_str() == Some(station) {
                found = true;
            }
            fill_slot(&mut slots, key.item, value);
        }
        if found {
            return StationDetails {
                time: slots.time,
                transfers: slots.transfers,
                rent: slots.rent,
            };
        }
    }

    StationDetails::default()
}
