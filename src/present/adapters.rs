// src/present/adapters.rs
//
// The four metric adapters (minute-value chart/table, effective-rent
// chart/table) plus the rent/time overview chart. Each is a pure function of
// (LineSeries, minute salary) → spec. Empty inputs and an unset minute salary
// produce a defined empty/zero spec, never an error.

use serde::Serialize;

use crate::extract::LineSeries;
use crate::metrics;
use super::series::{Axis, ChartSpec, Color32, Series, TransferBand};

// Fixed series colors (the non-banded ones).
pub const RENT_BAR: Color32 = Color32::from_rgb(95, 179, 211);
pub const TIME_LINE: Color32 = Color32::from_rgb(255, 159, 64);
pub const EFFECTIVE_RENT_BAR: Color32 = Color32::from_rgb(255, 165, 0);

/// Ordered (label, value) rows for the table widget or stdout.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TableSpec {
    pub title: String,
    pub columns: [String; 2],
    pub rows: Vec<(String, String)>,
}

/// Group an integer's digits by thousands ("96800" → "96,800").
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Overview chart: rent bars colored by transfer band, plus the commute-time
/// line on the right axis when any time value is present. Independent of the
/// minute salary.
pub fn overview_chart(ls: &LineSeries) -> ChartSpec {
    let colors = ls.transfers.iter().map(|t| TransferBand::of(*t).color()).collect();
    let rents = ls.rents.iter().map(|r| Some(*r)).collect();

    let mut series = vec![Series::bar("Rent (10k yen)", rents, colors)];
    if ls.times.iter().any(Option::is_some) {
        series.push(Series::line(
            "Time to reference (min)",
            ls.times.clone(),
            TIME_LINE,
            Axis::Right,
        ));
    }

    ChartSpec { labels: ls.stations.clone(), series }
}

fn metric_data(ls: &LineSeries, salary: Option<f64>, f: impl Fn(f64, usize) -> f64) -> Vec<Option<f64>> {
    match salary {
        // Disabled state: keep the labels, flatten the values.
        None => vec![Some(0.0); ls.len()],
        Some(s) => (0..ls.len()).map(|i| Some(f(s, i))).collect(),
    }
}

/// Commute minute-value chart (round-trip variant).
pub fn minute_value_chart(ls: &LineSeries, salary: Option<f64>) -> ChartSpec {
    let data = metric_data(ls, salary, |s, i| {
        metrics::minute_value_chart(s, ls.times[i], ls.transfers[i])
    });
    ChartSpec {
        labels: ls.stations.clone(),
        series: vec![Series::uniform_bar("Commute value (yen)", data, RENT_BAR)],
    }
}

/// Effective-rent chart (round-trip variant).
pub fn effective_rent_chart(ls: &LineSeries, salary: Option<f64>) -> ChartSpec {
    let data = metric_data(ls, salary, |s, i| {
        metrics::effective_rent_chart(s, ls.rents[i], ls.times[i], ls.transfers[i])
    });
    ChartSpec {
        labels: ls.stations.clone(),
        series: vec![Series::uniform_bar("Effective rent (yen)", data, EFFECTIVE_RENT_BAR)],
    }
}

fn metric_table(title: &str, value_column: &str, ls: &LineSeries, salary: Option<f64>,
                f: impl Fn(f64, usize) -> f64) -> TableSpec {
    let rows = match salary {
        // Disabled state: header only, no rows.
        None => Vec::new(),
        Some(s) => ls.stations.iter().enumerate()
            .map(|(i, station)| (station.clone(), format_thousands(f(s, i) as i64)))
            .collect(),
    };
    TableSpec {
        title: s!(title),
        columns: [s!("Station"), s!(value_column)],
        rows,
    }
}

/// Commute minute-value table (one-way variant, no round-trip doubling).
pub fn minute_value_table(ls: &LineSeries, salary: Option<f64>) -> TableSpec {
    metric_table("Commute minute-value", "Value (yen)", ls, salary, |s, i| {
        metrics::minute_value_table(s, ls.times[i], ls.transfers[i])
    })
}

/// Effective-rent table (one-way variant).
pub fn effective_rent_table(ls: &LineSeries, salary: Option<f64>) -> TableSpec {
    metric_table("Effective rent", "Effective rent (yen)", ls, salary, |s, i| {
        metrics::effective_rent_table(s, ls.rents[i], ls.times[i], ls.transfers[i])
    })
}
