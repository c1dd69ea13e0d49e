// src/runner.rs
use std::error::Error;

use crate::{
    cli,
    dataset::{DataStore, Dataset},
    extract,
    match_line::LineSelection,
    metrics,
    params::{Params, TableKind},
    present::adapters::{self, TableSpec},
};

/// Top-level CLI runner: load the dataset, resolve the selection, print what
/// was asked for.
pub fn run(params: &Params) -> Result<(), Box<dyn Error>> {
    let mut store = DataStore::new();
    match &params.fetch {
        Some(hostspec) => {
            let (host, port) = cli::split_host_port(hostspec)?;
            store.fetch_remote(&host, port, "/fix_data.json");
        }
        None => store.load_file(&params.dataset),
    }
    let Some(ds) = store.dataset() else {
        return Err("Dataset unavailable (see log for details)".into());
    };

    if params.list_lines {
        for (railway, line) in ds.selections() {
            println!("{}\t{}", railway, line);
        }
        return Ok(());
    }

    let railway = params.railway.as_deref().ok_or("Missing --railway")?;
    let line = params.line.as_deref().ok_or("Missing --line")?;
    let sel = LineSelection::new(railway, line);

    if params.list_stations {
        for s in extract::station_names(ds, &sel) {
            println!("{}", s);
        }
        return Ok(());
    }

    if let Some(station) = &params.station {
        return print_station(ds, &sel, station, params.json);
    }

    let series = extract::extract(ds, &sel);
    let salary = resolve_salary(params)?;

    match params.table {
        Some(TableKind::MinuteValue) => {
            print_table(&adapters::minute_value_table(&series, salary), params.json)
        }
        Some(TableKind::EffectiveRent) => {
            print_table(&adapters::effective_rent_table(&series, salary), params.json)
        }
        None => {
            print_summary(&series);
            Ok(())
        }
    }
}

/// --salary wins over --monthly; neither means "unset" and the metric tables
/// render their empty state.
fn resolve_salary(params: &Params) -> Result<Option<f64>, Box<dyn Error>> {
    if let Some(s) = params.minute_salary {
        return Ok(Some(s));
    }
    match params.monthly_income {
        Some(monthly) => Ok(Some(metrics::minute_salary_from_monthly(monthly)?)),
        None => Ok(None),
    }
}

fn print_station(ds: &Dataset, sel: &LineSelection, station: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let details = extract::station_details(ds, sel, station);
    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }
    println!("Station: {}", station);
    println!("  time:      {}", fmt_opt(details.time, "min"));
    println!("  transfers: {}", fmt_opt(details.transfers, ""));
    println!("  rent:      {}", fmt_opt(details.rent, "x10k yen"));
    Ok(())
}

fn fmt_opt(v: Option<f64>, unit: &str) -> String {
    match v {
        Some(v) if unit.is_empty() => format!("{}", v),
        Some(v) => format!("{} {}", v, unit),
        None => s!("-"),
    }
}

fn print_table(table: &TableSpec, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }
    println!("{}", table.title);
    println!("{}\t{}", table.columns[0], table.columns[1]);
    for (label, value) in &table.rows {
        println!("{}\t{}", label, value);
    }
    if table.rows.is_empty() {
        eprintln!("(no rows: set --salary or --monthly to compute metrics)");
    }
    Ok(())
}

fn print_summary(series: &extract::LineSeries) {
    println!("Station\tRent(10k)\tTime(min)\tTransfers");
    for i in 0..series.len() {
        println!(
            "{}\t{}\t{}\t{}",
            series.stations[i],
            series.rents[i],
            fmt_opt(series.times[i], ""),
            fmt_opt(series.transfers[i], ""),
        );
    }
    if series.is_empty() {
        eprintln!("No matching rows (see log for the attempted selection).");
    }
}
