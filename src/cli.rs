// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::{Params, TableKind};

pub enum Mode {
    Cli(Params),
    Gui,
}

// Decide CLI vs GUI
pub fn detect_mode() -> Result<Mode, Box<dyn std::error::Error>> {
    if env::args().len() == 1 {
        // only program name
        return Ok(Mode::Gui);
    }
    let mut params = Params::new();
    parse_cli(&mut params)?;
    Ok(Mode::Cli(params))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    match detect_mode()? {
        Mode::Gui => crate::gui::run(eframe::NativeOptions::default()),
        Mode::Cli(params) => crate::runner::run(&params),
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-d" | "--dataset" => {
                let v = args.next().ok_or("Missing value for --dataset")?;
                params.dataset = PathBuf::from(v); }
            "--fetch" => params.fetch = Some(args.next().ok_or("Missing host for --fetch")?),
            "-r" | "--railway" => params.railway = Some(args.next().ok_or("Missing value for --railway")?),
            "-l" | "--line" => params.line = Some(args.next().ok_or("Missing value for --line")?),
            "--station" => params.station = Some(args.next().ok_or("Missing value for --station")?),
            "-s" | "--salary" => {
                let v: f64 = args.next().ok_or("Missing value for --salary")?.parse()?;
                if !v.is_finite() || v < 0.0 { return Err("Minute salary must be non-negative".into()); }
                params.minute_salary = Some(v); }
            "--monthly" => {
                let v: f64 = args.next().ok_or("Missing value for --monthly")?.parse()?;
                params.monthly_income = Some(v); }
            "--list-lines" => params.list_lines = true,
            "--list-stations" => params.list_stations = true,
            "--table" => {
                let v = args.next().ok_or("Missing value for --table")?;
                params.table = match v.to_ascii_lowercase().as_str() {
                    "minutes" | "minute-value" => Some(TableKind::MinuteValue),
                    "rent" | "effective-rent" => Some(TableKind::EffectiveRent),
                    other => return Err(format!("Unknown table kind: {}", other).into()),
                };}
            "--json" => params.json = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Split "host" or "host:port" into connectable parts.
pub fn split_host_port(s: &str) -> Result<(String, u16), Box<dyn std::error::Error>> {
    match s.rsplit_once(':') {
        Some((host, port)) => {
            if host.is_empty() { return Err(format!("Invalid host: {}", s).into()); }
            Ok((host.to_string(), port.parse()?))
        }
        None => Ok((s.to_string(), crate::params::DEFAULT_HTTP_PORT)),
    }
}
