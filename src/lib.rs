// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod params;

pub mod dataset;
pub mod extract;
pub mod match_line;
pub mod metrics;
pub mod present;

pub mod gui;
pub mod runner;
