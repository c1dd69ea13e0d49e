// src/present/mod.rs
//
// Presentation layer: adapters turn (LineSeries, minute salary) into
// fully-prepared chart/table specs; the Presenter registry holds exactly one
// artifact per target area. Widgets (gui::components) only draw specs.

pub mod adapters;
pub mod presenter;
pub mod series;
