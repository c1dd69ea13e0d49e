// src/gui/components/mod.rs
pub mod chart_panel;
pub mod controls;
pub mod data_table;
pub mod line_panel;
