// src/config/mod.rs
pub mod state;
