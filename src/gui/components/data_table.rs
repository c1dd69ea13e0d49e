// src/gui/components/data_table.rs
//
// Draws a prepared TableSpec. Purely a view; the empty state (header only,
// "no rows") is the adapters' disabled rendering, not an error.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::present::adapters::TableSpec;

pub fn draw(ui: &mut egui::Ui, spec: &TableSpec, salt: &str) {
    ui.strong(spec.title.as_str());

    TableBuilder::new(ui)
        .id_salt(salt)
        .striped(true)
        .vscroll(false)
        .column(Column::initial(160.0).resizable(true))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong(spec.columns[0].as_str());
            });
            header.col(|ui| {
                ui.strong(spec.columns[1].as_str());
            });
        })
        .body(|body| {
            body.rows(18.0, spec.rows.len(), |mut row| {
                let (label, value) = &spec.rows[row.index()];
                row.col(|ui| {
                    ui.label(label.as_str());
                });
                row.col(|ui| {
                    ui.label(value.as_str());
                });
            });
        });

    if spec.rows.is_empty() {
        ui.weak("no rows");
    }
}
