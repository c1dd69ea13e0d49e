// src/gui/components/controls.rs
//
// Minute-salary controls: direct yen-per-minute entry, or conversion from
// monthly income. Inputs are half-width-digit validated before applying.

use eframe::egui::{self, Color32};

use crate::gui::app::App;

/// Half-width digits only. Empty counts as valid (nothing to complain about
/// until the user applies).
pub fn digits_only(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Minute salary");

    match app.state.session.minute_salary() {
        Some(v) => ui.label(format!("Current: {:.2} yen/min", v)),
        None => ui.weak("Not set; metric charts stay empty"),
    };

    ui.horizontal(|ui| {
        ui.label("Yen/min:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.salary_text)
                .desired_width(80.0)
                .hint_text("20"),
        );
        if ui.button("Set").clicked() {
            app.apply_salary_input();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Monthly:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.income_text)
                .desired_width(80.0)
                .hint_text("300000"),
        );
        if ui.button("Convert").clicked() {
            app.apply_income_input();
        }
    });

    if let Some(err) = &app.state.gui.input_error {
        ui.colored_label(Color32::from_rgb(220, 53, 69), err.as_str());
    }
}
