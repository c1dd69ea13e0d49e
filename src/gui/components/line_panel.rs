// src/gui/components/line_panel.rs
//
// Railway / line dropdowns and the station list for the current selection.
// Applies selection changes directly to `app`.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Selection");

    if app.selections.is_empty() {
        ui.weak("No dataset loaded");
        if ui.button("Reload").clicked() {
            app.reload_dataset();
        }
        return;
    }

    // selections are sorted, so adjacent dedup gives distinct railways
    let mut railways: Vec<String> = app.selections.iter().map(|(r, _)| r.clone()).collect();
    railways.dedup();

    let mut railway_changed = false;
    egui::ComboBox::from_label("Railway")
        .selected_text(app.state.gui.selected_railway.clone())
        .show_ui(ui, |ui| {
            for r in &railways {
                if ui
                    .selectable_value(&mut app.state.gui.selected_railway, r.clone(), r.as_str())
                    .changed()
                {
                    railway_changed = true;
                }
            }
        });
    if railway_changed {
        app.sync_line_to_railway();
    }

    let lines: Vec<String> = app
        .selections
        .iter()
        .filter(|(r, _)| *r == app.state.gui.selected_railway)
        .map(|(_, l)| l.clone())
        .collect();

    let mut line_changed = false;
    egui::ComboBox::from_label("Line")
        .selected_text(app.state.gui.selected_line.clone())
        .show_ui(ui, |ui| {
            for l in &lines {
                if ui
                    .selectable_value(&mut app.state.gui.selected_line, l.clone(), l.as_str())
                    .changed()
                {
                    line_changed = true;
                }
            }
        });
    if line_changed {
        app.rebuild();
    }

    if ui.button("Reload dataset").clicked() {
        app.reload_dataset();
    }

    ui.separator();
    ui.strong("Stations");

    let mut clicked: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt("station_list_scroll")
        .max_height(220.0)
        .show(ui, |ui| {
            for name in &app.stations {
                let selected = app.state.gui.selected_station.as_deref() == Some(name.as_str());
                if ui.selectable_label(selected, name.as_str()).clicked() {
                    clicked = Some(name.clone());
                }
            }
        });
    if let Some(name) = clicked {
        app.select_station(name);
    }

    if let (Some(name), Some(details)) = (&app.state.gui.selected_station, &app.details) {
        ui.separator();
        ui.strong(name.as_str());
        ui.label(format!("Time to reference: {}", fmt_opt(details.time, "min")));
        ui.label(format!("Transfers: {}", fmt_opt(details.transfers, "")));
        ui.label(format!("Rent: {}", fmt_opt(details.rent, "x10k yen")));
    }
}

fn fmt_opt(v: Option<f64>, unit: &str) -> String {
    match v {
        Some(v) if unit.is_empty() => format!("{}", v),
        Some(v) => format!("{} {}", v, unit),
        None => s!("-"),
    }
}
