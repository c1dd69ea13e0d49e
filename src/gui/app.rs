// src/gui/app.rs
use std::{error::Error, path::Path};

use eframe::egui;

use crate::{
    config::state::AppState,
    dataset::DataStore,
    extract::{self, LineSeries, StationDetails},
    match_line::LineSelection,
    metrics, params,
    present::presenter::{Area, Presenter},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Rent Scout",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // session dataset cache
    pub store: DataStore,

    // derived from the dataset on load: distinct (railway, line) pairs
    pub selections: Vec<(String, String)>,

    // derived per selection
    pub stations: Vec<String>,
    pub series: LineSeries,
    pub details: Option<StationDetails>,

    // one artifact per display area; rebuilt on every change
    pub presenter: Presenter,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut store = DataStore::new();
        store.load_file(Path::new(params::DEFAULT_DATASET_FILE));

        let selections = store
            .dataset()
            .map(|ds| ds.selections())
            .unwrap_or_default();

        let status = if store.is_loaded() {
            s!("Loaded local dataset")
        } else {
            s!("Dataset missing, see log")
        };
        logf!("Init: {} (railway, line) pair(s)", selections.len());

        let mut app = Self {
            state,
            store,
            selections,
            stations: Vec::new(),
            series: LineSeries::default(),
            details: None,
            presenter: Presenter::new(),
            status,
        };

        // Default selection: first pair in the dataset
        if let Some((railway, line)) = app.selections.first().cloned() {
            app.state.gui.selected_railway = railway;
            app.state.gui.selected_line = line;
        }
        app.rebuild();
        app
    }

    /// Current selection, prepared for matching.
    fn selection(&self) -> LineSelection {
        LineSelection::new(
            &self.state.gui.selected_railway,
            &self.state.gui.selected_line,
        )
    }

    /// Re-extract and re-render everything from the current selection and
    /// minute salary. Fully replaces prior chart/table state.
    pub fn rebuild(&mut self) {
        let sel = self.selection();
        match self.store.dataset() {
            Some(ds) => {
                self.series = extract::extract(ds, &sel);
                self.stations = extract::station_names(ds, &sel);
            }
            None => {
                self.series = LineSeries::default();
                self.stations.clear();
            }
        }

        // Drop a stale station pick; refresh details for a surviving one.
        match &self.state.gui.selected_station {
            Some(name) if self.stations.contains(name) => {
                let name = name.clone();
                self.details = self
                    .store
                    .dataset()
                    .map(|ds| extract::station_details(ds, &sel, &name));
            }
            _ => {
                self.state.gui.selected_station = None;
                self.details = None;
            }
        }

        self.presenter
            .refresh(&self.series, self.state.session.minute_salary());
        self.status = format!(
            "{} station(s) for {} {}",
            self.series.len(),
            self.state.gui.selected_railway,
            self.state.gui.selected_line
        );
    }

    /// Railway changed: snap the line to the first one under that railway.
    pub fn sync_line_to_railway(&mut self) {
        let railway = self.state.gui.selected_railway.clone();
        let still_valid = self
            .selections
            .iter()
            .any(|(r, l)| *r == railway && *l == self.state.gui.selected_line);
        if !still_valid {
            if let Some((_, line)) = self.selections.iter().find(|(r, _)| *r == railway) {
                self.state.gui.selected_line = line.clone();
            }
        }
        self.rebuild();
    }

    pub fn select_station(&mut self, name: String) {
        let sel = self.selection();
        self.details = self
            .store
            .dataset()
            .map(|ds| extract::station_details(ds, &sel, &name));
        self.state.gui.selected_station = Some(name);
    }

    /// Drop the cache and re-read the dataset file.
    pub fn reload_dataset(&mut self) {
        self.store.reset();
        self.store.load_file(Path::new(params::DEFAULT_DATASET_FILE));
        self.selections = self
            .store
            .dataset()
            .map(|ds| ds.selections())
            .unwrap_or_default();
        let valid = self.selections.iter().any(|(r, l)| {
            *r == self.state.gui.selected_railway && *l == self.state.gui.selected_line
        });
        if !valid {
            if let Some((railway, line)) = self.selections.first().cloned() {
                self.state.gui.selected_railway = railway;
                self.state.gui.selected_line = line;
            }
        }
        self.rebuild();
    }

    /// Apply the "yen per minute" text input to the session.
    pub fn apply_salary_input(&mut self) {
        let text = self.state.gui.salary_text.trim().to_string();
        if !components::controls::digits_only(&text) {
            self.state.gui.input_error = Some(s!("Enter half-width digits only"));
            return;
        }
        if text.is_empty() {
            self.state.gui.input_error = Some(s!("Enter a value first"));
            return;
        }
        match text.parse::<f64>() {
            Ok(v) => {
                self.state.session.set_minute_salary(v);
                self.state.gui.input_error = None;
                logf!("Session: minute salary set to {} yen/min", v);
                self.rebuild();
            }
            Err(e) => {
                self.state.gui.input_error = Some(format!("Invalid number: {}", e));
            }
        }
    }

    /// Apply the monthly-income text input, converting to a minute salary.
    pub fn apply_income_input(&mut self) {
        let text = self.state.gui.income_text.trim().to_string();
        if !components::controls::digits_only(&text) {
            self.state.gui.input_error = Some(s!("Enter half-width digits only"));
            return;
        }
        if text.is_empty() {
            self.state.gui.input_error = Some(s!("Enter a value first"));
            return;
        }
        let monthly: f64 = match text.parse() {
            Ok(v) => v,
            Err(e) => {
                self.state.gui.input_error = Some(format!("Invalid number: {}", e));
                return;
            }
        };
        match metrics::minute_salary_from_monthly(monthly) {
            Ok(v) => {
                self.state.session.set_minute_salary(v);
                self.state.gui.input_error = None;
                logf!("Session: minute salary {} yen/min (from monthly {})", v, monthly);
                self.rebuild();
            }
            Err(e) => {
                self.state.gui.input_error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::SidePanel::left("selection")
            .resizable(false)
            .show(ctx, |ui| {
                components::line_panel::draw(ui, self);
                ui.separator();
                components::controls::draw(ui, self);
            });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Rent vs commute");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&self.status);
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("charts_scroll")
                .show(ui, |ui| {
                    if let Some(spec) = self.presenter.chart(Area::Overview) {
                        ui.strong("Rent & commute overview");
                        components::chart_panel::transfer_legend(ui);
                        components::chart_panel::draw(ui, spec);
                        ui.add_space(12.0);
                    }
                    if let Some(spec) = self.presenter.chart(Area::MinuteValueChart) {
                        ui.strong("Commute minute-value (round trip)");
                        components::chart_panel::draw(ui, spec);
                        ui.add_space(12.0);
                    }
                    if let Some(spec) = self.presenter.chart(Area::EffectiveRentChart) {
                        ui.strong("Effective rent");
                        components::chart_panel::draw(ui, spec);
                        ui.add_space(12.0);
                    }

                    ui.separator();

                    ui.columns(2, |cols| {
                        if let Some(spec) = self.presenter.table(Area::MinuteValueTable) {
                            components::data_table::draw(&mut cols[0], spec, "mv_table");
                        }
                        if let Some(spec) = self.presenter.table(Area::EffectiveRentTable) {
                            components::data_table::draw(&mut cols[1], spec, "er_table");
                        }
                    });
                });
        });
    }
}
