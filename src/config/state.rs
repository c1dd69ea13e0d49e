// src/config/state.rs

/// Session-scoped shared values. The minute salary is last-writer-wins:
/// unset until first set, never auto-reset.
#[derive(Clone, Debug, Default)]
pub struct Session {
    minute_salary: Option<f64>,
}

impl Session {
    pub fn set_minute_salary(&mut self, yen_per_minute: f64) {
        self.minute_salary = Some(yen_per_minute);
    }

    pub fn minute_salary(&self) -> Option<f64> {
        self.minute_salary
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Current (railway, line) selection driving the charts
    pub selected_railway: String,
    pub selected_line: String,

    /// Station picked in the station list, if any
    pub selected_station: Option<String>,

    /// Raw text of the salary/income inputs (validated on apply)
    pub salary_text: String,
    pub income_text: String,
    pub input_error: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_railway: s!(),
            selected_line: s!(),
            selected_station: None,
            salary_text: s!(),
            income_text: s!(),
            input_error: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub gui: GuiState,
    pub session: Session,
}
