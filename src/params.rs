// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_DATASET_FILE: &str = "fix_data.json";
pub const DEFAULT_HTTP_PORT: u16 = 80;

// Item vocabulary of the dataset's tuple keys. The labels are fixed by the
// upstream data producer, Japanese included.
pub const ITEM_STATION: &str = "駅";
pub const ITEM_TIME: &str = "神谷町までの時間(分)";
pub const ITEM_TRANSFERS: &str = "乗換回数";
pub const ITEM_RENT: &str = "家賃相場(万円)";

/// Operator-name prefixes that line names may or may not carry in the data
/// (e.g. "JR山手線" vs "山手線"). Stripped from the front before matching.
pub const OPERATOR_PREFIXES: &[&str] = &["JR", "ＪＲ", "東京メトロ", "西武鉄道"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    MinuteValue,
    EffectiveRent,
}

#[derive(Clone)]
pub struct Params {
    pub dataset: PathBuf,            // local dataset file
    pub fetch: Option<String>,       // fetch dataset from host[:port] instead
    pub railway: Option<String>,     // selected railway (exact)
    pub line: Option<String>,        // selected line (fuzzy-matched)
    pub station: Option<String>,     // single-station lookup
    pub minute_salary: Option<f64>,  // yen per commute minute
    pub monthly_income: Option<f64>, // derive minute salary from monthly pay
    pub list_lines: bool,            // list (railway, line) pairs then exit
    pub list_stations: bool,         // list stations for the selection then exit
    pub table: Option<TableKind>,    // print one of the metric tables
    pub json: bool,                  // tables/details as JSON instead of text
}

impl Params {
    pub fn new() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET_FILE),
            fetch: None,
            railway: None,
            line: None,
            station: None,
            minute_salary: None,
            monthly_income: None,
            list_lines: false,
            list_stations: false,
            table: None,
            json: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
