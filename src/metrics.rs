// src/metrics.rs
//
// Metric Calculator: pure formulas over (time, transfers, rent, minute
// salary). Nothing here reads state or renders.
//
// Chart and table variants deliberately differ: the chart formulas double the
// commute (round trip), the table formulas don't. The discrepancy comes from
// the observed behavior of the tool this replaces and is preserved as two
// distinct variants rather than unified (likely an upstream bug; see
// DESIGN.md).

use std::fmt;

/// Minutes added per transfer.
pub const TRANSFER_PENALTY_MIN: f64 = 7.0;
/// Commute-cost weighting applied in the effective-rent formula.
pub const COMMUTE_WEIGHT: f64 = 20.0;
/// Rent values arrive in units of 10,000 yen.
pub const YEN_PER_RENT_UNIT: f64 = 10_000.0;

// Workload assumptions for the monthly-income conversion.
pub const WORKDAYS_PER_MONTH: f64 = 20.0;
pub const WORK_HOURS_PER_DAY: f64 = 7.75;

/// Adjusted one-way commute: time plus a fixed penalty per transfer.
/// Missing time/transfers count as 0 here, and only here.
pub fn commute_minutes(time: Option<f64>, transfers: Option<f64>) -> f64 {
    time.unwrap_or(0.0) + transfers.unwrap_or(0.0) * TRANSFER_PENALTY_MIN
}

/// Commute minute-value, chart variant (round trip: ×2).
/// Rounded to the nearest yen at the point of final computation.
pub fn minute_value_chart(salary: f64, time: Option<f64>, transfers: Option<f64>) -> f64 {
    (salary * commute_minutes(time, transfers) * 2.0).round()
}

/// Commute minute-value, table variant (one way: no ×2).
pub fn minute_value_table(salary: f64, time: Option<f64>, transfers: Option<f64>) -> f64 {
    (salary * commute_minutes(time, transfers)).round()
}

/// Effective rent, chart variant: rent in yen plus the weighted round-trip
/// commute value.
pub fn effective_rent_chart(salary: f64, rent: f64, time: Option<f64>, transfers: Option<f64>) -> f64 {
    let commute_value = salary * commute_minutes(time, transfers) * 2.0;
    (rent * YEN_PER_RENT_UNIT + commute_value * COMMUTE_WEIGHT).round()
}

/// Effective rent, table variant: same rent term, one-way commute value.
pub fn effective_rent_table(salary: f64, rent: f64, time: Option<f64>, transfers: Option<f64>) -> f64 {
    let commute_value = salary * commute_minutes(time, transfers);
    (rent * YEN_PER_RENT_UNIT + commute_value * COMMUTE_WEIGHT).round()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalaryError {
    /// Monthly income must be greater than zero.
    NotPositive,
    /// NaN/infinite input.
    NotFinite,
}

impl fmt::Display for SalaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryError::NotPositive => write!(f, "monthly income must be greater than zero"),
            SalaryError::NotFinite => write!(f, "monthly income must be a finite number"),
        }
    }
}

impl std::error::Error for SalaryError {}

/// Derive a minute salary from monthly income.
/// Assumes 20 workdays × 7.75 h/day = 9300 working minutes per month.
pub fn minute_salary_from_monthly(monthly_yen: f64) -> Result<f64, SalaryError> {
    if !monthly_yen.is_finite() {
        return Err(SalaryError::NotFinite);
    }
    if monthly_yen <= 0.0 {
        return Err(SalaryError::NotPositive);
    }
    let minutes_per_month = WORKDAYS_PER_MONTH * WORK_HOURS_PER_DAY * 60.0;
    Ok(monthly_yen / minutes_per_month)
}
