// tests/metrics.rs
//
// Metric formulas, including the preserved chart/table variant discrepancy.
//
use rent_scout::metrics::{
    commute_minutes, effective_rent_chart, effective_rent_table, minute_salary_from_monthly,
    minute_value_chart, minute_value_table, SalaryError,
};

#[test]
fn minute_value_chart_doubles_the_commute() {
    // 20 yen/min, 14 min, 1 transfer → 20 × ((14 + 7) × 2) = 840
    assert_eq!(minute_value_chart(20.0, Some(14.0), Some(1.0)), 840.0);
}

#[test]
fn minute_value_table_is_one_way() {
    // same inputs without the round-trip factor → 20 × 21 = 420
    assert_eq!(minute_value_table(20.0, Some(14.0), Some(1.0)), 420.0);
}

#[test]
fn effective_rent_chart_value() {
    // rent 8 (万円), commute value 840 → round(80000 + 840 × 20) = 96800
    assert_eq!(
        effective_rent_chart(20.0, 8.0, Some(14.0), Some(1.0)),
        96_800.0
    );
}

#[test]
fn effective_rent_table_uses_one_way_commute() {
    // commute value 420 → round(80000 + 420 × 20) = 88400
    assert_eq!(
        effective_rent_table(20.0, 8.0, Some(14.0), Some(1.0)),
        88_400.0
    );
}

#[test]
fn missing_time_and_transfers_count_as_zero() {
    assert_eq!(commute_minutes(None, None), 0.0);
    assert_eq!(commute_minutes(Some(10.0), None), 10.0);
    assert_eq!(commute_minutes(None, Some(2.0)), 14.0);
    assert_eq!(minute_value_chart(20.0, None, None), 0.0);
    assert_eq!(effective_rent_chart(20.0, 8.0, None, None), 80_000.0);
}

#[test]
fn rounding_happens_at_final_computation() {
    // 0.3 × (10 + 7) = 5.1 one way, 10.2 round trip → rounds once, at the end
    assert_eq!(minute_value_chart(0.3, Some(10.0), Some(1.0)), 10.0);
    assert_eq!(minute_value_table(0.3, Some(10.0), Some(1.0)), 5.0);
    // 80000 + (0.3 × 17 × 2) × 20 = 80204.0 → 80204
    assert_eq!(
        effective_rent_chart(0.3, 8.0, Some(10.0), Some(1.0)),
        80_204.0
    );
}

#[test]
fn monthly_income_converts_at_9300_minutes() {
    // 20 days × 7.75 h × 60 min = 9300 working minutes per month
    assert_eq!(minute_salary_from_monthly(372_000.0).unwrap(), 40.0);
    assert_eq!(minute_salary_from_monthly(9_300.0).unwrap(), 1.0);
}

#[test]
fn non_positive_monthly_income_is_rejected() {
    assert_eq!(
        minute_salary_from_monthly(0.0),
        Err(SalaryError::NotPositive)
    );
    assert_eq!(
        minute_salary_from_monthly(-100.0),
        Err(SalaryError::NotPositive)
    );
    assert_eq!(
        minute_salary_from_monthly(f64::NAN),
        Err(SalaryError::NotFinite)
    );
}
