// tests/present.rs
//
// Presentation adapters: transfer banding, disabled/empty states, thousands
// formatting, and presenter idempotence.
//
use std::collections::HashSet;

use rent_scout::extract::LineSeries;
use rent_scout::gui::components::controls::digits_only;
use rent_scout::present::adapters::{
    effective_rent_chart, effective_rent_table, format_thousands, minute_value_chart,
    minute_value_table, overview_chart,
};
use rent_scout::present::presenter::{Area, Artifact, Presenter};
use rent_scout::present::series::{Axis, SeriesKind, TransferBand};

fn sample_series() -> LineSeries {
    LineSeries {
        stations: vec!["中目黒".into(), "恵比寿".into(), "六本木".into()],
        rents: vec![12.3, 13.1, 15.5],
        times: vec![Some(14.0), None, Some(3.0)],
        transfers: vec![Some(1.0), None, Some(0.0)],
    }
}

#[test]
fn transfer_bands_collapse_at_three() {
    assert_eq!(TransferBand::of(Some(0.0)), TransferBand::Zero);
    assert_eq!(TransferBand::of(Some(1.0)), TransferBand::One);
    assert_eq!(TransferBand::of(Some(2.0)), TransferBand::Two);
    assert_eq!(TransferBand::of(Some(3.0)), TransferBand::ThreePlus);
    assert_eq!(TransferBand::of(Some(7.0)), TransferBand::ThreePlus);
    assert_eq!(TransferBand::of(Some(2.9)), TransferBand::Two);
    assert_eq!(TransferBand::of(None), TransferBand::Unknown);
    assert_eq!(TransferBand::of(Some(f64::NAN)), TransferBand::Unknown);
}

#[test]
fn transfer_band_colors_are_distinct() {
    use TransferBand::*;
    let colors: HashSet<_> = [Zero, One, Two, ThreePlus, Unknown]
        .into_iter()
        .map(|b| b.color())
        .collect();
    assert_eq!(colors.len(), 5);
}

#[test]
fn overview_chart_colors_bars_by_transfer_band() {
    let spec = overview_chart(&sample_series());
    let bars = &spec.series[0];
    assert_eq!(bars.kind, SeriesKind::Bar);
    assert_eq!(bars.colors[0], TransferBand::One.color());
    assert_eq!(bars.colors[1], TransferBand::Unknown.color());
    assert_eq!(bars.colors[2], TransferBand::Zero.color());
}

#[test]
fn overview_chart_includes_time_line_only_when_present() {
    let spec = overview_chart(&sample_series());
    assert_eq!(spec.series.len(), 2);
    assert_eq!(spec.series[1].kind, SeriesKind::Line);
    assert_eq!(spec.series[1].axis, Axis::Right);
    // the time gap stays a gap
    assert_eq!(spec.series[1].data[1], None);

    let mut no_times = sample_series();
    no_times.times = vec![None, None, None];
    let spec = overview_chart(&no_times);
    assert_eq!(spec.series.len(), 1);
}

#[test]
fn unset_salary_renders_zeroed_charts_and_empty_tables() {
    let ls = sample_series();

    let chart = minute_value_chart(&ls, None);
    assert_eq!(chart.labels, ls.stations);
    assert!(chart.series[0].data.iter().all(|v| *v == Some(0.0)));

    let chart = effective_rent_chart(&ls, None);
    assert!(chart.series[0].data.iter().all(|v| *v == Some(0.0)));

    let table = minute_value_table(&ls, None);
    assert!(table.rows.is_empty());
    let table = effective_rent_table(&ls, None);
    assert!(table.rows.is_empty());
}

#[test]
fn empty_series_renders_empty_specs() {
    let ls = LineSeries::default();
    assert!(minute_value_chart(&ls, Some(20.0)).is_empty());
    assert!(overview_chart(&ls).is_empty());
    assert!(minute_value_table(&ls, Some(20.0)).rows.is_empty());
}

#[test]
fn chart_and_table_variants_stay_distinct() {
    let ls = LineSeries {
        stations: vec!["中目黒".into()],
        rents: vec![8.0],
        times: vec![Some(14.0)],
        transfers: vec![Some(1.0)],
    };
    let chart = minute_value_chart(&ls, Some(20.0));
    assert_eq!(chart.series[0].data[0], Some(840.0));

    let table = minute_value_table(&ls, Some(20.0));
    assert_eq!(table.rows[0], ("中目黒".to_string(), "420".to_string()));

    let rent_chart = effective_rent_chart(&ls, Some(20.0));
    assert_eq!(rent_chart.series[0].data[0], Some(96_800.0));

    let rent_table = effective_rent_table(&ls, Some(20.0));
    assert_eq!(rent_table.rows[0].1, "88,400");
}

#[test]
fn thousands_grouping() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(420), "420");
    assert_eq!(format_thousands(9_680), "9,680");
    assert_eq!(format_thousands(96_800), "96,800");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
    assert_eq!(format_thousands(-96_800), "-96,800");
}

#[test]
fn presenter_replaces_artifacts_per_area() {
    let ls = sample_series();
    let mut presenter = Presenter::new();

    presenter.render(
        Area::MinuteValueChart,
        Artifact::Chart(minute_value_chart(&ls, Some(20.0))),
    );
    presenter.render(
        Area::MinuteValueChart,
        Artifact::Chart(minute_value_chart(&ls, Some(20.0))),
    );
    assert_eq!(presenter.len(), 1, "re-render must replace, not accumulate");
}

#[test]
fn presenter_refresh_is_idempotent() {
    let ls = sample_series();
    let mut presenter = Presenter::new();

    presenter.refresh(&ls, Some(20.0));
    let after_first = presenter.len();
    presenter.refresh(&ls, Some(20.0));
    assert_eq!(presenter.len(), after_first);
    assert_eq!(after_first, 5);

    // every area holds the right artifact kind
    assert!(presenter.chart(Area::Overview).is_some());
    assert!(presenter.chart(Area::MinuteValueChart).is_some());
    assert!(presenter.chart(Area::EffectiveRentChart).is_some());
    assert!(presenter.table(Area::MinuteValueTable).is_some());
    assert!(presenter.table(Area::EffectiveRentTable).is_some());
    assert!(presenter.table(Area::Overview).is_none());
}

#[test]
fn digit_validation_matches_input_rules() {
    assert!(digits_only(""));
    assert!(digits_only("123"));
    assert!(digits_only("0"));
    assert!(!digits_only("１２３")); // full-width digits rejected
    assert!(!digits_only("12a"));
    assert!(!digits_only("12.5"));
    assert!(!digits_only(" 12"));
}
