// src/present/presenter.rs
//
// One artifact per target area. Rendering into an area replaces whatever was
// there, so re-invoking an adapter never accumulates stale series.

use std::collections::HashMap;

use crate::extract::LineSeries;
use super::adapters::{self, TableSpec};
use super::series::ChartSpec;

/// Render target areas, one visual artifact each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    Overview,
    MinuteValueChart,
    MinuteValueTable,
    EffectiveRentChart,
    EffectiveRentTable,
}

#[derive(Clone, Debug)]
pub enum Artifact {
    Chart(ChartSpec),
    Table(TableSpec),
}

#[derive(Default)]
pub struct Presenter {
    areas: HashMap<Area, Artifact>,
}

impl Presenter {
    pub fn new() -> Self { Self::default() }

    /// Install the artifact for an area, replacing any prior one.
    pub fn render(&mut self, area: Area, artifact: Artifact) {
        self.areas.insert(area, artifact);
    }

    pub fn chart(&self, area: Area) -> Option<&ChartSpec> {
        match self.areas.get(&area) {
            Some(Artifact::Chart(spec)) => Some(spec),
            _ => None,
        }
    }

    pub fn table(&self, area: Area) -> Option<&TableSpec> {
        match self.areas.get(&area) {
            Some(Artifact::Table(spec)) => Some(spec),
            _ => None,
        }
    }

    /// Number of rendered artifacts (one per populated area).
    pub fn len(&self) -> usize { self.areas.len() }
    pub fn is_empty(&self) -> bool { self.areas.is_empty() }

    pub fn clear(&mut self) { self.areas.clear(); }

    /// Re-render every area from the current series + minute salary.
    /// Idempotent: repeated calls leave exactly one artifact per area.
    pub fn refresh(&mut self, ls: &LineSeries, minute_salary: Option<f64>) {
        self.render(Area::Overview, Artifact::Chart(adapters::overview_chart(ls)));
        self.render(
            Area::MinuteValueChart,
            Artifact::Chart(adapters::minute_value_chart(ls, minute_salary)),
        );
        self.render(
            Area::MinuteValueTable,
            Artifact::Table(adapters::minute_value_table(ls, minute_salary)),
        );
        self.render(
            Area::EffectiveRentChart,
            Artifact::Chart(adapters::effective_rent_chart(ls, minute_salary)),
        );
        self.render(
            Area::EffectiveRentTable,
            Artifact::Table(adapters::effective_rent_table(ls, minute_salary)),
        );
    }
}
