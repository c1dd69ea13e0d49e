// src/present/series.rs
//
// Chart series data, prepared for the drawing widget: labels, per-point
// values and colors, axis binding. No layout or widget state lives here.

pub use eframe::egui::Color32;

/// Transfer-count visual category. Counts of 3 or more collapse into one
/// band; missing counts get a neutral band of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransferBand {
    Zero,
    One,
    Two,
    ThreePlus,
    Unknown,
}

impl TransferBand {
    pub fn of(transfers: Option<f64>) -> TransferBand {
        match transfers {
            None => TransferBand::Unknown,
            Some(t) if !t.is_finite() => TransferBand::Unknown,
            Some(t) => match t.floor() as i64 {
                i64::MIN..=0 => TransferBand::Zero,
                1 => TransferBand::One,
                2 => TransferBand::Two,
                _ => TransferBand::ThreePlus,
            },
        }
    }

    /// Fixed color identity per band (high contrast).
    pub fn color(self) -> Color32 {
        match self {
            TransferBand::Zero => Color32::from_rgb(0, 123, 255),       // blue
            TransferBand::One => Color32::from_rgb(40, 167, 69),        // green
            TransferBand::Two => Color32::from_rgb(255, 193, 7),        // yellow
            TransferBand::ThreePlus => Color32::from_rgb(220, 53, 69),  // red
            TransferBand::Unknown => Color32::from_rgb(128, 128, 128),  // gray
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransferBand::Zero => "0 transfers",
            TransferBand::One => "1 transfer",
            TransferBand::Two => "2 transfers",
            TransferBand::ThreePlus => "3+ transfers",
            TransferBand::Unknown => "no data",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Bar,
    Line,
}

/// Which vertical axis a series is scaled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub kind: SeriesKind,
    pub axis: Axis,
    /// One entry per x label; None = gap (line series skip it).
    pub data: Vec<Option<f64>>,
    /// One base color per point; widgets derive fill/border shades from it.
    pub colors: Vec<Color32>,
}

impl Series {
    pub fn bar(label: &str, data: Vec<Option<f64>>, colors: Vec<Color32>) -> Self {
        Self { label: s!(label), kind: SeriesKind::Bar, axis: Axis::Left, data, colors }
    }

    pub fn uniform_bar(label: &str, data: Vec<Option<f64>>, color: Color32) -> Self {
        let colors = vec![color; data.len()];
        Self::bar(label, data, colors)
    }

    pub fn line(label: &str, data: Vec<Option<f64>>, color: Color32, axis: Axis) -> Self {
        let colors = vec![color; data.len()];
        Self { label: s!(label), kind: SeriesKind::Line, axis, data, colors }
    }
}

/// Fully-prepared chart: what the charting widget consumes.
#[derive(Clone, Debug, Default)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
