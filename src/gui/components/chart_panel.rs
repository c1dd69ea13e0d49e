// src/gui/components/chart_panel.rs
//
// Draws a prepared ChartSpec with the egui painter: bars on the left axis,
// lines on either axis, station labels along the bottom. Purely a view;
// every frame repaints from the spec, so stale series can't linger.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Vec2};

use crate::present::series::{Axis, ChartSpec, SeriesKind, TransferBand};

const CHART_H: f32 = 220.0;
const PAD_TOP: f32 = 14.0;
const PAD_BOTTOM: f32 = 26.0;
const PAD_SIDE: f32 = 8.0;

pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec) {
    let width = ui.available_width();
    let (response, painter) = ui.allocate_painter(Vec2::new(width, CHART_H), Sense::hover());
    let rect = response.rect;

    let weak = ui.visuals().weak_text_color();
    let text = ui.visuals().text_color();
    painter.rect_stroke(rect, 2.0, Stroke::new(1.0, weak), StrokeKind::Inside);

    let n = spec.labels.len();
    if n == 0 || spec.series.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "no data",
            FontId::proportional(12.0),
            weak,
        );
        return;
    }

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + PAD_SIDE, rect.top() + PAD_TOP),
        Pos2::new(rect.right() - PAD_SIDE, rect.bottom() - PAD_BOTTOM),
    );

    let left_max = axis_max(spec, Axis::Left);
    let right_max = axis_max(spec, Axis::Right);

    let slot_w = plot.width() / n as f32;
    let bar_w = (slot_w * 0.6).max(1.0);
    let x_of = |i: usize| plot.left() + slot_w * (i as f32 + 0.5);
    let y_of = |v: f64, max: f64| plot.bottom() - ((v / max).clamp(0.0, 1.0) as f32) * plot.height();

    for series in &spec.series {
        let max = match series.axis {
            Axis::Left => left_max,
            Axis::Right => right_max,
        };
        match series.kind {
            SeriesKind::Bar => {
                for (i, v) in series.data.iter().enumerate() {
                    let Some(v) = v else { continue };
                    let cx = x_of(i);
                    let bar = Rect::from_min_max(
                        Pos2::new(cx - bar_w * 0.5, y_of(*v, max)),
                        Pos2::new(cx + bar_w * 0.5, plot.bottom()),
                    );
                    let color = series.colors.get(i).copied().unwrap_or(Color32::GRAY);
                    painter.rect_filled(bar, 1.0, color.gamma_multiply(0.8));
                    painter.rect_stroke(bar, 1.0, Stroke::new(1.0, color), StrokeKind::Inside);
                }
            }
            SeriesKind::Line => {
                let color = series.colors.first().copied().unwrap_or(Color32::GRAY);
                let points: Vec<Pos2> = series
                    .data
                    .iter()
                    .enumerate()
                    .filter_map(|(i, v)| v.map(|v| Pos2::new(x_of(i), y_of(v, max))))
                    .collect();
                if points.len() > 1 {
                    painter.add(Shape::line(points.clone(), Stroke::new(2.0, color)));
                }
                for p in points {
                    painter.circle_filled(p, 3.0, color);
                }
            }
        }
    }

    // Axis maxima in the corners, station labels along the bottom.
    painter.text(
        Pos2::new(plot.left(), rect.top() + 2.0),
        Align2::LEFT_TOP,
        format!("{:.0}", left_max),
        FontId::proportional(9.0),
        weak,
    );
    if spec.series.iter().any(|s| s.axis == Axis::Right) {
        painter.text(
            Pos2::new(plot.right(), rect.top() + 2.0),
            Align2::RIGHT_TOP,
            format!("{:.0}", right_max),
            FontId::proportional(9.0),
            weak,
        );
    }
    for (i, label) in spec.labels.iter().enumerate() {
        painter.text(
            Pos2::new(x_of(i), plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(9.0),
            text,
        );
    }
}

/// Scale per axis: the largest value among its series, floor 1 so that an
/// all-zero (disabled) chart still lays out.
fn axis_max(spec: &ChartSpec, axis: Axis) -> f64 {
    let mut max = 0.0f64;
    for series in spec.series.iter().filter(|s| s.axis == axis) {
        for v in series.data.iter().flatten() {
            if *v > max {
                max = *v;
            }
        }
    }
    if max > 0.0 { max } else { 1.0 }
}

/// Color legend for the transfer-count bands on the overview chart.
pub fn transfer_legend(ui: &mut egui::Ui) {
    use TransferBand::*;
    ui.horizontal(|ui| {
        for band in [Zero, One, Two, ThreePlus, Unknown] {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, band.color());
            ui.small(band.label());
        }
    });
}
