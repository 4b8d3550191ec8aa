//! Transfer-characteristics chart painted straight onto an egui canvas.

use circuit_core::sampler::{Axis, SeriesKind, TransferChart};
use egui::{pos2, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};

const ACTIVE_COLOR: Color32 = Color32::from_rgb(34, 211, 238);
const ADD_COLOR: Color32 = Color32::from_rgb(59, 130, 246);
const SUB_COLOR: Color32 = Color32::from_rgb(168, 85, 247);
const THRESHOLD_COLOR: Color32 = Color32::from_rgb(239, 68, 68);
const AXIS_COLOR: Color32 = Color32::from_rgb(71, 85, 105);
const LABEL_COLOR: Color32 = Color32::from_rgb(148, 163, 184);
const GHOST_ALPHA: u8 = 51;
const MARGIN: f32 = 36.0;

/// Maps chart coordinates (volts) into a screen rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ChartGeometry {
    pub rect: Rect,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
}

impl ChartGeometry {
    pub fn new(rect: Rect, chart: &TransferChart) -> Self {
        Self {
            rect,
            x_domain: chart.x_domain(),
            y_domain: chart.y_domain,
        }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        let (x0, x1) = self.x_domain;
        let (y0, y1) = self.y_domain;
        let tx = ((x - x0) / (x1 - x0)) as f32;
        let ty = ((y.clamp(y0, y1) - y0) / (y1 - y0)) as f32;
        pos2(
            self.rect.left() + tx * self.rect.width(),
            self.rect.bottom() - ty * self.rect.height(),
        )
    }
}

fn series_color(kind: SeriesKind) -> Color32 {
    match kind {
        SeriesKind::Sum => ADD_COLOR,
        SeriesKind::Difference => SUB_COLOR,
        SeriesKind::Active => ACTIVE_COLOR,
    }
}

pub fn paint_chart(ui: &mut Ui, chart: &TransferChart) {
    ui.horizontal(|ui| {
        ui.heading("Transfer Characteristics");
        ui.label(
            egui::RichText::new(format!("(Constant UA = {:.1}V)", chart.input_a))
                .small()
                .color(LABEL_COLOR),
        );
    });

    let size = egui::vec2(ui.available_width(), ui.available_height().max(260.0));
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let plot_rect = response.rect.shrink2(egui::vec2(MARGIN, MARGIN / 2.0));
    let geometry = ChartGeometry::new(plot_rect, chart);
    let font = FontId::proportional(10.0);

    for line in &chart.reference_lines {
        let (from, to) = match line.axis {
            Axis::Y => (
                geometry.to_screen(geometry.x_domain.0, line.value),
                geometry.to_screen(geometry.x_domain.1, line.value),
            ),
            Axis::X => (
                geometry.to_screen(line.value, geometry.y_domain.0),
                geometry.to_screen(line.value, geometry.y_domain.1),
            ),
        };
        if line.threshold {
            painter.extend(Shape::dashed_line(
                &[from, to],
                Stroke::new(1.0, THRESHOLD_COLOR),
                3.0,
                3.0,
            ));
            if let Some(label) = line.label {
                painter.text(to, Align2::RIGHT_BOTTOM, label, font.clone(), THRESHOLD_COLOR);
            }
        } else {
            painter.line_segment([from, to], Stroke::new(1.0, AXIS_COLOR));
        }
    }

    for series in chart.series.iter().filter(|s| s.visible) {
        let points: Vec<Pos2> = chart
            .series_values(series.kind)
            .into_iter()
            .map(|(x, y)| geometry.to_screen(x, y))
            .collect();
        let color = series_color(series.kind);

        if series.kind == SeriesKind::Active {
            painter.add(Shape::line(points.clone(), Stroke::new(3.0, color)));
            for point in &points {
                painter.circle_filled(*point, 3.0, color);
            }
        } else {
            let ghost = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), GHOST_ALPHA);
            painter.extend(Shape::dashed_line(&points, Stroke::new(1.5, ghost), 5.0, 5.0));
        }
    }

    let (y0, y1) = chart.y_domain;
    painter.text(
        geometry.to_screen(geometry.x_domain.0, y1),
        Align2::RIGHT_TOP,
        format!("{y1:.0}"),
        font.clone(),
        LABEL_COLOR,
    );
    painter.text(
        geometry.to_screen(geometry.x_domain.0, y0),
        Align2::RIGHT_BOTTOM,
        format!("{y0:.0}"),
        font.clone(),
        LABEL_COLOR,
    );
    painter.text(
        plot_rect.center_bottom() + egui::vec2(0.0, 4.0),
        Align2::CENTER_TOP,
        chart.x_label(),
        font.clone(),
        LABEL_COLOR,
    );
    painter.text(
        plot_rect.left_top(),
        Align2::LEFT_BOTTOM,
        chart.y_label(),
        font.clone(),
        LABEL_COLOR,
    );

    let legend: Vec<String> = chart
        .series
        .iter()
        .filter(|s| s.visible)
        .map(|s| s.name.to_string())
        .collect();
    painter.text(
        plot_rect.right_top(),
        Align2::RIGHT_TOP,
        legend.join("   "),
        font,
        ACTIVE_COLOR,
    );
}
