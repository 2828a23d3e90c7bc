//! Pure layout math for the line chart, kept apart from the canvas calls.

pub type Point = (f64, f64);

/// Space reserved around the plot for tick labels and the legend
pub const AXIS_GUTTER_LEFT: f64 = 64.0;
pub const AXIS_GUTTER_BOTTOM: f64 = 36.0;
pub const LEGEND_HEIGHT: f64 = 28.0;
pub const EDGE_PADDING: f64 = 12.0;

/// Maximum x-axis labels drawn before thinning kicks in
pub const MAX_X_LABELS: usize = 8;
pub const Y_TICKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(canvas_width: f64, canvas_height: f64, legend: bool) -> Self {
        let top = EDGE_PADDING + if legend { LEGEND_HEIGHT } else { 0.0 };
        let left = AXIS_GUTTER_LEFT;
        Self {
            left,
            top,
            width: (canvas_width - left - EDGE_PADDING).max(0.0),
            height: (canvas_height - top - AXIS_GUTTER_BOTTOM).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Adds 5% headroom; a flat series gets a unit band so it sits mid-plot.
pub fn padded_range((lo, hi): (f64, f64)) -> (f64, f64) {
    let span = hi - lo;
    if span <= f64::EPSILON * hi.abs().max(1.0) {
        let band = (hi.abs() * 0.01).max(1.0);
        return (lo - band, hi + band);
    }
    (lo - span * 0.05, hi + span * 0.05)
}

/// X coordinate of category `index` out of `slots` evenly spaced labels
pub fn x_position(index: usize, slots: usize, area: &PlotArea) -> f64 {
    if slots <= 1 {
        return area.left + area.width / 2.0;
    }
    area.left + index as f64 * area.width / (slots - 1) as f64
}

pub fn y_position(value: f64, (lo, hi): (f64, f64), area: &PlotArea) -> f64 {
    area.top + (hi - value) / (hi - lo) * area.height
}

/// Screen points for one dataset; values past the label axis are dropped.
pub fn project(data: &[f64], slots: usize, range: (f64, f64), area: &PlotArea) -> Vec<Point> {
    data.iter()
        .take(slots)
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| (x_position(i, slots, area), y_position(v, range, area)))
        .collect()
}

/// Cubic Bézier control points for each segment `points[i] -> points[i + 1]`.
///
/// Each tangent follows the neighbouring points, scaled by `tension`;
/// zero tension collapses the controls onto the endpoints.
pub fn control_points(points: &[Point], tension: f64) -> Vec<(Point, Point)> {
    if points.len() < 2 {
        return Vec::new();
    }
    let last = points.len() - 1;
    let k = tension / 2.0;

    (0..last)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];
            let cp1 = (p1.0 + (p2.0 - p0.0) * k, p1.1 + (p2.1 - p0.1) * k);
            let cp2 = (p2.0 - (p3.0 - p1.0) * k, p2.1 - (p3.1 - p1.1) * k);
            (cp1, cp2)
        })
        .collect()
}

/// Stride between drawn x-axis labels so at most `max_labels` appear
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

/// `count` evenly spaced tick values from `hi` down to `lo`
pub fn y_ticks((lo, hi): (f64, f64), count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![(lo + hi) / 2.0],
        _ => (0..count)
            .map(|i| hi - (hi - lo) * i as f64 / (count - 1) as f64)
            .collect(),
    }
}
