use serde::Serialize;

/// Stroke settings shared by every price line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub stroke_width: f64,
    pub fill: bool,
    /// Curve smoothing, 0.0 draws straight segments
    pub tension: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { stroke_width: 2.0, fill: false, tension: 0.2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub legend: bool,
    pub x_axis: bool,
    pub y_axis: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { responsive: true, legend: true, x_axis: true, y_axis: true }
    }
}

/// Line colours, cycled by dataset index
pub const PALETTE: [&str; 6] = ["#36a2eb", "#ff6384", "#4bc0c0", "#ff9f40", "#9966ff", "#ffcd56"];

pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
