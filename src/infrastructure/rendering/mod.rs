pub mod canvas_renderer;
pub mod geometry;

pub use canvas_renderer::CanvasLineRenderer;

use crate::domain::{chart::LineChart, errors::RenderingResult};

/// Where the line chart ends up. The previous drawing is released before
/// each new chart is drawn; nothing is updated incrementally.
pub trait ChartSurface {
    fn release(&mut self);
    fn draw(&mut self, chart: &LineChart) -> RenderingResult<()>;
}
