use super::geometry::{
    self, MAX_X_LABELS, PlotArea, Point, Y_TICKS, control_points, label_stride, padded_range,
    project, x_position, y_position, y_ticks,
};
use super::ChartSurface;
use crate::domain::{
    chart::{Dataset, LineChart},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const AXIS_COLOR: &str = "#666666";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.08)";
const TEXT_COLOR: &str = "#444444";
const FONT: &str = "12px sans-serif";

/// Canvas 2D line chart; every draw starts from a blank canvas
pub struct CanvasLineRenderer {
    canvas_id: String,
}

impl CanvasLineRenderer {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self { canvas_id: canvas_id.into() }
    }

    fn get_canvas_context(&self) -> RenderingResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Rendering("Document not available".to_string()))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| AppError::Rendering(format!("Canvas '{}' not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Rendering(format!("'{}' is not a canvas", self.canvas_id)))?;

        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::Rendering("Failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("Failed to cast to 2D context".to_string()))?;

        Ok((canvas, context))
    }

    /// Match the backing store to the laid-out width
    fn fit_to_layout(canvas: &HtmlCanvasElement) {
        let client_width = canvas.client_width();
        if client_width > 0 && client_width as u32 != canvas.width() {
            canvas.set_width(client_width as u32);
        }
    }

    fn render_axes(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &LineChart,
        area: &PlotArea,
        range: (f64, f64),
    ) -> RenderingResult<()> {
        context.set_line_width(1.0);
        context.set_font(FONT);
        context.set_fill_style_str(TEXT_COLOR);

        if chart.options.y_axis {
            context.set_text_align("right");
            context.set_text_baseline("middle");
            for tick in y_ticks(range, Y_TICKS) {
                let y = y_position(tick, range, area);
                context.set_stroke_style_str(GRID_COLOR);
                context.begin_path();
                context.move_to(area.left, y);
                context.line_to(area.right(), y);
                context.stroke();
                context
                    .fill_text(&format!("{:.2}", tick), area.left - 6.0, y)
                    .map_err(|_| AppError::Rendering("Failed to draw y tick".to_string()))?;
            }
            context.set_stroke_style_str(AXIS_COLOR);
            context.begin_path();
            context.move_to(area.left, area.top);
            context.line_to(area.left, area.bottom());
            context.stroke();
        }

        if chart.options.x_axis {
            context.set_stroke_style_str(AXIS_COLOR);
            context.begin_path();
            context.move_to(area.left, area.bottom());
            context.line_to(area.right(), area.bottom());
            context.stroke();

            context.set_text_align("center");
            context.set_text_baseline("top");
            let slots = chart.labels.len();
            let stride = label_stride(slots, MAX_X_LABELS);
            for (index, label) in chart.labels.iter().enumerate().step_by(stride) {
                let x = x_position(index, slots, area);
                context
                    .fill_text(label, x, area.bottom() + 6.0)
                    .map_err(|_| AppError::Rendering("Failed to draw x label".to_string()))?;
            }
        }

        Ok(())
    }

    fn render_dataset(&self, context: &CanvasRenderingContext2d, dataset: &Dataset, points: &[Point]) {
        let Some(&(start_x, start_y)) = points.first() else {
            return;
        };

        context.set_stroke_style_str(dataset.color);
        context.set_line_width(dataset.style.stroke_width);
        context.begin_path();
        context.move_to(start_x, start_y);
        for ((cp1, cp2), &(x, y)) in control_points(points, dataset.style.tension)
            .into_iter()
            .zip(points.iter().skip(1))
        {
            context.bezier_curve_to(cp1.0, cp1.1, cp2.0, cp2.1, x, y);
        }
        context.stroke();

        if points.len() == 1 {
            // A single sample has no segment; mark it
            context.set_fill_style_str(dataset.color);
            context.begin_path();
            let _ = context.arc(start_x, start_y, dataset.style.stroke_width * 1.5, 0.0, std::f64::consts::TAU);
            context.fill();
        }
    }

    fn render_legend(&self, context: &CanvasRenderingContext2d, chart: &LineChart, canvas_width: f64) -> RenderingResult<()> {
        context.set_font(FONT);
        context.set_text_align("left");
        context.set_text_baseline("middle");

        let swatch = 12.0;
        let gap = 16.0;
        let widths: Vec<f64> = chart
            .datasets
            .iter()
            .map(|d| {
                context
                    .measure_text(&d.label)
                    .map(|m| m.width())
                    .unwrap_or(d.label.len() as f64 * 7.0)
            })
            .collect();
        let total: f64 = widths.iter().map(|w| swatch + 6.0 + w).sum::<f64>()
            + gap * widths.len().saturating_sub(1) as f64;

        let y = geometry::EDGE_PADDING + geometry::LEGEND_HEIGHT / 2.0;
        let mut x = ((canvas_width - total) / 2.0).max(geometry::EDGE_PADDING);
        for (dataset, width) in chart.datasets.iter().zip(widths) {
            context.set_fill_style_str(dataset.color);
            context.fill_rect(x, y - swatch / 2.0, swatch, swatch);
            context.set_fill_style_str(TEXT_COLOR);
            context
                .fill_text(&dataset.label, x + swatch + 6.0, y)
                .map_err(|_| AppError::Rendering("Failed to draw legend".to_string()))?;
            x += swatch + 6.0 + width + gap;
        }
        Ok(())
    }
}

impl ChartSurface for CanvasLineRenderer {
    fn release(&mut self) {
        match self.get_canvas_context() {
            Ok((canvas, context)) => {
                context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
            }
            Err(e) => get_logger().warn(
                LogComponent::Chart,
                &format!("Nothing to release: {}", e),
            ),
        }
    }

    fn draw(&mut self, chart: &LineChart) -> RenderingResult<()> {
        let (canvas, context) = self.get_canvas_context()?;
        if chart.options.responsive {
            Self::fit_to_layout(&canvas);
        }

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        context.clear_rect(0.0, 0.0, width, height);

        let area = PlotArea::new(width, height, chart.options.legend);
        let range = padded_range(chart.value_range().unwrap_or((0.0, 1.0)));

        self.render_axes(&context, chart, &area, range)?;

        let slots = chart.labels.len();
        for dataset in &chart.datasets {
            let points = project(&dataset.data, slots, range, &area);
            self.render_dataset(&context, dataset, &points);
        }

        if chart.options.legend && !chart.is_empty() {
            self.render_legend(&context, chart, width)?;
        }

        get_logger().debug(
            LogComponent::Chart,
            &format!("Rendered {} series over {} labels", chart.datasets.len(), slots),
        );

        Ok(())
    }
}
