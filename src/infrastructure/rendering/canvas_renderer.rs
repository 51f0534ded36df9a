use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::chart::{
    BarGeometry, BarPoint, ChartOptions, ChartSeries, ChartType, LinePoint, PieSlice, PlotArea, bar_layout,
    line_layout, pie_segments,
};
use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::log_debug;
use crate::time_utils::format_currency;

const PADDING: f64 = 40.0;
const BAR_GAP_RATIO: f64 = 0.2;
const POINT_RADIUS: f64 = 3.0;
const AXIS_COLOR: &str = "#8a94a6";
const LABEL_FONT: &str = "12px sans-serif";
const TITLE_FONT: &str = "bold 14px sans-serif";

/// Canvas 2D chart renderer for line, bar and pie series
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> Self {
        Self { canvas, width, height }
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, AppError> {
        self.canvas.set_width(self.width);
        self.canvas.set_height(self.height);
        self.canvas
            .get_context("2d")
            .map_err(|e| AppError::BrowserError(format!("2D context: {:?}", e)))?
            .ok_or_else(|| AppError::BrowserError("2D context not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::BrowserError("Failed to cast to 2D context".to_string()))
    }

    /// Clears the canvas and draws `series` in the style its chart type calls for
    pub fn render(&self, series: &ChartSeries, options: &ChartOptions) -> Result<(), AppError> {
        let ctx = self.context()?;
        let (width, height) = (self.width as f64, self.height as f64);
        ctx.clear_rect(0.0, 0.0, width, height);
        let area = PlotArea::inset(width, height, PADDING);

        if series.is_empty() {
            self.render_no_data_message(&ctx, area)?;
        } else {
            match series {
                ChartSeries::Line(points) => self.render_line(&ctx, points, area, options)?,
                ChartSeries::Bar(points) => self.render_bars(&ctx, points, area, options)?,
                ChartSeries::Pie(slices) => self.render_pie(&ctx, slices, area, options)?,
            }
        }
        if series.chart_type() != ChartType::Pie {
            self.render_axes(&ctx, area);
            self.render_axis_labels(&ctx, area, options)?;
        }
        if let Some(title) = &options.title {
            self.render_title(&ctx, title)?;
        }

        log_debug!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "Rendered {} chart with {} entries",
            series.chart_type(),
            series.len()
        );
        Ok(())
    }

    fn render_line(
        &self,
        ctx: &CanvasRenderingContext2d,
        points: &[LinePoint],
        area: PlotArea,
        options: &ChartOptions,
    ) -> Result<(), AppError> {
        let vertices = line_layout(points, area);
        let color = options.color_at(0).to_css();

        ctx.set_stroke_style_str(&color);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, vertex) in vertices.iter().enumerate() {
            if i == 0 {
                ctx.move_to(vertex.x, vertex.y);
            } else {
                ctx.line_to(vertex.x, vertex.y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style_str(&color);
        for vertex in &vertices {
            ctx.begin_path();
            ctx.arc(vertex.x, vertex.y, POINT_RADIUS, 0.0, TAU).map_err(canvas_error)?;
            ctx.fill();
        }

        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        for (point, vertex) in points.iter().zip(&vertices) {
            ctx.fill_text(&point.x, vertex.x, area.bottom() + 16.0).map_err(canvas_error)?;
        }
        Ok(())
    }

    fn render_bars(
        &self,
        ctx: &CanvasRenderingContext2d,
        points: &[BarPoint],
        area: PlotArea,
        options: &ChartOptions,
    ) -> Result<(), AppError> {
        let bars = bar_layout(points, area, BAR_GAP_RATIO);
        for (i, (point, bar)) in points.iter().zip(&bars).enumerate() {
            self.render_bar(ctx, point, bar, &options.color_at(i).to_css())?;
        }
        Ok(())
    }

    fn render_bar(
        &self,
        ctx: &CanvasRenderingContext2d,
        point: &BarPoint,
        bar: &BarGeometry,
        color: &str,
    ) -> Result<(), AppError> {
        ctx.set_fill_style_str(color);
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);

        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        let center = bar.x + bar.width / 2.0;
        ctx.fill_text(&point.label, center, bar.y + bar.height + 16.0).map_err(canvas_error)?;
        if bar.height > 0.0 {
            ctx.fill_text(&format_currency(point.value), center, bar.y - 4.0).map_err(canvas_error)?;
        }
        Ok(())
    }

    fn render_pie(
        &self,
        ctx: &CanvasRenderingContext2d,
        slices: &[PieSlice],
        area: PlotArea,
        options: &ChartOptions,
    ) -> Result<(), AppError> {
        let radius = area.width.min(area.height) / 2.0;
        let (cx, cy) = (area.left + radius, area.top + area.height / 2.0);
        let legend_x = cx + radius + 24.0;

        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("left");
        for (i, (slice, segment)) in slices.iter().zip(pie_segments(slices)).enumerate() {
            let color = options.color_at(i).to_css();
            ctx.set_fill_style_str(&color);
            ctx.begin_path();
            ctx.move_to(cx, cy);
            ctx.arc(cx, cy, radius, segment.start_angle, segment.end_angle).map_err(canvas_error)?;
            ctx.close_path();
            ctx.fill();

            let legend_y = area.top + 8.0 + i as f64 * 18.0;
            ctx.fill_rect(legend_x, legend_y - 9.0, 10.0, 10.0);
            ctx.set_fill_style_str(AXIS_COLOR);
            ctx.fill_text(&format!("{} {:.1}%", slice.label, slice.share), legend_x + 16.0, legend_y)
                .map_err(canvas_error)?;
        }
        Ok(())
    }

    fn render_axes(&self, ctx: &CanvasRenderingContext2d, area: PlotArea) {
        ctx.set_stroke_style_str(AXIS_COLOR);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(area.left, area.top);
        ctx.line_to(area.left, area.bottom());
        ctx.line_to(area.left + area.width, area.bottom());
        ctx.stroke();
    }

    fn render_axis_labels(
        &self,
        ctx: &CanvasRenderingContext2d,
        area: PlotArea,
        options: &ChartOptions,
    ) -> Result<(), AppError> {
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        if let Some(label) = &options.x_axis_label {
            ctx.fill_text(label, area.left + area.width / 2.0, area.bottom() + PADDING - 6.0)
                .map_err(canvas_error)?;
        }
        if let Some(label) = &options.y_axis_label {
            ctx.save();
            ctx.translate(12.0, area.top + area.height / 2.0).map_err(canvas_error)?;
            ctx.rotate(-TAU / 4.0).map_err(canvas_error)?;
            let drawn = ctx.fill_text(label, 0.0, 0.0).map_err(canvas_error);
            ctx.restore();
            drawn?;
        }
        Ok(())
    }

    fn render_no_data_message(&self, ctx: &CanvasRenderingContext2d, area: PlotArea) -> Result<(), AppError> {
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        ctx.fill_text("No data for the current filters", area.left + area.width / 2.0, area.top + area.height / 2.0)
            .map_err(canvas_error)
    }

    fn render_title(&self, ctx: &CanvasRenderingContext2d, title: &str) -> Result<(), AppError> {
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_font(TITLE_FONT);
        ctx.set_text_align("left");
        ctx.fill_text(title, PADDING, PADDING / 2.0).map_err(canvas_error)
    }
}

fn canvas_error(e: JsValue) -> AppError {
    AppError::BrowserError(format!("canvas: {:?}", e))
}
