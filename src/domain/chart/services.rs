use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use super::value_objects::{BarPoint, LinePoint, PieSlice};
use crate::domain::analytics::MonthlyRevenue;
use crate::domain::sales::Category;

/// Jan..Dec line series
pub fn monthly_line_series(by_month: &MonthlyRevenue) -> Vec<LinePoint> {
    by_month.iter().map(|(month, revenue)| LinePoint { x: month.to_string(), y: revenue }).collect()
}

pub fn category_bar_series(by_category: &BTreeMap<Category, f64>) -> Vec<BarPoint> {
    by_category
        .iter()
        .map(|(category, revenue)| BarPoint { label: category.to_string(), value: *revenue })
        .collect()
}

pub fn category_pie_slices(by_category: &BTreeMap<Category, f64>) -> Vec<PieSlice> {
    let total: f64 = by_category.values().sum();
    by_category
        .iter()
        .map(|(category, revenue)| PieSlice {
            label: category.to_string(),
            value: *revenue,
            share: if total > 0.0 { revenue / total * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Pixel rectangle for one bar, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Plot area inside the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn inset(canvas_width: f64, canvas_height: f64, padding: f64) -> Self {
        Self {
            left: padding,
            top: padding,
            width: (canvas_width - 2.0 * padding).max(0.0),
            height: (canvas_height - 2.0 * padding).max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Equal-width slots with a gap; the largest value fills the plot height and
/// negative or all-zero data yields zero-height bars.
pub fn bar_layout(points: &[BarPoint], area: PlotArea, gap_ratio: f64) -> Vec<BarGeometry> {
    if points.is_empty() {
        return Vec::new();
    }
    let max_value = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let slot = area.width / points.len() as f64;
    let gap = slot * gap_ratio.clamp(0.0, 0.9);

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = if max_value > 0.0 { point.value.max(0.0) / max_value * area.height } else { 0.0 };
            BarGeometry {
                x: area.left + i as f64 * slot + gap / 2.0,
                y: area.bottom() - height,
                width: slot - gap,
                height,
            }
        })
        .collect()
}

/// Canvas coordinate of one line vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Vertices spread evenly across the plot width, first and last on the edges.
/// Scaled like [`bar_layout`]: the largest value touches the top.
pub fn line_layout(points: &[LinePoint], area: PlotArea) -> Vec<PlotPoint> {
    let max_value = points.iter().map(|p| p.y).fold(0.0_f64, f64::max);
    let step = match points.len() {
        0 | 1 => 0.0,
        n => area.width / (n - 1) as f64,
    };

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if points.len() == 1 { area.left + area.width / 2.0 } else { area.left + i as f64 * step };
            let height = if max_value > 0.0 { point.y.max(0.0) / max_value * area.height } else { 0.0 };
            PlotPoint { x, y: area.bottom() - height }
        })
        .collect()
}

/// Arc of one pie slice in radians, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSegment {
    pub start_angle: f64,
    pub end_angle: f64,
}

pub fn pie_segments(slices: &[PieSlice]) -> Vec<PieSegment> {
    let mut angle = -FRAC_PI_2;
    slices
        .iter()
        .map(|slice| {
            let start_angle = angle;
            angle += slice.share.max(0.0) / 100.0 * TAU;
            PieSegment { start_angle, end_angle: angle }
        })
        .collect()
}
