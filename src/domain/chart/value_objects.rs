use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum ChartType {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    #[serde(rename = "line")]
    Line,
    #[display(fmt = "Bar")]
    #[strum(serialize = "bar")]
    #[serde(rename = "bar")]
    Bar,
    #[display(fmt = "Pie")]
    #[strum(serialize = "pie")]
    #[serde(rename = "pie")]
    Pie,
}

/// One point of a line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: String,
    pub y: f64,
}

/// One bar of a bar series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
}

/// One slice of a pie; `share` is a percentage of the pie total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub share: f64,
}

/// Data for one chart; the variant decides how it is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartSeries {
    Line(Vec<LinePoint>),
    Bar(Vec<BarPoint>),
    Pie(Vec<PieSlice>),
}

impl ChartSeries {
    pub fn chart_type(&self) -> ChartType {
        match self {
            Self::Line(_) => ChartType::Line,
            Self::Bar(_) => ChartType::Bar,
            Self::Pie(_) => ChartType::Pie,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Line(points) => points.len(),
            Self::Bar(points) => points.len(),
            Self::Pie(slices) => slices.len(),
        }
    }

    /// A pie whose slices are all zero has nothing to draw either
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Pie(slices) => slices.iter().all(|slice| slice.value <= 0.0),
            _ => self.len() == 0,
        }
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self { r: ((hex >> 16) & 0xFF) as u8, g: ((hex >> 8) & 0xFF) as u8, b: (hex & 0xFF) as u8 }
    }

    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// `#rrggbb` for canvas fill styles and inline CSS
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

/// Series palette, cycled when there are more points than colors
pub const PALETTE: [Color; 5] = [
    Color::from_hex(0x4e79a7),
    Color::from_hex(0xf28e2b),
    Color::from_hex(0x59a14f),
    Color::from_hex(0xe15759),
    Color::from_hex(0x76b7b2),
];

/// Presentation options shared by all chart kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub colors: Vec<Color>,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            x_axis_label: None,
            y_axis_label: None,
            colors: PALETTE.to_vec(),
            height: 300,
        }
    }
}

impl ChartOptions {
    pub fn titled(title: &str) -> Self {
        Self { title: Some(title.to_string()), ..Self::default() }
    }

    pub fn with_axis_labels(self, x_axis_label: &str, y_axis_label: &str) -> Self {
        Self {
            x_axis_label: Some(x_axis_label.to_string()),
            y_axis_label: Some(y_axis_label.to_string()),
            ..self
        }
    }

    pub fn color_at(&self, index: usize) -> Color {
        match self.colors.len() {
            0 => PALETTE[index % PALETTE.len()],
            n => self.colors[index % n],
        }
    }
}
