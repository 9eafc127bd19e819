use serde::{Deserialize, Serialize};

/// Chart flavours the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// One series of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_colors: Vec<String>,
    pub border_color: String,
    pub border_width: u32,
}

/// Everything a charting backend needs to draw a chart.
///
/// The core builds these; the renderer only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub legend_position: LegendPosition,
    /// Bar charts start their value axis at zero.
    pub begin_at_zero: bool,
}

/// A chart that is currently drawn on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    /// Monotonic per-slot id; a new id means the chart was recreated.
    pub id: u64,
    pub spec: ChartSpec,
}
