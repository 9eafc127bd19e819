use crate::models::chart::{ChartDataset, ChartKind, ChartSpec, LegendPosition};
use crate::models::dashboard::DashboardData;

/// Colors assigned to spending categories, in order.
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#007bff", "#dc3545", "#ffc107", "#28a745", "#17a2b8", "#6c757d", "#f8f9fa", "#343a40",
];

/// Builds chart specs from dashboard data.
///
/// The core computes the series; the renderer only draws them.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Doughnut chart of spending per category, largest first.
    /// `None` when there is nothing to draw.
    pub fn spending_breakdown(&self, data: &DashboardData) -> Option<ChartSpec> {
        let entries = data.spending_sorted();
        if entries.is_empty() {
            return None;
        }

        let (labels, values): (Vec<String>, Vec<f64>) = entries.into_iter().unzip();
        let colors = CATEGORY_PALETTE
            .iter()
            .cycle()
            .take(labels.len())
            .map(|c| c.to_string())
            .collect();

        Some(ChartSpec {
            kind: ChartKind::Doughnut,
            title: "Spending Breakdown".into(),
            labels,
            datasets: vec![ChartDataset {
                label: "Spending by Category".into(),
                data: values,
                background_colors: colors,
                border_color: "#fff".into(),
                border_width: 2,
            }],
            legend_position: LegendPosition::Bottom,
            begin_at_zero: false,
        })
    }

    /// Bar chart comparing total income with total expenses.
    pub fn income_vs_expenses(&self, total_income: f64, total_expenses: f64) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Bar,
            title: "Income vs. Expenses".into(),
            labels: vec!["Financial Overview".into()],
            datasets: vec![
                ChartDataset {
                    label: "Total Income".into(),
                    data: vec![total_income],
                    background_colors: vec!["rgba(0, 123, 255, 0.7)".into()],
                    border_color: "rgba(0, 123, 255, 1)".into(),
                    border_width: 1,
                },
                ChartDataset {
                    label: "Total Expenses".into(),
                    data: vec![total_expenses],
                    background_colors: vec!["rgba(220, 53, 69, 0.7)".into()],
                    border_color: "rgba(220, 53, 69, 1)".into(),
                    border_width: 1,
                },
            ],
            legend_position: LegendPosition::Top,
            begin_at_zero: true,
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
