use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::goal::Goal;
use super::transaction::Transaction;

/// Aggregate snapshot returned by `GET /api/dashboard_data`.
///
/// Every figure is computed server-side; the client only renders it.
/// The backend has shipped both `net_balance`/`goal_summary` and
/// `balance`/`goals_summary`, so both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub total_income: f64,

    #[serde(default)]
    pub total_expenses: f64,

    #[serde(default, alias = "balance")]
    pub net_balance: f64,

    #[serde(default)]
    pub recent_transactions: Vec<Transaction>,

    #[serde(default, alias = "goals_summary")]
    pub goal_summary: Vec<Goal>,

    #[serde(default)]
    pub spending_by_category: HashMap<String, f64>,
}

impl DashboardData {
    /// Spending categories ordered by amount, largest first (ties by name).
    #[must_use]
    pub fn spending_sorted(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = self
            .spending_by_category
            .iter()
            .map(|(category, amount)| (category.clone(), *amount))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}
