use serde::{Deserialize, Serialize};

/// A savings goal as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,

    pub name: String,

    /// Amount to reach; the backend guarantees it is positive.
    pub target_amount: f64,

    #[serde(default)]
    pub current_amount: f64,

    /// Optional ISO date (`YYYY-MM-DD`).
    #[serde(default)]
    pub deadline: Option<String>,
}

impl Goal {
    /// Progress towards the target in percent. Not capped at 100.
    #[must_use]
    pub fn progress_pct(&self) -> f64 {
        goal_progress(self.current_amount, self.target_amount)
    }

    /// Deadline date part for a date input, or empty when unset.
    #[must_use]
    pub fn deadline_input_value(&self) -> String {
        self.deadline
            .as_deref()
            .and_then(|d| d.split('T').next())
            .unwrap_or_default()
            .to_string()
    }
}

/// Display-only progress derivation; 0 when the target is not positive.
#[must_use]
pub fn goal_progress(current: f64, target: f64) -> f64 {
    if target > 0.0 {
        current / target * 100.0
    } else {
        0.0
    }
}

/// Request body for `POST /api/goals` and `PUT /api/goals/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalPayload {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<String>,
}
