use chrono::Local;

use super::crud::{CrudPage, Resource};
use super::forms::GoalForm;
use crate::errors::ClientError;
use crate::models::goal::{Goal, GoalPayload};
use crate::services::formatting::{format_currency, format_date, format_percent};
use crate::services::validation::{validate_goal, FormMode};

pub const GOALS_PATH: &str = "/api/goals";

/// Savings goals page: goal cards plus add/edit/delete.
pub type GoalsPage = CrudPage<GoalResource>;

/// One rendered goal card.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCard {
    pub goal: Goal,
    pub current: String,
    pub target: String,
    /// Progress bar fill, capped at 100.
    pub progress_width_pct: f64,
    /// e.g. `42.5% Complete`
    pub progress_label: String,
    /// Formatted deadline, when the goal has one.
    pub deadline: Option<String>,
}

impl GoalCard {
    pub fn new(goal: Goal, currency: &str) -> Self {
        let width = goal.progress_pct().min(100.0);
        Self {
            current: format_currency(goal.current_amount, currency),
            target: format_currency(goal.target_amount, currency),
            progress_width_pct: width,
            progress_label: format!("{} Complete", format_percent(width, 1)),
            deadline: goal
                .deadline
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(format_date),
            goal,
        }
    }
}

pub struct GoalResource;

impl Resource for GoalResource {
    type Record = Goal;
    type Form = GoalForm;
    type Payload = GoalPayload;
    type View = GoalCard;

    const PATH: &'static str = GOALS_PATH;
    const NOUN: &'static str = "goal";
    const TITLE: &'static str = "Goal";
    const EMPTY_MESSAGE: &'static str = "No savings goals found. Start by adding one!";
    const LOAD_FAILED_MESSAGE: &'static str = "Failed to load goals.";

    fn id(record: &Goal) -> i64 {
        record.id
    }

    fn validate(form: &GoalForm, mode: FormMode) -> Result<GoalPayload, ClientError> {
        validate_goal(form, mode, Local::now().date_naive())
    }

    fn form_from(record: &Goal) -> GoalForm {
        GoalForm::from_goal(record)
    }

    fn view(record: Goal, currency: &str) -> GoalCard {
        GoalCard::new(record, currency)
    }
}
