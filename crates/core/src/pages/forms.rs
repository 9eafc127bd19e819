use crate::models::goal::Goal;
use crate::models::transaction::Transaction;
use crate::services::formatting::format_amount_input;

/// Raw values of the add/edit goal form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalForm {
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    /// `YYYY-MM-DD` or empty.
    pub deadline: String,
}

impl GoalForm {
    /// Prefill from an existing goal (edit dialog).
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: format_amount_input(goal.target_amount),
            current_amount: format_amount_input(goal.current_amount),
            deadline: goal.deadline_input_value(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raw values of the add/edit transaction form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    /// `income` or `expense`.
    pub transaction_type: String,
    pub category: String,
    pub amount: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub description: String,
}

impl TransactionForm {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            transaction_type: transaction.transaction_type.as_str().to_string(),
            category: transaction.category.clone(),
            amount: format_amount_input(transaction.amount),
            date: transaction.date_input_value().to_string(),
            description: transaction.description.clone().unwrap_or_default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
