use chrono::NaiveDate;

use crate::errors::ClientError;
use crate::models::goal::GoalPayload;
use crate::models::transaction::{TransactionPayload, TransactionType};
use crate::pages::forms::{GoalForm, TransactionForm};

/// Whether a form creates a record or edits an existing one.
/// Only changes the wording of validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    fn suffix(&self) -> &'static str {
        match self {
            FormMode::Create => ".",
            FormMode::Update => " for update.",
        }
    }
}

/// Check a goal form and turn it into a request body.
///
/// `today` is the user's local date; deadlines before it are rejected.
pub fn validate_goal(
    form: &GoalForm,
    mode: FormMode,
    today: NaiveDate,
) -> Result<GoalPayload, ClientError> {
    let name = form.name.trim();
    let target_amount = parse_amount(&form.target_amount);

    let target_amount = match target_amount {
        Some(amount) if !name.is_empty() && amount > 0.0 => amount,
        _ => {
            return Err(ClientError::Validation(format!(
                "Goal name and valid target amount are required{}",
                mode.suffix()
            )))
        }
    };

    let current_amount = if form.current_amount.trim().is_empty() {
        0.0
    } else {
        match parse_amount(&form.current_amount) {
            Some(amount) if amount >= 0.0 => amount,
            _ => {
                return Err(ClientError::Validation(
                    "Current amount must be a non-negative number.".into(),
                ))
            }
        }
    };

    let deadline = match form.deadline.trim() {
        "" => None,
        raw => {
            let date = parse_form_date(raw)
                .ok_or_else(|| ClientError::Validation("Deadline must be a valid date.".into()))?;
            if date < today {
                return Err(ClientError::Validation("Deadline cannot be in the past.".into()));
            }
            Some(date.format("%Y-%m-%d").to_string())
        }
    };

    Ok(GoalPayload {
        name: name.to_string(),
        target_amount,
        current_amount,
        deadline,
    })
}

/// Check a transaction form and turn it into a request body.
pub fn validate_transaction(
    form: &TransactionForm,
    mode: FormMode,
) -> Result<TransactionPayload, ClientError> {
    let invalid = || {
        ClientError::Validation(format!(
            "Type, category, date, and a valid positive amount are required{}",
            mode.suffix()
        ))
    };

    let transaction_type: TransactionType =
        form.transaction_type.parse().map_err(|_| invalid())?;
    let category = form.category.trim();
    if category.is_empty() {
        return Err(invalid());
    }
    let amount = parse_amount(&form.amount)
        .filter(|amount| *amount > 0.0)
        .ok_or_else(invalid)?;
    let date = parse_form_date(form.date.trim()).ok_or_else(invalid)?;

    Ok(TransactionPayload {
        transaction_type,
        category: category.to_string(),
        amount,
        date: date.format("%Y-%m-%d").to_string(),
        description: form.description.trim().to_string(),
    })
}

/// Finite decimal number, surrounding whitespace allowed.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Date inputs submit `YYYY-MM-DD`; a trailing time part is ignored.
fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
