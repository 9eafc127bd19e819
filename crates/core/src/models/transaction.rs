use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// Direction of money movement for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in (salary, refunds, ...)
    Income,
    /// Money going out
    Expense,
}

impl TransactionType {
    /// Wire representation (`"income"` / `"expense"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ClientError::Validation(format!(
                "Invalid transaction type: {other}"
            ))),
        }
    }
}

/// A transaction as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub category: String,

    /// Always positive; the direction comes from `transaction_type`.
    pub amount: f64,

    /// ISO date (`YYYY-MM-DD`), possibly with a time component.
    pub date: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    /// Date part only, suitable for a date input (`2024-03-01T10:00:00` → `2024-03-01`).
    #[must_use]
    pub fn date_input_value(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }
}

/// Request body for `POST /api/transactions` and `PUT /api/transactions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
}
