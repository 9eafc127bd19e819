use std::cmp::Reverse;

use super::crud::{CrudPage, Resource};
use super::forms::TransactionForm;
use crate::errors::ClientError;
use crate::models::transaction::{Transaction, TransactionPayload, TransactionType};
use crate::services::formatting::{format_currency, format_date, parse_date};
use crate::services::validation::{validate_transaction, FormMode};

pub const TRANSACTIONS_PATH: &str = "/api/transactions";

/// Transactions page: a table of transactions plus add/edit/delete.
pub type TransactionsPage = CrudPage<TransactionResource>;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub transaction: Transaction,
    pub date: String,
    /// `Income` / `Expense`
    pub type_label: String,
    pub category: String,
    pub amount: String,
    /// Description, or `-` when there is none.
    pub description: String,
    /// Drives the row styling.
    pub tone: TransactionType,
}

impl TransactionRow {
    pub fn new(transaction: Transaction, currency: &str) -> Self {
        Self {
            date: format_date(&transaction.date),
            type_label: transaction.transaction_type.to_string(),
            category: transaction.category.clone(),
            amount: format_currency(transaction.amount, currency),
            description: transaction
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "-".to_string()),
            tone: transaction.transaction_type,
            transaction,
        }
    }
}

pub struct TransactionResource;

impl Resource for TransactionResource {
    type Record = Transaction;
    type Form = TransactionForm;
    type Payload = TransactionPayload;
    type View = TransactionRow;

    const PATH: &'static str = TRANSACTIONS_PATH;
    const NOUN: &'static str = "transaction";
    const TITLE: &'static str = "Transaction";
    const EMPTY_MESSAGE: &'static str = "No transactions found. Add one to get started!";
    const LOAD_FAILED_MESSAGE: &'static str = "Failed to load transactions.";

    fn id(record: &Transaction) -> i64 {
        record.id
    }

    fn validate(form: &TransactionForm, mode: FormMode) -> Result<TransactionPayload, ClientError> {
        validate_transaction(form, mode)
    }

    fn form_from(record: &Transaction) -> TransactionForm {
        TransactionForm::from_transaction(record)
    }

    /// Newest first; rows with unreadable dates go last.
    fn order(records: &mut [Transaction]) {
        records.sort_by_key(|t| Reverse(parse_date(&t.date)));
    }

    fn view(record: Transaction, currency: &str) -> TransactionRow {
        TransactionRow::new(record, currency)
    }
}
