use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use budget_client_core::errors::ClientError;
use budget_client_core::models::settings::ClientSettings;
use budget_client_core::pages::forms::{GoalForm, TransactionForm};
use budget_client_core::pages::goals::GoalsPage;
use budget_client_core::pages::transactions::TransactionsPage;
use budget_client_core::pages::Outcome;
use budget_client_core::render::dialog::Confirm;
use budget_client_core::BudgetClient;

mod view;

/// Terminal client for the budget dashboard API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Backend origin (overrides BUDGET_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Currency code used to render amounts (overrides BUDGET_CURRENCY).
    #[arg(long)]
    currency: Option<String>,

    /// Answer "yes" to delete confirmations.
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show totals, recent transactions, goal progress and chart data.
    Dashboard,
    /// Manage savings goals.
    Goals {
        #[command(subcommand)]
        action: GoalAction,
    },
    /// Manage transactions.
    Transactions {
        #[command(subcommand)]
        action: TransactionAction,
    },
}

#[derive(Debug, Subcommand)]
enum GoalAction {
    List,
    Add(GoalFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: GoalUpdate,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Args)]
struct GoalFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    target: String,
    #[arg(long, default_value = "")]
    current: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    deadline: String,
}

#[derive(Debug, Args)]
struct GoalUpdate {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    target: Option<String>,
    #[arg(long)]
    current: Option<String>,
    #[arg(long)]
    deadline: Option<String>,
}

#[derive(Debug, Subcommand)]
enum TransactionAction {
    List,
    Add(TransactionFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: TransactionUpdate,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Args)]
struct TransactionFields {
    /// income or expense
    #[arg(long = "type")]
    kind: String,
    #[arg(long)]
    category: String,
    #[arg(long)]
    amount: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    #[arg(long, default_value = "")]
    description: String,
}

#[derive(Debug, Args)]
struct TransactionUpdate {
    #[arg(long = "type")]
    kind: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    description: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&client, cli.command, confirmer(cli.yes)).await;
    view::print_notifications(client.document());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> Result<BudgetClient, ClientError> {
    let mut settings = ClientSettings::from_env()?;
    if let Some(url) = &cli.api_url {
        settings.base_url = url.clone();
    }
    if let Some(currency) = &cli.currency {
        settings.currency = currency.to_uppercase();
    }
    BudgetClient::new(settings)
}

fn confirmer(assume_yes: bool) -> Arc<dyn Confirm> {
    if assume_yes {
        return Arc::new(|_: &str| true);
    }
    Arc::new(|question: &str| {
        print!("{question} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    })
}

async fn run(
    client: &BudgetClient,
    command: Command,
    confirm: Arc<dyn Confirm>,
) -> Result<(), ClientError> {
    match command {
        Command::Dashboard => {
            let mut page = client.dashboard_page();
            let result = page.init().await;
            view::print_dashboard(&page);
            result
        }
        Command::Goals { action } => {
            let mut page = client.goals_page(confirm);
            run_goals(&mut page, action).await
        }
        Command::Transactions { action } => {
            let mut page = client.transactions_page(confirm);
            run_transactions(&mut page, action).await
        }
    }
}

async fn run_goals(page: &mut GoalsPage, action: GoalAction) -> Result<(), ClientError> {
    page.init().await?;

    let outcome = match action {
        GoalAction::List => None,
        GoalAction::Add(fields) => {
            *page.add_form_mut() = GoalForm {
                name: fields.name,
                target_amount: fields.target,
                current_amount: fields.current,
                deadline: fields.deadline,
            };
            Some(page.submit_add().await?)
        }
        GoalAction::Update { id, fields } => {
            let goal = page
                .list()
                .snapshot()
                .into_iter()
                .filter_map(|entry| entry.item().map(|card| card.goal.clone()))
                .find(|goal| goal.id == id)
                .ok_or_else(|| ClientError::Validation(format!("Goal {id} not found.")))?;
            page.open_edit(&goal);
            let form = page.edit_form_mut();
            apply(&mut form.name, fields.name);
            apply(&mut form.target_amount, fields.target);
            apply(&mut form.current_amount, fields.current);
            apply(&mut form.deadline, fields.deadline);
            Some(page.submit_edit().await?)
        }
        GoalAction::Delete { id } => Some(page.delete(id).await?),
    };

    report(outcome);
    view::print_goals(page.list());
    Ok(())
}

async fn run_transactions(
    page: &mut TransactionsPage,
    action: TransactionAction,
) -> Result<(), ClientError> {
    page.init().await?;

    let outcome = match action {
        TransactionAction::List => None,
        TransactionAction::Add(fields) => {
            *page.add_form_mut() = TransactionForm {
                transaction_type: fields.kind,
                category: fields.category,
                amount: fields.amount,
                date: fields.date,
                description: fields.description,
            };
            Some(page.submit_add().await?)
        }
        TransactionAction::Update { id, fields } => {
            let transaction = page
                .list()
                .snapshot()
                .into_iter()
                .filter_map(|entry| entry.item().map(|row| row.transaction.clone()))
                .find(|tx| tx.id == id)
                .ok_or_else(|| ClientError::Validation(format!("Transaction {id} not found.")))?;
            page.open_edit(&transaction);
            let form = page.edit_form_mut();
            apply(&mut form.transaction_type, fields.kind);
            apply(&mut form.category, fields.category);
            apply(&mut form.amount, fields.amount);
            apply(&mut form.date, fields.date);
            apply(&mut form.description, fields.description);
            Some(page.submit_edit().await?)
        }
        TransactionAction::Delete { id } => Some(page.delete(id).await?),
    };

    report(outcome);
    view::print_transactions(page.list());
    Ok(())
}

fn apply(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn report(outcome: Option<Outcome>) {
    match outcome {
        Some(Outcome::Saved { id }) => tracing::info!("Saved record {id}"),
        Some(Outcome::Deleted { message }) => tracing::info!("{message}"),
        Some(Outcome::Cancelled) => println!("Cancelled."),
        Some(Outcome::NothingToDo) | None => {}
    }
}
