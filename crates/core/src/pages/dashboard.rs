use super::PageContext;
use crate::api::RequestOptions;
use crate::errors::ClientError;
use crate::models::dashboard::DashboardData;
use crate::models::goal::Goal;
use crate::models::transaction::{Transaction, TransactionType};
use crate::render::chart_slot::ChartSlot;
use crate::render::container::{Container, ListEntry};
use crate::services::chart_service::ChartService;
use crate::services::formatting::{format_currency, format_date, format_percent};

pub const DASHBOARD_PATH: &str = "/api/dashboard_data";

/// How many recent transactions the dashboard lists.
pub const RECENT_LIMIT: usize = 5;

pub const LOAD_FAILED_NOTICE: &str = "Could not load dashboard data. Please try again later.";
pub const SUMMARY_ERROR: &str = "Error loading summary.";
pub const NO_RECENT_TRANSACTIONS: &str = "No recent transactions.";
pub const NO_GOALS: &str = "No savings goals set up yet.";
pub const NO_SPENDING_DATA: &str = "No spending data available for chart.";

/// Styling of the net balance figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    Positive,
    Negative,
}

/// The three headline figures.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub total_income: String,
    pub total_expenses: String,
    pub net_balance: String,
    pub balance_tone: BalanceTone,
}

impl SummaryMetrics {
    pub fn new(data: &DashboardData, currency: &str) -> Self {
        Self {
            total_income: format_currency(data.total_income, currency),
            total_expenses: format_currency(data.total_expenses, currency),
            net_balance: format_currency(data.net_balance, currency),
            balance_tone: if data.net_balance < 0.0 {
                BalanceTone::Negative
            } else {
                BalanceTone::Positive
            },
        }
    }
}

/// A line in the "recent transactions" list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentTransactionItem {
    /// `Groceries (Jan 5, 2024)`
    pub label: String,
    pub amount: String,
    pub tone: TransactionType,
    /// Description shown on hover.
    pub tooltip: Option<String>,
}

impl RecentTransactionItem {
    pub fn new(tx: &Transaction, currency: &str) -> Self {
        Self {
            label: format!("{} ({})", tx.category, format_date(&tx.date)),
            amount: format_currency(tx.amount, currency),
            tone: tx.transaction_type,
            tooltip: tx.description.clone().filter(|d| !d.is_empty()),
        }
    }
}

/// A goal in the dashboard's compact goal summary.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalSummaryItem {
    pub name: String,
    /// `$250.00 / $1,000.00`
    pub amounts: String,
    /// Bar fill, capped at 100 and rounded to two decimals.
    pub progress_width_pct: f64,
    /// Whole-percent label, not capped (`120%` for an overshot goal).
    pub progress_label: String,
    pub deadline: Option<String>,
}

impl GoalSummaryItem {
    pub fn new(goal: &Goal, currency: &str) -> Self {
        let progress = goal.progress_pct();
        Self {
            name: goal.name.clone(),
            amounts: format!(
                "{} / {}",
                format_currency(goal.current_amount, currency),
                format_currency(goal.target_amount, currency)
            ),
            progress_width_pct: (progress.min(100.0) * 100.0).round() / 100.0,
            progress_label: format_percent(progress, 0),
            deadline: goal
                .deadline
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(format_date),
        }
    }
}

/// Chart handles owned by the dashboard. Replaced wholesale on every render.
#[derive(Debug)]
pub struct DashboardState {
    pub spending_chart: ChartSlot,
    pub income_expense_chart: ChartSlot,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            spending_chart: ChartSlot::new("spending"),
            income_expense_chart: ChartSlot::new("income-expense"),
        }
    }
}

/// Dashboard: headline figures, recent transactions, goal summary, charts.
pub struct DashboardPage {
    ctx: PageContext,
    charts: ChartService,
    state: DashboardState,
    summary: Container<ListEntry<SummaryMetrics>>,
    recent: Container<ListEntry<RecentTransactionItem>>,
    goals: Container<ListEntry<GoalSummaryItem>>,
}

impl DashboardPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            charts: ChartService::new(),
            state: DashboardState::default(),
            summary: Container::new(),
            recent: Container::new(),
            goals: Container::new(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> &Container<ListEntry<SummaryMetrics>> {
        &self.summary
    }

    #[must_use]
    pub fn recent_transactions(&self) -> &Container<ListEntry<RecentTransactionItem>> {
        &self.recent
    }

    #[must_use]
    pub fn goal_summary(&self) -> &Container<ListEntry<GoalSummaryItem>> {
        &self.goals
    }

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub async fn init(&mut self) -> Result<(), ClientError> {
        self.load().await
    }

    /// Fetch the snapshot and redraw every section.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let fetched = {
            let _spinner = self.ctx.spinner.guard();
            self.ctx
                .api
                .request(DASHBOARD_PATH, RequestOptions::get())
                .await
        };
        let result = fetched.map_err(|e| self.fail(e))?;

        if let Some(message) = result.error_message() {
            tracing::warn!("Dashboard endpoint reported an error: {message}");
            self.ctx.notifier.error(message);
            self.summary
                .replace_all([ListEntry::Error(SUMMARY_ERROR.to_string())]);
            return Ok(());
        }

        let data = match serde_json::from_value::<Option<DashboardData>>(result.into_json()) {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::debug!("Dashboard endpoint returned no data");
                return Ok(());
            }
            Err(e) => {
                let err = ClientError::from(e);
                self.ctx.notifier.error(format!("API Error: {err}"));
                return Err(self.fail(err));
            }
        };

        let currency = self.ctx.currency.as_str();
        self.summary
            .replace_all([ListEntry::Item(SummaryMetrics::new(&data, currency))]);
        render_recent_transactions(&self.recent, &data.recent_transactions, currency);
        render_goal_summary(&self.goals, &data.goal_summary, currency);
        render_charts(&mut self.state, &self.charts, &data);
        Ok(())
    }

    /// Mark the summary as failed and tell the user; hands `e` back.
    fn fail(&self, e: ClientError) -> ClientError {
        tracing::warn!("Failed to load dashboard data: {e}");
        self.ctx.notifier.error(LOAD_FAILED_NOTICE);
        self.summary
            .replace_all([ListEntry::Error(SUMMARY_ERROR.to_string())]);
        e
    }
}

fn render_recent_transactions(
    target: &Container<ListEntry<RecentTransactionItem>>,
    transactions: &[Transaction],
    currency: &str,
) {
    if transactions.is_empty() {
        target.replace_all([ListEntry::Empty(NO_RECENT_TRANSACTIONS.to_string())]);
        return;
    }
    target.replace_all(
        transactions
            .iter()
            .take(RECENT_LIMIT)
            .map(|tx| ListEntry::Item(RecentTransactionItem::new(tx, currency))),
    );
}

fn render_goal_summary(
    target: &Container<ListEntry<GoalSummaryItem>>,
    goals: &[Goal],
    currency: &str,
) {
    if goals.is_empty() {
        target.replace_all([ListEntry::Empty(NO_GOALS.to_string())]);
        return;
    }
    target.replace_all(
        goals
            .iter()
            .map(|goal| ListEntry::Item(GoalSummaryItem::new(goal, currency))),
    );
}

/// Redraw both charts; each slot destroys its previous instance first.
pub fn render_charts(state: &mut DashboardState, charts: &ChartService, data: &DashboardData) {
    match charts.spending_breakdown(data) {
        Some(spec) => {
            state.spending_chart.replace(spec);
        }
        None => state.spending_chart.show_placeholder(NO_SPENDING_DATA),
    }
    state
        .income_expense_chart
        .replace(charts.income_vs_expenses(data.total_income, data.total_expenses));
}
