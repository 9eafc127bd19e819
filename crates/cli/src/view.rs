//! Plain-text rendering of the page containers.

use budget_client_core::models::chart::ChartInstance;
use budget_client_core::notifications::Document;
use budget_client_core::pages::dashboard::{BalanceTone, DashboardPage};
use budget_client_core::pages::goals::GoalCard;
use budget_client_core::pages::transactions::TransactionRow;
use budget_client_core::render::container::{Container, ListEntry};

pub fn print_notifications(document: &Document) {
    // Stored newest first; print in the order they happened.
    for node in document.notifications().iter().rev() {
        let n = &node.notification;
        eprintln!("[{}] {}", n.severity.as_str().to_uppercase(), n.message);
    }
}

pub fn print_dashboard(page: &DashboardPage) {
    for entry in page.summary().snapshot() {
        match entry {
            ListEntry::Item(metrics) => {
                let marker = match metrics.balance_tone {
                    BalanceTone::Positive => "+",
                    BalanceTone::Negative => "!",
                };
                println!("Income:   {}", metrics.total_income);
                println!("Expenses: {}", metrics.total_expenses);
                println!("Balance:  {} {marker}", metrics.net_balance);
            }
            other => print_message(&other),
        }
    }

    println!("\nRecent transactions");
    for entry in page.recent_transactions().snapshot() {
        match entry {
            ListEntry::Item(item) => {
                println!("  {:<40} {:>14}  {}", item.label, item.amount, item.tone.as_str());
            }
            other => print_message(&other),
        }
    }

    println!("\nSavings goals");
    for entry in page.goal_summary().snapshot() {
        match entry {
            ListEntry::Item(goal) => {
                println!(
                    "  {:<24} {:<28} {:>5} {}",
                    goal.name,
                    goal.amounts,
                    goal.progress_label,
                    progress_bar(goal.progress_width_pct)
                );
                if let Some(deadline) = goal.deadline {
                    println!("  {:<24} Deadline: {deadline}", "");
                }
            }
            other => print_message(&other),
        }
    }

    let state = page.state();
    println!("\nSpending by category");
    match (state.spending_chart.current(), state.spending_chart.placeholder()) {
        (Some(chart), _) => print_chart(chart),
        (None, Some(message)) => println!("  {message}"),
        (None, None) => {}
    }
    if let Some(chart) = state.income_expense_chart.current() {
        println!();
        println!("{}", chart.spec.title);
        print_chart(chart);
    }
}

pub fn print_goals(list: &Container<ListEntry<GoalCard>>) {
    for entry in list.snapshot() {
        match entry {
            ListEntry::Item(card) => {
                println!(
                    "#{:<4} {:<24} {} / {}  {} {}",
                    card.goal.id,
                    card.goal.name,
                    card.current,
                    card.target,
                    progress_bar(card.progress_width_pct),
                    card.progress_label
                );
                if let Some(deadline) = card.deadline {
                    println!("      Deadline: {deadline}");
                }
            }
            other => print_message(&other),
        }
    }
}

pub fn print_transactions(list: &Container<ListEntry<TransactionRow>>) {
    for entry in list.snapshot() {
        match entry {
            ListEntry::Item(row) => println!(
                "#{:<4} {:<13} {:<8} {:<18} {:>14}  {}",
                row.transaction.id,
                row.date,
                row.type_label,
                row.category,
                row.amount,
                row.description
            ),
            other => print_message(&other),
        }
    }
}

fn print_chart(chart: &ChartInstance) {
    for dataset in &chart.spec.datasets {
        for (label, value) in chart.spec.labels.iter().zip(&dataset.data) {
            let label = if chart.spec.labels.len() == 1 {
                &dataset.label
            } else {
                label
            };
            println!("  {label:<24} {value:>12.2}");
        }
    }
}

fn print_message<T>(entry: &ListEntry<T>) {
    match entry {
        ListEntry::Error(message) => println!("  ! {message}"),
        ListEntry::Empty(message) => println!("  {message}"),
        ListEntry::Item(_) => {}
    }
}

fn progress_bar(pct: f64) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 10.0).round()) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}
