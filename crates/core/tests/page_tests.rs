// ═══════════════════════════════════════════════════════════════════
// Page Tests — goals, transactions and dashboard controllers
// ═══════════════════════════════════════════════════════════════════

mod common;

use std::sync::{Arc, Mutex};

use budget_client_core::api::{HttpResponse, Method};
use budget_client_core::errors::ClientError;
use budget_client_core::models::notification::Severity;
use budget_client_core::models::transaction::TransactionType;
use budget_client_core::pages::dashboard::{
    BalanceTone, LOAD_FAILED_NOTICE, NO_GOALS, NO_RECENT_TRANSACTIONS, NO_SPENDING_DATA,
    SUMMARY_ERROR,
};
use budget_client_core::pages::forms::{GoalForm, TransactionForm};
use budget_client_core::pages::Outcome;
use budget_client_core::render::container::ListEntry;
use budget_client_core::render::dialog::{ClickTarget, Confirm};
use serde_json::{json, Value};

use common::{client, errors, goal_json, notices, transaction_json, MockTransport};

fn always_yes() -> Arc<dyn Confirm> {
    Arc::new(|_: &str| true)
}

/// Confirmer that answers `answer` and remembers every question.
fn recording(answer: bool) -> (Arc<dyn Confirm>, Arc<Mutex<Vec<String>>>) {
    let asked = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&asked);
    let confirm: Arc<dyn Confirm> = Arc::new(move |question: &str| {
        log.lock().unwrap().push(question.to_string());
        answer
    });
    (confirm, asked)
}

fn messages<T>(entries: &[ListEntry<T>]) -> Vec<&str> {
    entries.iter().filter_map(ListEntry::message).collect()
}

fn sent_body(transport: &MockTransport, index: usize) -> Value {
    let request = &transport.requests()[index];
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

// ── Goals: loading ──────────────────────────────────────────────────

mod goals_load {
    use super::*;

    #[tokio::test]
    async fn renders_goal_cards() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!([
                {"id": 1, "name": "Car", "target_amount": 1000, "current_amount": 425,
                 "deadline": "2025-01-15"},
                goal_json(2, "Overshoot", 100.0, 150.0)
            ]),
        );
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        page.init().await.unwrap();

        let cards: Vec<_> = page
            .list()
            .snapshot()
            .into_iter()
            .filter_map(|e| e.item().cloned())
            .collect();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].current, "$425.00");
        assert_eq!(cards[0].target, "$1,000.00");
        assert_eq!(cards[0].progress_label, "42.5% Complete");
        assert_eq!(cards[0].deadline.as_deref(), Some("Jan 15, 2025"));
        assert_eq!(cards[1].progress_width_pct, 100.0);
        assert_eq!(cards[1].progress_label, "100.0% Complete");
        assert_eq!(cards[1].deadline, None);
        assert_eq!(transport.calls(), vec![(Method::Get, "/api/goals".into())]);
    }

    #[tokio::test]
    async fn empty_list_shows_empty_state() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([]));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        page.init().await.unwrap();

        assert_eq!(
            messages(&page.list().snapshot()),
            vec!["No savings goals found. Start by adding one!"]
        );
        assert!(client.document().notifications().is_empty());
    }

    #[tokio::test]
    async fn error_payload_shows_inline_error_and_notifies() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"error": "Database unavailable"}));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        page.init().await.unwrap();

        let entries = page.list().snapshot();
        assert!(matches!(&entries[..], [ListEntry::Error(m)] if m == "Failed to load goals."));
        assert_eq!(errors(client.document()), vec!["Database unavailable"]);
    }

    #[tokio::test]
    async fn malformed_items_are_reported() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([{"id": "not-a-number"}]));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        let err = page.init().await.unwrap_err();

        assert!(matches!(err, ClientError::Deserialization(_)));
        assert_eq!(messages(&page.list().snapshot()), vec!["Failed to load goals."]);
        assert_eq!(errors(client.document()).len(), 1);
    }

    #[tokio::test]
    async fn unreadable_records_are_skipped() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!([
                goal_json(1, "Car", 1000.0, 100.0),
                {"id": 2, "name": "Broken", "target_amount": null},
                goal_json(3, "Trip", 500.0, 50.0)
            ]),
        );
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        page.init().await.unwrap();

        let ids: Vec<i64> = page
            .list()
            .snapshot()
            .iter()
            .filter_map(|e| e.item().map(|card| card.goal.id))
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(
            notices(client.document()),
            vec![(
                Severity::Warning,
                "Skipped 1 goal that could not be read.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn transport_failure_keeps_previous_list_and_hides_spinner() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([goal_json(1, "Car", 1000.0, 0.0)]));
        transport.push_error(ClientError::Network("offline".into()));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        page.init().await.unwrap();
        let err = page.load().await.unwrap_err();

        assert_eq!(err, ClientError::Network("offline".into()));
        assert_eq!(page.list().len(), 1);
        assert!(page.list().snapshot()[0].item().is_some());
        assert_eq!(
            errors(client.document()),
            vec!["API Error: Network error: offline"]
        );
        assert!(!client.spinner().is_visible());
        assert_eq!(client.spinner().shown_count(), 2);
    }

    #[tokio::test]
    async fn reload_replaces_rather_than_appends() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([goal_json(1, "A", 10.0, 0.0)]));
        transport.push_json(200, json!([goal_json(1, "A", 10.0, 0.0)]));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        page.init().await.unwrap();
        page.load().await.unwrap();

        assert_eq!(page.list().len(), 1);
    }
}

// ── Goals: mutations ────────────────────────────────────────────────

mod goals_mutations {
    use super::*;

    fn car_form() -> GoalForm {
        GoalForm {
            name: "Car".into(),
            target_amount: "5000".into(),
            current_amount: "100".into(),
            deadline: String::new(),
        }
    }

    #[tokio::test]
    async fn add_posts_notifies_resets_and_reloads() {
        let transport = MockTransport::new();
        transport.push_json(201, json!({"id": 7}));
        transport.push_json(200, json!([goal_json(7, "Car", 5000.0, 100.0)]));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        *page.add_form_mut() = car_form();
        let outcome = page.submit_add().await.unwrap();

        assert_eq!(outcome, Outcome::Saved { id: 7 });
        assert_eq!(
            transport.calls(),
            vec![
                (Method::Post, "/api/goals".into()),
                (Method::Get, "/api/goals".into())
            ]
        );
        assert_eq!(
            sent_body(&transport, 0),
            json!({"name": "Car", "target_amount": 5000.0, "current_amount": 100.0, "deadline": null})
        );
        assert_eq!(
            notices(client.document()),
            vec![(Severity::Success, "Goal added successfully!".to_string())]
        );
        assert_eq!(page.add_form(), &GoalForm::default());
        assert_eq!(page.list().len(), 1);
    }

    #[tokio::test]
    async fn server_rejection_notifies_once_and_keeps_form() {
        let transport = MockTransport::new();
        transport.push_json(400, json!({"error": "Invalid amount"}));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        *page.add_form_mut() = car_form();
        let err = page.submit_add().await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid amount");
        assert_eq!(errors(client.document()), vec!["API Error: Invalid amount"]);
        assert_eq!(page.add_form(), &car_form());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn success_status_without_id_is_rejected() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"error": "Name already used"}));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        *page.add_form_mut() = car_form();
        let err = page.submit_add().await.unwrap_err();

        assert_eq!(
            err,
            ClientError::UnexpectedResponse("Name already used".into())
        );
        assert_eq!(errors(client.document()), vec!["Name already used"]);
        assert_eq!(page.add_form(), &car_form());
    }

    #[tokio::test]
    async fn unexpected_body_uses_generic_message() {
        let transport = MockTransport::new();
        transport.push(HttpResponse::text(200, "OK"));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        *page.add_form_mut() = car_form();
        page.submit_add().await.unwrap_err();

        assert_eq!(
            errors(client.document()),
            vec!["Failed to add goal. Please try again."]
        );
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_network() {
        let transport = MockTransport::new();
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        page.add_form_mut().name = "Car".into();
        page.add_form_mut().target_amount = "0".into();
        let err = page.submit_add().await.unwrap_err();

        assert!(err.is_validation());
        assert!(transport.requests().is_empty());
        assert_eq!(
            errors(client.document()),
            vec!["Goal name and valid target amount are required."]
        );
        assert_eq!(client.spinner().shown_count(), 0);
    }

    #[tokio::test]
    async fn edit_prefills_and_puts() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([goal_json(3, "Trip", 800.0, 200.0)]));
        transport.push_json(200, json!({"id": 3}));
        transport.push_json(200, json!([goal_json(3, "Trip", 900.0, 200.0)]));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());
        page.init().await.unwrap();

        let goal = page.list().snapshot()[0].item().unwrap().goal.clone();
        page.open_edit(&goal);
        assert!(page.is_edit_open());
        assert_eq!(page.editing_id(), Some(3));
        assert_eq!(page.edit_form().target_amount, "800");
        assert_eq!(page.edit_form().current_amount, "200");

        page.edit_form_mut().target_amount = "900".into();
        let outcome = page.submit_edit().await.unwrap();

        assert_eq!(outcome, Outcome::Saved { id: 3 });
        assert_eq!(transport.calls()[1], (Method::Put, "/api/goals/3".into()));
        assert_eq!(sent_body(&transport, 1)["target_amount"], json!(900.0));
        assert!(!page.is_edit_open());
        assert_eq!(page.editing_id(), None);
        assert_eq!(page.edit_form(), &GoalForm::default());
        assert_eq!(
            notices(client.document()),
            vec![(Severity::Success, "Goal updated successfully!".to_string())]
        );
        assert_eq!(page.list().snapshot()[0].item().unwrap().target, "$900.00");
    }

    #[tokio::test]
    async fn edit_validation_uses_update_wording() {
        let transport = MockTransport::new();
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        let goal = serde_json::from_value(goal_json(3, "Trip", 800.0, 0.0)).unwrap();
        page.open_edit(&goal);
        page.edit_form_mut().name.clear();
        page.submit_edit().await.unwrap_err();

        assert_eq!(
            errors(client.document()),
            vec!["Goal name and valid target amount are required for update."]
        );
        assert!(page.is_edit_open());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn submit_edit_without_selection_does_nothing() {
        let transport = MockTransport::new();
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        assert_eq!(page.submit_edit().await.unwrap(), Outcome::NothingToDo);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn backdrop_click_closes_dialog() {
        let transport = MockTransport::new();
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());
        let goal = serde_json::from_value(goal_json(5, "TV", 400.0, 0.0)).unwrap();

        page.open_edit(&goal);
        page.handle_click(ClickTarget::Dialog);
        assert!(page.is_edit_open());

        page.handle_click(ClickTarget::Backdrop);
        assert!(!page.is_edit_open());
        assert_eq!(page.editing_id(), None);
        assert_eq!(page.edit_form(), &GoalForm::default());
    }

    #[tokio::test]
    async fn delete_confirmed() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"message": "Goal deleted successfully"}));
        transport.push_json(200, json!([]));
        let client = client(&transport);
        let (confirm, asked) = recording(true);
        let mut page = client.goals_page(confirm);

        let outcome = page.delete(4).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Deleted {
                message: "Goal deleted successfully".into()
            }
        );
        assert_eq!(
            *asked.lock().unwrap(),
            vec!["Are you sure you want to delete this goal?".to_string()]
        );
        assert_eq!(
            transport.calls(),
            vec![
                (Method::Delete, "/api/goals/4".into()),
                (Method::Get, "/api/goals".into())
            ]
        );
        assert_eq!(
            notices(client.document()),
            vec![(Severity::Success, "Goal deleted successfully".to_string())]
        );
        assert_eq!(
            messages(&page.list().snapshot()),
            vec!["No savings goals found. Start by adding one!"]
        );
    }

    #[tokio::test]
    async fn delete_declined_sends_nothing() {
        let transport = MockTransport::new();
        let client = client(&transport);
        let (confirm, asked) = recording(false);
        let mut page = client.goals_page(confirm);

        assert_eq!(page.delete(4).await.unwrap(), Outcome::Cancelled);
        assert_eq!(asked.lock().unwrap().len(), 1);
        assert!(transport.requests().is_empty());
        assert!(client.document().notifications().is_empty());
    }

    #[tokio::test]
    async fn delete_without_message_is_rejected() {
        let transport = MockTransport::new();
        transport.push(HttpResponse::no_content());
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        let err = page.delete(4).await.unwrap_err();

        assert!(matches!(err, ClientError::UnexpectedResponse(_)));
        assert_eq!(
            errors(client.document()),
            vec!["Failed to delete goal. Please try again."]
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn failed_reload_does_not_fail_the_mutation() {
        let transport = MockTransport::new();
        transport.push_json(201, json!({"id": "8"}));
        transport.push_error(ClientError::Network("offline".into()));
        let client = client(&transport);
        let mut page = client.goals_page(always_yes());

        *page.add_form_mut() = car_form();
        let outcome = page.submit_add().await.unwrap();

        assert_eq!(outcome, Outcome::Saved { id: 8 });
        assert_eq!(
            notices(client.document()),
            vec![
                (Severity::Error, "API Error: Network error: offline".to_string()),
                (Severity::Success, "Goal added successfully!".to_string()),
            ]
        );
    }
}

// ── Transactions ────────────────────────────────────────────────────

mod transactions {
    use super::*;

    #[tokio::test]
    async fn rows_are_newest_first_and_formatted() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!([
                transaction_json(1, "expense", "Food", 42.1, "2024-01-05"),
                transaction_json(2, "income", "Salary", 3000.0, "2024-02-01"),
                transaction_json(3, "expense", "Misc", 5.0, "sometime"),
                {"id": 4, "type": "expense", "category": "Rent", "amount": 1200,
                 "date": "2024-01-20T09:00:00", "description": "January"}
            ]),
        );
        let client = client(&transport);
        let mut page = client.transactions_page(always_yes());

        page.init().await.unwrap();

        let rows: Vec<_> = page
            .list()
            .snapshot()
            .into_iter()
            .filter_map(|e| e.item().cloned())
            .collect();
        let ids: Vec<i64> = rows.iter().map(|r| r.transaction.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        assert_eq!(rows[0].date, "Feb 1, 2024");
        assert_eq!(rows[0].type_label, "Income");
        assert_eq!(rows[0].amount, "$3,000.00");
        assert_eq!(rows[0].description, "-");
        assert_eq!(rows[0].tone, TransactionType::Income);
        assert_eq!(rows[1].description, "January");
        assert_eq!(rows[3].date, "sometime");
    }

    #[tokio::test]
    async fn empty_state() {
        let transport = MockTransport::new();
        transport.push(HttpResponse::no_content());
        let client = client(&transport);
        let mut page = client.transactions_page(always_yes());

        page.init().await.unwrap();

        assert_eq!(
            messages(&page.list().snapshot()),
            vec!["No transactions found. Add one to get started!"]
        );
    }

    #[tokio::test]
    async fn add_sends_normalized_payload() {
        let transport = MockTransport::new();
        transport.push_json(201, json!({"id": 11}));
        transport.push_json(200, json!([]));
        let client = client(&transport);
        let mut page = client.transactions_page(always_yes());

        *page.add_form_mut() = TransactionForm {
            transaction_type: "expense".into(),
            category: " Food ".into(),
            amount: "12.5".into(),
            date: "2024-03-02".into(),
            description: String::new(),
        };
        page.submit_add().await.unwrap();

        assert_eq!(
            sent_body(&transport, 0),
            json!({
                "type": "expense",
                "category": "Food",
                "amount": 12.5,
                "date": "2024-03-02",
                "description": ""
            })
        );
        assert_eq!(
            notices(client.document()),
            vec![(Severity::Success, "Transaction added successfully!".to_string())]
        );
        assert_eq!(page.add_form(), &TransactionForm::default());
    }

    #[tokio::test]
    async fn invalid_amount_is_rejected_locally() {
        let transport = MockTransport::new();
        let client = client(&transport);
        let mut page = client.transactions_page(always_yes());

        *page.add_form_mut() = TransactionForm {
            transaction_type: "income".into(),
            category: "Salary".into(),
            amount: "-10".into(),
            date: "2024-03-02".into(),
            description: String::new(),
        };
        page.submit_add().await.unwrap_err();

        assert!(transport.requests().is_empty());
        assert_eq!(
            errors(client.document()),
            vec!["Type, category, date, and a valid positive amount are required."]
        );
    }

    #[tokio::test]
    async fn edit_prefills_date_part_only() {
        let transport = MockTransport::new();
        let client = client(&transport);
        let mut page = client.transactions_page(always_yes());
        let tx = serde_json::from_value(json!({
            "id": 9, "type": "income", "category": "Bonus", "amount": 250.0,
            "date": "2024-04-10T08:30:00", "description": null
        }))
        .unwrap();

        page.open_edit(&tx);

        let form = page.edit_form();
        assert_eq!(form.transaction_type, "income");
        assert_eq!(form.amount, "250");
        assert_eq!(form.date, "2024-04-10");
        assert_eq!(form.description, "");
    }

    #[tokio::test]
    async fn delete_prompt_names_the_record_kind() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"message": "Transaction deleted"}));
        transport.push_json(200, json!([]));
        let client = client(&transport);
        let (confirm, asked) = recording(true);
        let mut page = client.transactions_page(confirm);

        page.delete(2).await.unwrap();

        assert_eq!(
            *asked.lock().unwrap(),
            vec!["Are you sure you want to delete this transaction?".to_string()]
        );
        assert_eq!(transport.calls()[0], (Method::Delete, "/api/transactions/2".into()));
    }
}

// ── Dashboard ───────────────────────────────────────────────────────

mod dashboard {
    use super::*;

    fn snapshot() -> Value {
        json!({
            "total_income": 5000,
            "total_expenses": 6234.5,
            "net_balance": -1234.5,
            "recent_transactions": [
                transaction_json(1, "expense", "Food", 10.0, "2024-01-07"),
                transaction_json(2, "expense", "Fuel", 20.0, "2024-01-06"),
                transaction_json(3, "income", "Salary", 5000.0, "2024-01-05"),
                transaction_json(4, "expense", "Rent", 900.0, "2024-01-04"),
                transaction_json(5, "expense", "Gym", 30.0, "2024-01-03"),
                transaction_json(6, "expense", "Books", 15.0, "2024-01-02"),
            ],
            "goal_summary": [
                {"id": 1, "name": "Car", "target_amount": 3000, "current_amount": 1000,
                 "deadline": "2025-06-30"},
                goal_json(2, "Phone", 500.0, 600.0)
            ],
            "spending_by_category": {"Rent": 900, "Food": 10}
        })
    }

    #[tokio::test]
    async fn renders_every_section() {
        let transport = MockTransport::new();
        transport.push_json(200, snapshot());
        let client = client(&transport);
        let mut page = client.dashboard_page();

        page.init().await.unwrap();

        let summary = page.summary().snapshot();
        let metrics = summary[0].item().unwrap();
        assert_eq!(metrics.total_income, "$5,000.00");
        assert_eq!(metrics.total_expenses, "$6,234.50");
        assert_eq!(metrics.net_balance, "-$1,234.50");
        assert_eq!(metrics.balance_tone, BalanceTone::Negative);

        let recent = page.recent_transactions().snapshot();
        assert_eq!(recent.len(), 5);
        let first = recent[0].item().unwrap();
        assert_eq!(first.label, "Food (Jan 7, 2024)");
        assert_eq!(first.amount, "$10.00");
        assert_eq!(first.tone, TransactionType::Expense);
        assert_eq!(first.tooltip, None);

        let goals = page.goal_summary().snapshot();
        let car = goals[0].item().unwrap();
        assert_eq!(car.amounts, "$1,000.00 / $3,000.00");
        assert_eq!(car.progress_width_pct, 33.33);
        assert_eq!(car.progress_label, "33%");
        assert_eq!(car.deadline.as_deref(), Some("Jun 30, 2025"));
        let phone = goals[1].item().unwrap();
        assert_eq!(phone.progress_width_pct, 100.0);
        assert_eq!(phone.progress_label, "120%");

        let state = page.state();
        let spending = state.spending_chart.current().unwrap();
        assert_eq!(spending.spec.labels, vec!["Rent", "Food"]);
        let bars = state.income_expense_chart.current().unwrap();
        assert_eq!(bars.spec.datasets[0].data, vec![5000.0]);
        assert_eq!(bars.spec.datasets[1].data, vec![6234.5]);

        assert!(!client.spinner().is_visible());
        assert!(client.document().notifications().is_empty());
    }

    #[tokio::test]
    async fn reload_destroys_previous_charts() {
        let transport = MockTransport::new();
        transport.push_json(200, snapshot());
        transport.push_json(200, snapshot());
        let client = client(&transport);
        let mut page = client.dashboard_page();

        page.load().await.unwrap();
        page.load().await.unwrap();

        let state = page.state();
        assert_eq!(state.spending_chart.destroyed_count(), 1);
        assert_eq!(state.spending_chart.current().unwrap().id, 2);
        assert_eq!(state.income_expense_chart.destroyed_count(), 1);
        assert_eq!(state.income_expense_chart.current().unwrap().id, 2);
        assert_eq!(page.recent_transactions().len(), 5);
    }

    #[tokio::test]
    async fn empty_sections_show_their_messages() {
        let transport = MockTransport::new();
        transport.push_json(200, snapshot());
        transport.push_json(
            200,
            json!({"total_income": 0, "total_expenses": 0, "balance": 0}),
        );
        let client = client(&transport);
        let mut page = client.dashboard_page();

        page.load().await.unwrap();
        page.load().await.unwrap();

        assert_eq!(
            messages(&page.recent_transactions().snapshot()),
            vec![NO_RECENT_TRANSACTIONS]
        );
        assert_eq!(messages(&page.goal_summary().snapshot()), vec![NO_GOALS]);

        let state = page.state();
        assert!(state.spending_chart.current().is_none());
        assert_eq!(state.spending_chart.placeholder(), Some(NO_SPENDING_DATA));
        assert_eq!(state.spending_chart.destroyed_count(), 1);
        assert!(state.income_expense_chart.current().is_some());

        let summary = page.summary().snapshot();
        assert_eq!(summary[0].item().unwrap().balance_tone, BalanceTone::Positive);
    }

    #[tokio::test]
    async fn no_data_renders_nothing() {
        let transport = MockTransport::new();
        transport.push(HttpResponse::no_content());
        let client = client(&transport);
        let mut page = client.dashboard_page();

        page.load().await.unwrap();

        assert!(page.summary().is_empty());
        assert!(page.state().income_expense_chart.current().is_none());
    }

    #[tokio::test]
    async fn error_payload_marks_summary_instead_of_zeros() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"error": "Database unavailable"}));
        let client = client(&transport);
        let mut page = client.dashboard_page();

        page.init().await.unwrap();

        assert_eq!(messages(&page.summary().snapshot()), vec![SUMMARY_ERROR]);
        assert_eq!(errors(client.document()), vec!["Database unavailable"]);
        assert!(page.recent_transactions().is_empty());
        assert!(page.state().income_expense_chart.current().is_none());
        assert!(!client.spinner().is_visible());
    }

    #[tokio::test]
    async fn unreadable_snapshot_is_a_load_failure() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"total_income": "lots"}));
        let client = client(&transport);
        let mut page = client.dashboard_page();

        let err = page.load().await.unwrap_err();

        assert!(matches!(err, ClientError::Deserialization(_)));
        assert_eq!(messages(&page.summary().snapshot()), vec![SUMMARY_ERROR]);
        let errors = errors(client.document());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], LOAD_FAILED_NOTICE);
        assert!(errors[1].starts_with("API Error: Deserialization error:"));
    }

    #[tokio::test]
    async fn failure_marks_summary_and_notifies() {
        let transport = MockTransport::new();
        transport.push_json(500, json!({"error": "Internal Server Error"}));
        let client = client(&transport);
        let mut page = client.dashboard_page();

        let err = page.load().await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(messages(&page.summary().snapshot()), vec![SUMMARY_ERROR]);
        assert_eq!(
            errors(client.document()),
            vec![
                LOAD_FAILED_NOTICE.to_string(),
                "API Error: Internal Server Error".to_string()
            ]
        );
        assert!(!client.spinner().is_visible());
    }
}
