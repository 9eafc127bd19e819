pub mod api;
pub mod errors;
pub mod models;
pub mod notifications;
pub mod pages;
pub mod render;
pub mod services;

use std::sync::Arc;

use api::{ApiClient, ReqwestTransport, Transport};
use errors::ClientError;
use models::settings::ClientSettings;
use notifications::{Document, NotificationService};
use pages::dashboard::DashboardPage;
use pages::goals::GoalsPage;
use pages::transactions::TransactionsPage;
use pages::PageContext;
use render::dialog::Confirm;
use render::spinner::LoadingIndicator;

/// Main entry point for the budget client core library.
///
/// Wires settings, transport, notification area, loading indicator and API
/// client together and hands out page controllers that share them.
#[must_use]
pub struct BudgetClient {
    settings: ClientSettings,
    document: Document,
    notifier: NotificationService,
    spinner: LoadingIndicator,
    api: ApiClient,
}

impl std::fmt::Debug for BudgetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetClient")
            .field("settings", &self.settings)
            .field("api", &self.api)
            .field("notifications", &self.document.notifications().len())
            .finish()
    }
}

impl BudgetClient {
    /// Build a client that talks to the real backend over HTTP.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        settings.validate()?;
        let transport = ReqwestTransport::with_timeout(settings.timeout())?;
        Ok(Self::with_transport(settings, Arc::new(transport)))
    }

    /// Build a client that talks to the real backend over HTTP.
    #[cfg(target_arch = "wasm32")]
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        settings.validate()?;
        Ok(Self::with_transport(settings, Arc::new(ReqwestTransport::new())))
    }

    /// Settings from the environment (and `.env`), then [`BudgetClient::new`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientSettings::from_env()?)
    }

    /// Build a client on top of any transport (tests, alternative stacks).
    pub fn with_transport(settings: ClientSettings, transport: Arc<dyn Transport>) -> Self {
        Self::with_document(settings, transport, Document::new())
    }

    /// Like [`BudgetClient::with_transport`], rendering notifications into
    /// `document` (which may still be loading).
    pub fn with_document(
        settings: ClientSettings,
        transport: Arc<dyn Transport>,
        document: Document,
    ) -> Self {
        let notifier =
            NotificationService::with_default_duration(document.clone(), settings.notification_duration_ms);
        let api = ApiClient::new(settings.base_url.clone(), transport, notifier.clone());
        Self {
            settings,
            document,
            notifier,
            spinner: LoadingIndicator::new(),
            api,
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn notifier(&self) -> &NotificationService {
        &self.notifier
    }

    pub fn spinner(&self) -> &LoadingIndicator {
        &self.spinner
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // ── Pages ───────────────────────────────────────────────────────

    pub fn dashboard_page(&self) -> DashboardPage {
        DashboardPage::new(self.page_context())
    }

    /// Goals page; `confirm` answers the delete prompt.
    pub fn goals_page(&self, confirm: Arc<dyn Confirm>) -> GoalsPage {
        GoalsPage::new(self.page_context(), confirm)
    }

    /// Transactions page; `confirm` answers the delete prompt.
    pub fn transactions_page(&self, confirm: Arc<dyn Confirm>) -> TransactionsPage {
        TransactionsPage::new(self.page_context(), confirm)
    }

    fn page_context(&self) -> PageContext {
        PageContext::new(
            self.api.clone(),
            self.spinner.clone(),
            self.settings.currency.clone(),
        )
    }
}
