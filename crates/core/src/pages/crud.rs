use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::{classify_collection, rejection_message, Collection, Outcome, PageContext};
use crate::api::RequestOptions;
use crate::errors::ClientError;
use crate::render::container::{Container, ListEntry};
use crate::render::dialog::{ClickTarget, Confirm, Modal};
use crate::services::validation::FormMode;

/// A backend collection with list / create / update / delete endpoints.
///
/// Implementations only describe the record: where it lives, how its form
/// is validated and how a row looks. [`CrudPage`] does the orchestration.
pub trait Resource {
    type Record: DeserializeOwned + Clone + Send;
    type Form: Clone + Default + Send;
    type Payload: Serialize + Send;
    type View: Clone + Send;

    /// Collection endpoint, e.g. `/api/goals`.
    const PATH: &'static str;
    /// Lowercase noun used in messages ("goal").
    const NOUN: &'static str;
    /// Capitalized noun used in messages ("Goal").
    const TITLE: &'static str;
    const EMPTY_MESSAGE: &'static str;
    const LOAD_FAILED_MESSAGE: &'static str;

    fn id(record: &Self::Record) -> i64;

    fn validate(form: &Self::Form, mode: FormMode) -> Result<Self::Payload, ClientError>;

    /// Prefill the edit form from a record.
    fn form_from(record: &Self::Record) -> Self::Form;

    /// Order records before rendering. Server order by default.
    fn order(_records: &mut [Self::Record]) {}

    fn view(record: Self::Record, currency: &str) -> Self::View;
}

/// Load → render → mutate controller shared by the goals and transactions pages.
pub struct CrudPage<R: Resource> {
    ctx: PageContext,
    list: Container<ListEntry<R::View>>,
    confirm: Arc<dyn Confirm>,
    add_form: R::Form,
    edit_form: R::Form,
    edit_modal: Modal,
    editing_id: Option<i64>,
}

impl<R: Resource> CrudPage<R> {
    pub fn new(ctx: PageContext, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            ctx,
            list: Container::new(),
            confirm,
            add_form: R::Form::default(),
            edit_form: R::Form::default(),
            edit_modal: Modal::default(),
            editing_id: None,
        }
    }

    /// Rendering target for the list.
    #[must_use]
    pub fn list(&self) -> &Container<ListEntry<R::View>> {
        &self.list
    }

    #[must_use]
    pub fn add_form(&self) -> &R::Form {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut R::Form {
        &mut self.add_form
    }

    #[must_use]
    pub fn edit_form(&self) -> &R::Form {
        &self.edit_form
    }

    pub fn edit_form_mut(&mut self) -> &mut R::Form {
        &mut self.edit_form
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    #[must_use]
    pub fn is_edit_open(&self) -> bool {
        self.edit_modal.is_visible()
    }

    /// Page load: fetch and render the collection.
    pub async fn init(&mut self) -> Result<(), ClientError> {
        self.load().await
    }

    /// Fetch the full collection and rebuild the list from scratch.
    ///
    /// A transport failure leaves the list as it was; the API client has
    /// already told the user.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let result = {
            let _spinner = self.ctx.spinner.guard();
            self.ctx.api.request(R::PATH, RequestOptions::get()).await?
        };

        self.list.clear();
        match classify_collection::<R::Record>(result) {
            Ok(Collection::Items {
                mut records,
                malformed,
            }) => {
                if !malformed.is_empty() {
                    for e in &malformed {
                        tracing::warn!("Skipping malformed {}: {e}", R::NOUN);
                    }
                    let plural = if malformed.len() == 1 { "" } else { "s" };
                    self.ctx.notifier.warning(format!(
                        "Skipped {} {}{plural} that could not be read.",
                        malformed.len(),
                        R::NOUN
                    ));
                }
                R::order(&mut records);
                tracing::debug!("Rendering {} {}s", records.len(), R::NOUN);
                for record in records {
                    self.list
                        .push(ListEntry::Item(R::view(record, &self.ctx.currency)));
                }
                Ok(())
            }
            Ok(Collection::Empty) => {
                self.list.push(ListEntry::Empty(R::EMPTY_MESSAGE.to_string()));
                Ok(())
            }
            Ok(Collection::Failed(message)) => {
                self.ctx.notifier.error(message);
                self.list
                    .push(ListEntry::Error(R::LOAD_FAILED_MESSAGE.to_string()));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Malformed {} list: {e}", R::NOUN);
                self.ctx.notifier.error(format!("API Error: {e}"));
                self.list
                    .push(ListEntry::Error(R::LOAD_FAILED_MESSAGE.to_string()));
                Err(e)
            }
        }
    }

    /// Validate the add form, create the record, then reset and reload.
    pub async fn submit_add(&mut self) -> Result<Outcome, ClientError> {
        let payload = self.validated(&self.add_form, FormMode::Create)?;
        let body = serde_json::to_value(&payload)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;

        let result = {
            let _spinner = self.ctx.spinner.guard();
            self.ctx.api.request(R::PATH, RequestOptions::post(body)).await?
        };

        match result.record_id() {
            Some(id) => {
                tracing::info!("Created {} {id}", R::NOUN);
                self.ctx
                    .notifier
                    .success(format!("{} added successfully!", R::TITLE));
                self.add_form = R::Form::default();
                self.reload().await;
                Ok(Outcome::Saved { id })
            }
            None => Err(self.reject(&rejection_message(
                &result,
                &format!("Failed to add {}. Please try again.", R::NOUN),
            ))),
        }
    }

    /// Open the edit dialog prefilled from `record`.
    pub fn open_edit(&mut self, record: &R::Record) {
        self.editing_id = Some(R::id(record));
        self.edit_form = R::form_from(record);
        self.edit_modal.show();
    }

    /// Close the edit dialog, forget the record being edited, reset the form.
    pub fn close_edit(&mut self) {
        self.edit_modal.hide();
        self.editing_id = None;
        self.edit_form = R::Form::default();
    }

    /// Clicking the backdrop of an open dialog closes it.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop && self.edit_modal.is_visible() {
            self.close_edit();
        }
    }

    /// Validate the edit form and update the selected record.
    pub async fn submit_edit(&mut self) -> Result<Outcome, ClientError> {
        let Some(id) = self.editing_id else {
            return Ok(Outcome::NothingToDo);
        };

        let payload = self.validated(&self.edit_form, FormMode::Update)?;
        let body = serde_json::to_value(&payload)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        let path = format!("{}/{id}", R::PATH);

        let result = {
            let _spinner = self.ctx.spinner.guard();
            self.ctx.api.request(&path, RequestOptions::put(body)).await?
        };

        match result.record_id() {
            Some(saved) => {
                tracing::info!("Updated {} {saved}", R::NOUN);
                self.ctx
                    .notifier
                    .success(format!("{} updated successfully!", R::TITLE));
                self.close_edit();
                self.reload().await;
                Ok(Outcome::Saved { id: saved })
            }
            None => Err(self.reject(&rejection_message(
                &result,
                &format!("Failed to update {}. Please try again.", R::NOUN),
            ))),
        }
    }

    /// Ask for confirmation, delete, reload.
    pub async fn delete(&mut self, id: i64) -> Result<Outcome, ClientError> {
        let question = format!("Are you sure you want to delete this {}?", R::NOUN);
        if !self.confirm.confirm(&question) {
            tracing::debug!("Deletion of {} {id} cancelled", R::NOUN);
            return Ok(Outcome::Cancelled);
        }

        let path = format!("{}/{id}", R::PATH);
        let result = {
            let _spinner = self.ctx.spinner.guard();
            self.ctx.api.request(&path, RequestOptions::delete()).await?
        };

        match result.str_field("message") {
            Some(message) => {
                let message = message.to_string();
                tracing::info!("Deleted {} {id}", R::NOUN);
                self.ctx.notifier.success(message.clone());
                self.reload().await;
                Ok(Outcome::Deleted { message })
            }
            None => Err(self.reject(&rejection_message(
                &result,
                &format!("Failed to delete {}. Please try again.", R::NOUN),
            ))),
        }
    }

    fn validated(&self, form: &R::Form, mode: FormMode) -> Result<R::Payload, ClientError> {
        R::validate(form, mode).map_err(|e| {
            tracing::debug!("Rejected {} form: {e}", R::NOUN);
            self.ctx.notifier.error(e.to_string());
            e
        })
    }

    fn reject(&self, message: &str) -> ClientError {
        tracing::warn!("Unexpected {} response: {message}", R::NOUN);
        self.ctx.notifier.error(message);
        ClientError::UnexpectedResponse(message.to_string())
    }

    /// Reload after a successful mutation. The mutation already happened,
    /// so a failing reload is logged but does not fail the mutation.
    async fn reload(&mut self) {
        if let Err(e) = self.load().await {
            tracing::warn!("Reloading {}s failed: {e}", R::NOUN);
        }
    }
}
