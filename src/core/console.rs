//! Product console - The state machine behind the inventory UI.
//!
//! A `Console` owns everything the user sees: the last loaded product list, the form,
//! the search box, the table-visibility flag and a single "last error" slot. Each action
//! performs at most one mutating request, awaits it, updates local state and, for
//! mutations, refreshes the list. Actions never leave an error unrecorded: any failure is
//! logged, written to `last_error`, and also returned to the caller.
//!
//! Every action clears the stale error when it starts, so `last_error` always describes
//! the most recent action.

use crate::{
    core::{
        api::ProductApi,
        form::{FormMode, ProductForm},
        validation::{self, FormField},
    },
    entities::{Product, ProductId},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info, instrument, warn};

/// Confirmation produced by a successful mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A product was created; carries the name echoed back by the server.
    Created { name: String },
    Updated,
    Deleted,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { name } => write!(f, "Product added: {name}"),
            Self::Updated => f.write_str("Product updated successfully"),
            Self::Deleted => f.write_str("Product deleted successfully"),
        }
    }
}

/// In-memory UI state plus the API it drives.
#[derive(Debug)]
pub struct Console<A> {
    api: A,
    products: Vec<Product>,
    form: ProductForm,
    search: String,
    last_error: Option<String>,
    show_table: bool,
    last_refreshed: Option<DateTime<Utc>>,
}

impl<A: ProductApi> Console<A> {
    /// Creates an empty console without touching the network.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            products: Vec::new(),
            form: ProductForm::default(),
            search: String::new(),
            last_error: None,
            show_table: false,
            last_refreshed: None,
        }
    }

    /// Creates a console and performs the initial product load.
    ///
    /// A failed load is not fatal: it is left in `last_error` and the list stays empty.
    pub async fn open(api: A) -> Self {
        let mut console = Self::new(api);
        if console.load_products().await.is_err() {
            warn!("Initial product load failed; console opened with an empty list");
        }
        console
    }

    /// The API this console talks to.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Products from the last successful list or search.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub const fn form(&self) -> &ProductForm {
        &self.form
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Message of the most recent failed action, if the latest action failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn is_table_visible(&self) -> bool {
        self.show_table
    }

    /// When the product list was last replaced by a server response.
    #[must_use]
    pub const fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// Writes raw text into one form input. No validation happens here.
    pub fn edit_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Writes raw text into the search box.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Fetches every product and replaces the local list.
    ///
    /// # Errors
    /// Returns `Error::Api` if the request fails; the previous list is kept.
    #[instrument(skip(self))]
    pub async fn load_products(&mut self) -> Result<()> {
        self.begin_action();
        self.refresh().await
    }

    /// Loads every product and reveals the table, whatever the outcome.
    ///
    /// # Errors
    /// Same as [`Self::load_products`].
    #[instrument(skip(self))]
    pub async fn show_products(&mut self) -> Result<()> {
        let result = self.load_products().await;
        self.show_table = true;
        result
    }

    /// Searches by the trimmed search text, or lists everything when it is blank.
    ///
    /// On completion the table is revealed and the search box cleared, on failure too.
    ///
    /// # Errors
    /// Returns `Error::Api` if the request fails; the previous list is kept.
    #[instrument(skip(self), fields(query = %self.search.trim()))]
    pub async fn search(&mut self) -> Result<()> {
        self.begin_action();
        let query = self.search.trim().to_string();

        let result = if query.is_empty() {
            self.api.list_products().await
        } else {
            self.api.search_products(&query).await
        };

        self.show_table = true;
        self.search.clear();

        match result {
            Ok(products) => {
                info!(count = products.len(), "Search returned products");
                self.replace_products(products);
                Ok(())
            }
            Err(e) => Err(self.record_failure("search", e)),
        }
    }

    /// Validates the form and creates a new product from it.
    ///
    /// The identifier is ignored, so this creates a new record even in edit mode. On
    /// success the form is cleared and the list refreshed.
    ///
    /// # Errors
    /// Returns `Error::Validation` without sending anything if the form is incomplete,
    /// or `Error::Api` if the server rejects the request.
    #[instrument(skip(self))]
    pub async fn create(&mut self) -> Result<Notice> {
        self.begin_action();
        let draft = validation::validate_draft(&self.form)
            .map_err(|e| self.record_failure("create", e.into()))?;

        let created = self
            .api
            .create_product(&draft)
            .await
            .map_err(|e| self.record_failure("create", e))?;

        info!(id = %created.id, name = %created.name, "Product created");
        self.form.clear();
        self.refresh_after_mutation().await;
        Ok(Notice::Created { name: created.name })
    }

    /// Validates the form and updates the product it was loaded from.
    ///
    /// On success the form returns to create mode and the list is refreshed.
    ///
    /// # Errors
    /// Returns `Error::Validation` without sending anything if no product is loaded or
    /// the form is incomplete, or `Error::Api` if the server rejects the request.
    #[instrument(skip(self))]
    pub async fn update(&mut self) -> Result<Notice> {
        self.begin_action();
        let (id, draft) = validation::validate_update(&self.form)
            .map_err(|e| self.record_failure("update", e.into()))?;

        self.api
            .update_product(&id, &draft)
            .await
            .map_err(|e| self.record_failure("update", e))?;

        info!(%id, "Product updated");
        self.form.clear();
        self.refresh_after_mutation().await;
        Ok(Notice::Updated)
    }

    /// Deletes a product by identifier and refreshes the list.
    ///
    /// The form is left alone, even if it holds the deleted product.
    ///
    /// # Errors
    /// Returns `Error::Api` if the server rejects the request.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn delete(&mut self, id: &ProductId) -> Result<Notice> {
        self.begin_action();
        self.api
            .delete_product(id)
            .await
            .map_err(|e| self.record_failure("delete", e))?;

        info!(%id, "Product deleted");
        self.refresh_after_mutation().await;
        Ok(Notice::Deleted)
    }

    /// Fetches one product and loads it into the form, entering edit mode.
    ///
    /// # Errors
    /// Returns `Error::Api` if the request fails; the form is left untouched.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn load_for_edit(&mut self, id: &ProductId) -> Result<()> {
        self.begin_action();
        let product = self
            .api
            .get_product(id)
            .await
            .map_err(|e| self.record_failure("load for edit", e))?;

        self.form.load(&product);
        info!(id = %product.id, "Product loaded into form");
        Ok(())
    }

    /// Empties the form, returns it to create mode and dismisses the error.
    ///
    /// The product list and table visibility are not affected.
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.last_error = None;
    }

    /// Current form mode.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.form.mode()
    }

    fn begin_action(&mut self) {
        self.last_error = None;
    }

    async fn refresh(&mut self) -> Result<()> {
        match self.api.list_products().await {
            Ok(products) => {
                info!(count = products.len(), "Product list refreshed");
                self.replace_products(products);
                Ok(())
            }
            Err(e) => Err(self.record_failure("list", e)),
        }
    }

    /// A failed refresh after a successful mutation is only recorded; the mutation
    /// itself still reports success.
    async fn refresh_after_mutation(&mut self) {
        if self.refresh().await.is_err() {
            warn!("Mutation succeeded but the follow-up refresh failed");
        }
    }

    fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.last_refreshed = Some(Utc::now());
    }

    fn record_failure(&mut self, action: &str, err: Error) -> Error {
        match &err {
            Error::Validation(_) => warn!(action, error = %err, "Form rejected"),
            _ => error!(action, error = %err, "Console action failed"),
        }
        self.last_error = Some(err.to_string());
        err
    }
}
