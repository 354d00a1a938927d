//! Quote service
//!
//! Validation, random selection and first-run seeding on top of the
//! quote repository.

use tracing::info;

use crate::error::{TadaError, TadaResult};
use crate::models::{
    validate_author, validate_category, validate_quote_text, NewQuote, Quote, QuoteChange,
    QuoteFilter,
};
use crate::storage::Storage;

/// Service for quote management
pub struct QuoteService<'a> {
    storage: &'a Storage,
}

impl<'a> QuoteService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new quote after trimming and validating every field
    pub fn create(&self, new: NewQuote) -> TadaResult<Quote> {
        let new = new.validated()?;
        self.storage.quotes().create(&new)
    }

    pub fn get(&self, id: i64) -> TadaResult<Quote> {
        self.storage.quotes().get(id)
    }

    pub fn list(&self, filter: &QuoteFilter) -> TadaResult<Vec<Quote>> {
        self.storage.quotes().list(filter)
    }

    /// Apply a set of field changes and return the updated quote
    pub fn update(&self, id: i64, changes: &[QuoteChange]) -> TadaResult<Quote> {
        if changes.is_empty() {
            return Err(TadaError::Validation(
                "at least one of text, author or category must be provided".into(),
            ));
        }

        let changes = changes
            .iter()
            .map(|change| match change {
                QuoteChange::Text(t) => validate_quote_text(t).map(QuoteChange::Text),
                QuoteChange::Author(a) => validate_author(a).map(QuoteChange::Author),
                QuoteChange::Category(c) => validate_category(c).map(QuoteChange::Category),
            })
            .collect::<TadaResult<Vec<_>>>()?;

        let repo = self.storage.quotes();
        for change in &changes {
            repo.update(id, change)?;
        }
        repo.get(id)
    }

    /// Delete a quote, returning the record as it was before deletion
    pub fn delete(&self, id: i64) -> TadaResult<Quote> {
        let quote = self.get(id)?;
        self.storage.quotes().delete(id)?;
        info!(id, "quote removed");
        Ok(quote)
    }

    pub fn random(&self) -> TadaResult<Quote> {
        self.storage.quotes().random()
    }

    /// Seed the given quotes when the table is empty, then pick one at random
    pub fn seeded_random(&self, seeds: &[String], category: &str) -> TadaResult<Quote> {
        self.storage.quotes().seed(seeds, category)?;
        self.random()
    }
}
