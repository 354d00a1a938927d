//! Quote model
//!
//! A short text with an optional author and category.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TadaError, TadaResult};

pub const MAX_TEXT_LEN: usize = 1000;
pub const MAX_AUTHOR_LEN: usize = 100;
pub const MAX_CATEGORY_LEN: usize = 50;

/// A quote as read back from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Store-assigned identifier
    pub id: i64,

    pub text: String,

    /// May be empty
    pub author: String,

    /// May be empty
    pub category: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Quote {
    /// Time elapsed since creation
    pub fn age(&self) -> Duration {
        Utc::now() - self.created_at
    }
}

/// Fields needed to create a quote
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewQuote {
    pub text: String,
    pub author: String,
    pub category: String,
}

impl NewQuote {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    /// Trim and validate every field
    pub fn validated(self) -> TadaResult<Self> {
        Ok(Self {
            text: validate_quote_text(&self.text)?,
            author: validate_author(&self.author)?,
            category: validate_category(&self.category)?,
        })
    }
}

/// Optional equality predicates for listing quotes (combined with AND)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteFilter {
    pub author: Option<String>,
    pub category: Option<String>,
}

impl QuoteFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A single-field change to an existing quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteChange {
    Text(String),
    Author(String),
    Category(String),
}

/// Trim quote text and check it is 1..=1000 characters
pub fn validate_quote_text(text: &str) -> TadaResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TadaError::Validation("quote text cannot be empty".into()));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(TadaError::Validation(format!(
            "quote text too long (max {} characters)",
            MAX_TEXT_LEN
        )));
    }
    Ok(text.to_string())
}

/// Trim an author name; empty is allowed
pub fn validate_author(author: &str) -> TadaResult<String> {
    let author = author.trim();
    if author.chars().count() > MAX_AUTHOR_LEN {
        return Err(TadaError::Validation(format!(
            "author name too long (max {} characters)",
            MAX_AUTHOR_LEN
        )));
    }
    Ok(author.to_string())
}

/// Trim a category; empty is allowed
pub fn validate_category(category: &str) -> TadaResult<String> {
    let category = category.trim();
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(TadaError::Validation(format!(
            "category name too long (max {} characters)",
            MAX_CATEGORY_LEN
        )));
    }
    Ok(category.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quote_text() {
        assert_eq!(validate_quote_text("  Be kind.  ").unwrap(), "Be kind.");
        assert!(validate_quote_text(&"q".repeat(1000)).is_ok());
        assert!(validate_quote_text("").unwrap_err().is_validation());
        assert!(validate_quote_text(" \t ").is_err());
        assert!(validate_quote_text(&"q".repeat(1001)).is_err());
    }

    #[test]
    fn test_validate_author_and_category() {
        assert_eq!(validate_author("").unwrap(), "");
        assert_eq!(validate_author(" Seneca ").unwrap(), "Seneca");
        assert!(validate_author(&"a".repeat(101)).is_err());

        assert_eq!(validate_category("").unwrap(), "");
        assert!(validate_category(&"c".repeat(50)).is_ok());
        assert!(validate_category(&"c".repeat(51)).is_err());
    }

    #[test]
    fn test_new_quote_validated() {
        let quote = NewQuote::new(" Stay hungry ", " Steve Jobs ", "").validated().unwrap();
        assert_eq!(quote.text, "Stay hungry");
        assert_eq!(quote.author, "Steve Jobs");
        assert_eq!(quote.category, "");

        assert!(NewQuote::new("", "x", "y").validated().is_err());
    }
}
