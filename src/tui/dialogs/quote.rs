//! Quote add/edit forms

use crate::error::{TadaError, TadaResult};
use crate::models::{NewQuote, Quote, QuoteChange};

use super::form::FormState;

const TEXT: usize = 0;
const AUTHOR: usize = 1;
const CATEGORY: usize = 2;

fn base(title: &str, quote: Option<&Quote>) -> FormState {
    let (text, author, category) = quote
        .map(|q| (q.text.as_str(), q.author.as_str(), q.category.as_str()))
        .unwrap_or_default();

    FormState::new(title)
        .field("Quote", true, "Enter the quote text", text)
        .field("Author", false, "Author name (optional)", author)
        .field("Category", false, "Category (optional)", category)
}

pub fn add_form() -> FormState {
    base("Add Quote", None)
}

pub fn edit_form(quote: &Quote) -> FormState {
    base(&format!("Edit Quote #{}", quote.id), Some(quote))
}

/// Validate the form into trimmed quote fields
pub fn parse_new(form: &FormState) -> TadaResult<NewQuote> {
    form.check_required().map_err(TadaError::Validation)?;
    NewQuote::new(form.value(TEXT), form.value(AUTHOR), form.value(CATEGORY)).validated()
}

/// Every field is written back, so clearing author or category is possible
pub fn parse_changes(form: &FormState) -> TadaResult<Vec<QuoteChange>> {
    let new = parse_new(form)?;
    Ok(vec![
        QuoteChange::Text(new.text),
        QuoteChange::Author(new.author),
        QuoteChange::Category(new.category),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_add_form_requires_text() {
        let err = parse_new(&add_form()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Quote is required"));
    }

    #[test]
    fn test_author_length_is_validated() {
        let long = "a".repeat(101);
        let form = FormState::new("t")
            .field("Quote", true, "", "Text")
            .field("Author", false, "", &long)
            .field("Category", false, "", "");
        assert!(parse_new(&form).unwrap_err().is_validation());
    }

    #[test]
    fn test_edit_form_round_trips_fields() {
        let now = Utc::now();
        let quote = Quote {
            id: 3,
            text: "Stay hungry".into(),
            author: "Jobs".into(),
            category: "".into(),
            created_at: now,
            updated_at: now,
        };

        let form = edit_form(&quote);
        assert_eq!(form.title, "Edit Quote #3");
        assert_eq!(
            parse_changes(&form).unwrap(),
            vec![
                QuoteChange::Text("Stay hungry".into()),
                QuoteChange::Author("Jobs".into()),
                QuoteChange::Category("".into()),
            ]
        );
    }
}
