//! Quote display formatting

use super::format::format_age;
use crate::models::Quote;

/// Format a quote as text followed by its author
pub fn format_quote(quote: &Quote) -> String {
    let mut output = format!("\n {}\n", quote.text);
    if !quote.author.is_empty() {
        output.push_str(&format!("   - {}\n", quote.author));
    }
    output
}

/// Format a quote with its ID, category and age
pub fn format_quote_details(quote: &Quote) -> String {
    let mut output = format!("[#{}] {}\n", quote.id, quote.text);
    if !quote.author.is_empty() {
        output.push_str(&format!("   - {}\n", quote.author));
    }
    if !quote.category.is_empty() {
        output.push_str(&format!("   Category: {}\n", quote.category));
    }
    output.push_str(&format!("   Added: {} ago\n", format_age(quote.age())));
    output
}

/// Format quotes one block per quote, separated by blank lines
pub fn format_quote_list(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes found.".to_string();
    }

    quotes
        .iter()
        .map(format_quote_details)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Confirmation shown after `quote add`
pub fn format_quote_created(quote: &Quote) -> String {
    let mut output = format!("Added quote #{}\n", quote.id);
    if !quote.author.is_empty() {
        output.push_str(&format!("   Author: {}\n", quote.author));
    }
    if !quote.category.is_empty() {
        output.push_str(&format!("   Category: {}\n", quote.category));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn quote(author: &str, category: &str) -> Quote {
        let now = Utc::now();
        Quote {
            id: 3,
            text: "Be kind.".into(),
            author: author.into(),
            category: category.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_format_quote() {
        assert_eq!(format_quote(&quote("", "")), "\n Be kind.\n");
        assert_eq!(
            format_quote(&quote("Anon", "")),
            "\n Be kind.\n   - Anon\n"
        );
    }

    #[test]
    fn test_format_quote_created() {
        assert_eq!(format_quote_created(&quote("", "")), "Added quote #3\n");
        let output = format_quote_created(&quote("Anon", "life"));
        assert!(output.contains("Author: Anon"));
        assert!(output.contains("Category: life"));
    }

    #[test]
    fn test_format_quote_list() {
        assert_eq!(format_quote_list(&[]), "No quotes found.");
        let output = format_quote_list(&[quote("Anon", "life"), quote("", "")]);
        assert_eq!(output.matches("[#3]").count(), 2);
        assert!(output.contains("Category: life"));
    }
}
