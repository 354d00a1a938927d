//! Quote repository
//!
//! CRUD for the `quotes` table, plus random selection and first-run seeding.

use chrono::Utc;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::error::{TadaError, TadaResult};
use crate::models::{NewQuote, Quote, QuoteChange, QuoteFilter};

const SELECT_COLUMNS: &str = "SELECT id, text, author, category, created_at, updated_at FROM quotes";

/// Separator between quote text and author in seed strings
pub const SEED_SEPARATOR: &str = " - ";

fn quote_from_row(row: &Row<'_>) -> rusqlite::Result<Quote> {
    Ok(Quote {
        id: row.get(0)?,
        text: row.get(1)?,
        author: row.get(2)?,
        category: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

/// Split a seed string into `(text, author)`.
///
/// Only the first two `" - "`-separated parts are used; anything after a
/// second separator is dropped. Without a separator the author is empty.
pub fn parse_seed_quote(raw: &str) -> (String, String) {
    let mut parts = raw.split(SEED_SEPARATOR);
    let text = parts.next().unwrap_or_default().trim().to_string();
    let author = parts.next().unwrap_or_default().trim().to_string();
    (text, author)
}

/// Repository for quote persistence
pub struct QuoteRepository<'a> {
    conn: &'a Connection,
}

impl<'a> QuoteRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a quote and return it as stored
    pub fn create(&self, new: &NewQuote) -> TadaResult<Quote> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO quotes (text, author, category, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![new.text, new.author, new.category, now],
        )?;

        let id = self.conn.last_insert_rowid();
        info!(id, "created quote");
        self.get(id)
    }

    pub fn get(&self, id: i64) -> TadaResult<Quote> {
        self.conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                quote_from_row,
            )
            .optional()?
            .ok_or_else(|| TadaError::quote_not_found(id))
    }

    /// List quotes matching the filter, newest first
    pub fn list(&self, filter: &QuoteFilter) -> TadaResult<Vec<Quote>> {
        let mut sql = format!("{SELECT_COLUMNS} WHERE 1=1");
        let mut args: Vec<&dyn ToSql> = Vec::new();

        if let Some(author) = &filter.author {
            sql.push_str(" AND author = ?");
            args.push(author);
        }
        if let Some(category) = &filter.category {
            sql.push_str(" AND category = ?");
            args.push(category);
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");

        debug!(?filter, "listing quotes");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(args.as_slice(), quote_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Apply one field change. Affects zero rows silently if the ID is absent.
    pub fn update(&self, id: i64, change: &QuoteChange) -> TadaResult<()> {
        let (column, value) = match change {
            QuoteChange::Text(text) => ("text", text),
            QuoteChange::Author(author) => ("author", author),
            QuoteChange::Category(category) => ("category", category),
        };

        let affected = self.conn.execute(
            &format!("UPDATE quotes SET {column} = ?1, updated_at = ?2 WHERE id = ?3"),
            params![value, Utc::now(), id],
        )?;
        info!(id, column, affected, "updated quote");
        Ok(())
    }

    /// Delete a quote. Deleting an absent ID is not an error.
    pub fn delete(&self, id: i64) -> TadaResult<()> {
        let affected = self
            .conn
            .execute("DELETE FROM quotes WHERE id = ?1", params![id])?;
        info!(id, affected, "deleted quote");
        Ok(())
    }

    /// Pick a quote uniformly at random
    pub fn random(&self) -> TadaResult<Quote> {
        self.conn
            .query_row(
                &format!("{SELECT_COLUMNS} ORDER BY RANDOM() LIMIT 1"),
                [],
                quote_from_row,
            )
            .optional()?
            .ok_or(TadaError::EmptyStore("quotes"))
    }

    pub fn count(&self) -> TadaResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Insert the given seed strings if and only if the table is empty.
    ///
    /// Returns the number of quotes inserted. Entries whose text is empty
    /// after splitting are skipped.
    pub fn seed(&self, quotes: &[String], category: &str) -> TadaResult<usize> {
        if self.count()? > 0 {
            return Ok(0);
        }

        let tx = self.conn.unchecked_transaction()?;
        let now = Utc::now();
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO quotes (text, author, category, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
            )?;
            for raw in quotes {
                let (text, author) = parse_seed_quote(raw);
                if text.is_empty() {
                    continue;
                }
                stmt.execute(params![text, author, category, now])?;
                inserted += 1;
            }
        }
        tx.commit()?;

        info!(inserted, "seeded quotes");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn storage() -> Storage {
        Storage::open_in_memory().unwrap()
    }

    #[test]
    fn test_parse_seed_quote() {
        assert_eq!(
            parse_seed_quote("Stay hungry, stay foolish. - Steve Jobs"),
            ("Stay hungry, stay foolish.".into(), "Steve Jobs".into())
        );
        assert_eq!(
            parse_seed_quote("No author here"),
            ("No author here".into(), String::new())
        );
        // A third part is dropped
        assert_eq!(
            parse_seed_quote("A - B - C"),
            ("A".into(), "B".into())
        );
    }

    #[test]
    fn test_create_and_get() {
        let storage = storage();
        let repo = storage.quotes();
        let quote = repo
            .create(&NewQuote::new("Be kind.", "", "life"))
            .unwrap();

        assert!(quote.id > 0);
        assert_eq!(quote.author, "");
        assert_eq!(repo.get(quote.id).unwrap(), quote);
        assert!(repo.get(quote.id + 1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_filters_and_order() {
        let storage = storage();
        let repo = storage.quotes();
        let a = repo.create(&NewQuote::new("one", "Seneca", "stoic")).unwrap();
        let b = repo.create(&NewQuote::new("two", "Seneca", "")).unwrap();
        let c = repo.create(&NewQuote::new("three", "Jobs", "stoic")).unwrap();

        let ids: Vec<i64> = repo
            .list(&QuoteFilter::all())
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);

        let seneca = repo.list(&QuoteFilter::all().with_author("Seneca")).unwrap();
        assert_eq!(seneca.len(), 2);

        let stoic_seneca = repo
            .list(
                &QuoteFilter::all()
                    .with_author("Seneca")
                    .with_category("stoic"),
            )
            .unwrap();
        assert_eq!(stoic_seneca.len(), 1);
        assert_eq!(stoic_seneca[0].id, a.id);
    }

    #[test]
    fn test_update_fields() {
        let storage = storage();
        let repo = storage.quotes();
        let quote = repo.create(&NewQuote::new("old", "", "")).unwrap();

        repo.update(quote.id, &QuoteChange::Text("new".into())).unwrap();
        repo.update(quote.id, &QuoteChange::Author("Me".into())).unwrap();
        repo.update(quote.id, &QuoteChange::Category("misc".into()))
            .unwrap();

        let updated = repo.get(quote.id).unwrap();
        assert_eq!(updated.text, "new");
        assert_eq!(updated.author, "Me");
        assert_eq!(updated.category, "misc");
        assert!(updated.updated_at >= quote.updated_at);

        // Missing ID is silent
        repo.update(999, &QuoteChange::Text("x".into())).unwrap();
    }

    #[test]
    fn test_delete_is_idempotent() {
        let storage = storage();
        let repo = storage.quotes();
        let quote = repo.create(&NewQuote::new("bye", "", "")).unwrap();
        repo.delete(quote.id).unwrap();
        repo.delete(quote.id).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_random_on_empty_store() {
        let storage = storage();
        let err = storage.quotes().random().unwrap_err();
        assert!(matches!(err, TadaError::EmptyStore("quotes")));
    }

    #[test]
    fn test_random_returns_existing_quote() {
        let storage = storage();
        let repo = storage.quotes();
        let only = repo.create(&NewQuote::new("only one", "", "")).unwrap();
        assert_eq!(repo.random().unwrap(), only);
    }

    #[test]
    fn test_seed_only_when_empty() {
        let storage = storage();
        let repo = storage.quotes();
        let seeds = vec![
            "First - Alice".to_string(),
            "Second".to_string(),
            " - Nobody".to_string(),
        ];

        assert_eq!(repo.seed(&seeds, "motivational").unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 2);

        let all = repo.list(&QuoteFilter::all()).unwrap();
        assert!(all.iter().all(|q| q.category == "motivational"));
        assert!(all.iter().any(|q| q.text == "First" && q.author == "Alice"));
        assert!(all.iter().any(|q| q.text == "Second" && q.author.is_empty()));

        // Second run is a no-op
        assert_eq!(repo.seed(&seeds, "motivational").unwrap(), 0);
        assert_eq!(repo.count().unwrap(), 2);
    }
}
