//! Row decoders and the table-to-decoder registry.
//!
//! Each table maps to a function that decodes one result row into a
//! [`Record`] by positional column access. The registry is populated once
//! and stays open for extension: registering a decoder for a new table
//! touches no central dispatch.

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::records::{Author, Book, Borrower, LoanRow, Record, TableId};

/// Decodes one result row into a [`Record`].
pub type RowDecoder = fn(&SqliteRow) -> Result<Record, sqlx::Error>;

/// Maps table identifiers to row decoders.
#[derive(Debug, Clone, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<TableId, RowDecoder>,
}

impl DecoderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in decoders registered.
    ///
    /// `BOOK_AUTHOR` has no decoder: nothing fetches whole rows from the
    /// join table.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new()
            .register(TableId::Author, decode_author)
            .register(TableId::Book, decode_book)
            .register(TableId::Borrower, decode_borrower)
            .register(TableId::BookLoan, decode_loan)
    }

    /// Registers (or replaces) the decoder for a table.
    #[must_use]
    pub fn register(mut self, table: TableId, decoder: RowDecoder) -> Self {
        self.decoders.insert(table, decoder);
        self
    }

    /// Returns the decoder for a table, if one is registered.
    #[must_use]
    pub fn get(&self, table: TableId) -> Option<RowDecoder> {
        self.decoders.get(&table).copied()
    }
}

fn decode_author(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    Ok(Record::Author(Author {
        id: row.try_get(0)?,
        first_name: row.try_get(1)?,
        last_name: row.try_get(2)?,
    }))
}

fn decode_book(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    Ok(Record::Book(Book {
        id: row.try_get(0)?,
        title: row.try_get(1)?,
        isbn: row.try_get(2)?,
        genre: row.try_get(3)?,
        publisher: row.try_get(4)?,
        on_loan: row.try_get(5)?,
    }))
}

fn decode_borrower(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    Ok(Record::Borrower(Borrower {
        id: row.try_get(0)?,
        first_name: row.try_get(1)?,
        last_name: row.try_get(2)?,
        email: row.try_get(3)?,
    }))
}

fn decode_loan(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    let first_name: String = row.try_get(0)?;
    let last_name: String = row.try_get(1)?;
    Ok(Record::Loan(LoanRow {
        borrower_name: format!("{first_name} {last_name}"),
        email: row.try_get(2)?,
        comment: row.try_get(3)?,
        date_out: row.try_get(4)?,
        date_returned: row.try_get(5)?,
        isbn: row.try_get(6)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_fetchable_tables() {
        let registry = DecoderRegistry::with_defaults();
        assert!(registry.get(TableId::Author).is_some());
        assert!(registry.get(TableId::Book).is_some());
        assert!(registry.get(TableId::Borrower).is_some());
        assert!(registry.get(TableId::BookLoan).is_some());
        assert!(registry.get(TableId::BookAuthor).is_none());
    }

    #[test]
    fn registration_replaces() {
        let registry = DecoderRegistry::new().register(TableId::BookAuthor, decode_author);
        assert!(registry.get(TableId::BookAuthor).is_some());
    }
}
