//! Domain records and table identifiers.
//!
//! Records are plain data carriers; their field order matches the
//! positional column order of the result sets they are decoded from.

use std::fmt;

use chrono::NaiveDate;

/// Identifies one of the library tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// The `AUTHOR` table.
    Author,
    /// The `BOOK` table.
    Book,
    /// The `BORROWER` table.
    Borrower,
    /// The `BOOK_AUTHOR` join table.
    BookAuthor,
    /// The `BOOK_LOAN` table.
    BookLoan,
}

impl TableId {
    /// Returns the SQL table name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Author => "AUTHOR",
            Self::Book => "BOOK",
            Self::Borrower => "BORROWER",
            Self::BookAuthor => "BOOK_AUTHOR",
            Self::BookLoan => "BOOK_LOAN",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two kinds of people the library tracks by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    /// A book author.
    Author,
    /// A registered borrower.
    Borrower,
}

impl PersonKind {
    /// Returns the table holding this kind of person.
    #[must_use]
    pub const fn table(&self) -> TableId {
        match self {
            Self::Author => TableId::Author,
            Self::Borrower => TableId::Borrower,
        }
    }
}

/// A row of the `AUTHOR` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Primary key.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// A row of the `BOOK` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Primary key.
    pub id: i64,
    /// Title.
    pub title: String,
    /// ISBN, stored as text.
    pub isbn: String,
    /// Genre label.
    pub genre: String,
    /// Publisher name.
    pub publisher: String,
    /// Whether the book is currently lent out.
    pub on_loan: bool,
}

/// A row of the `BORROWER` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borrower {
    /// Primary key.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
}

/// A denormalized loan listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanRow {
    /// Borrower display name ("First Last").
    pub borrower_name: String,
    /// Borrower email.
    pub email: String,
    /// Free-form comment.
    pub comment: String,
    /// Date the book went out.
    pub date_out: Option<NaiveDate>,
    /// Date the book came back, if it has.
    pub date_returned: Option<NaiveDate>,
    /// ISBN of the lent book.
    pub isbn: String,
}

/// A decoded result row from one of the library tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// An `AUTHOR` row.
    Author(Author),
    /// A `BOOK` row.
    Book(Book),
    /// A `BORROWER` row.
    Borrower(Borrower),
    /// A `BOOK_LOAN` listing row.
    Loan(LoanRow),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names() {
        assert_eq!(TableId::Author.name(), "AUTHOR");
        assert_eq!(TableId::BookLoan.name(), "BOOK_LOAN");
        assert_eq!(TableId::BookAuthor.to_string(), "BOOK_AUTHOR");
    }

    #[test]
    fn person_kind_maps_to_its_table() {
        assert_eq!(PersonKind::Author.table(), TableId::Author);
        assert_eq!(PersonKind::Borrower.table(), TableId::Borrower);
    }
}
