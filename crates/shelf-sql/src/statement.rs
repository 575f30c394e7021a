//! Statement specification values.
//!
//! Each constructor starts from an empty specification, so beginning a new
//! statement can never leak clauses accumulated for a previous one. All
//! accumulator methods consume and return the value, preserve insertion
//! order and never de-duplicate.

use std::fmt;

/// The kind of statement a specification renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// A `SELECT` statement.
    Select,
    /// An `INSERT` statement.
    Insert,
    /// An `UPDATE` statement.
    Update,
    /// A `DELETE` statement.
    Delete,
}

impl StatementKind {
    /// Returns the SQL keyword for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable specification of a single SQL statement.
///
/// Condition, ordering and value fragments are pre-rendered text supplied
/// by the caller; string literals inside them must already be quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub(crate) kind: StatementKind,
    pub(crate) tables: Vec<String>,
    pub(crate) columns: Vec<String>,
    pub(crate) conditions: Vec<String>,
    pub(crate) orderings: Vec<String>,
    pub(crate) values: Vec<String>,
    pub(crate) distinct: bool,
}

impl Statement {
    const fn with_kind(kind: StatementKind) -> Self {
        Self {
            kind,
            tables: Vec::new(),
            columns: Vec::new(),
            conditions: Vec::new(),
            orderings: Vec::new(),
            values: Vec::new(),
            distinct: false,
        }
    }

    /// Begins a SELECT specification.
    #[must_use]
    pub const fn select() -> Self {
        Self::with_kind(StatementKind::Select)
    }

    /// Begins an INSERT specification.
    #[must_use]
    pub const fn insert() -> Self {
        Self::with_kind(StatementKind::Insert)
    }

    /// Begins an UPDATE specification.
    #[must_use]
    pub const fn update() -> Self {
        Self::with_kind(StatementKind::Update)
    }

    /// Begins a DELETE specification.
    #[must_use]
    pub const fn delete() -> Self {
        Self::with_kind(StatementKind::Delete)
    }

    /// Returns the kind of this specification.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Returns the table the statement renders against, if one was
    /// registered.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.tables.first().map(String::as_str)
    }

    /// Registers a table.
    ///
    /// Only the first registered table is rendered; further calls are
    /// accepted but have no effect on the output.
    #[must_use]
    pub fn table(mut self, name: &str) -> Self {
        self.tables.push(String::from(name));
        self
    }

    /// Appends a column name.
    #[must_use]
    pub fn column(mut self, name: &str) -> Self {
        self.columns.push(String::from(name));
        self
    }

    /// Appends several column names, preserving order.
    #[must_use]
    pub fn columns(mut self, names: &[&str]) -> Self {
        self.columns.extend(names.iter().map(|s| String::from(*s)));
        self
    }

    /// Appends a pre-rendered condition fragment.
    #[must_use]
    pub fn condition(mut self, fragment: &str) -> Self {
        self.conditions.push(String::from(fragment));
        self
    }

    /// Appends several condition fragments, preserving order.
    #[must_use]
    pub fn conditions(mut self, fragments: &[&str]) -> Self {
        self.conditions
            .extend(fragments.iter().map(|s| String::from(*s)));
        self
    }

    /// Appends an ordering fragment, e.g. `"LAST_NAME DESC"`.
    #[must_use]
    pub fn ordering(mut self, fragment: &str) -> Self {
        self.orderings.push(String::from(fragment));
        self
    }

    /// Appends several ordering fragments, preserving order.
    #[must_use]
    pub fn orderings(mut self, fragments: &[&str]) -> Self {
        self.orderings
            .extend(fragments.iter().map(|s| String::from(*s)));
        self
    }

    /// Appends a pre-rendered value fragment.
    ///
    /// For INSERT the fragments pair positionally with the registered
    /// columns; for UPDATE each fragment is a whole `column=literal`
    /// assignment.
    #[must_use]
    pub fn value(mut self, fragment: &str) -> Self {
        self.values.push(String::from(fragment));
        self
    }

    /// Appends several value fragments, preserving order.
    #[must_use]
    pub fn values(mut self, fragments: &[&str]) -> Self {
        self.values
            .extend(fragments.iter().map(|s| String::from(*s)));
        self
    }

    /// Marks a SELECT as DISTINCT. Ignored by the other kinds.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}
