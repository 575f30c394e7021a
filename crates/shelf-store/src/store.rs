//! The store: connection ownership, fetch/execute, and the composed
//! validate-then-write path.

use sqlx::sqlite::SqlitePool;
use tracing::{error, warn};

use shelf_sql::{quoted, Statement};
use shelf_validate::{ColumnKind, RowValidator};

use crate::decode::DecoderRegistry;
use crate::error::Result;
use crate::records::{PersonKind, Record, TableId};

/// Owns the database pool and the row-decoder registry.
///
/// Execution failures on the read and write paths are logged and
/// absorbed: reads return no records, writes report zero affected rows.
/// Statement construction and value validation failures, by contrast,
/// are always surfaced as typed errors.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
    decoders: DecoderRegistry,
}

impl Store {
    /// Connects to the database and installs the default decoders.
    ///
    /// # Errors
    ///
    /// Returns a database error if the pool cannot be established.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(url).await?;
        Ok(Self::with_pool(pool, DecoderRegistry::with_defaults()))
    }

    /// Wraps an existing pool with the given decoder registry.
    #[must_use]
    pub const fn with_pool(pool: SqlitePool, decoders: DecoderRegistry) -> Self {
        Self { pool, decoders }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs a read statement and decodes the result rows for `table`.
    ///
    /// Failures never propagate past this boundary: a failed query or a
    /// missing decoder yields an empty vec, and rows that fail to decode
    /// are skipped. Everything absorbed here is logged.
    pub async fn fetch(&self, table: TableId, sql: &str) -> Vec<Record> {
        let Some(decoder) = self.decoders.get(table) else {
            warn!(table = %table, "no row decoder registered");
            return Vec::new();
        };

        let rows = match sqlx::query(sql).fetch_all(&self.pool).await {
            Ok(rows) => rows,
            Err(err) => {
                error!(table = %table, %err, "query failed");
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            match decoder(row) {
                Ok(record) => records.push(record),
                Err(err) => warn!(table = %table, %err, "skipping undecodable row"),
            }
        }
        records
    }

    /// Runs a write statement and returns the affected-row count.
    ///
    /// Returns 0 when execution fails; the failure is logged.
    pub async fn execute(&self, sql: &str) -> u64 {
        match sqlx::query(sql).execute(&self.pool).await {
            Ok(done) => done.rows_affected(),
            Err(err) => {
                error!(%err, "statement failed");
                0
            }
        }
    }

    /// Returns whether the given read statement yields at least one row.
    pub async fn record_exists(&self, sql: &str) -> bool {
        match sqlx::query(sql).fetch_optional(&self.pool).await {
            Ok(row) => row.is_some(),
            Err(err) => {
                error!(%err, "existence check failed");
                false
            }
        }
    }

    /// Looks up an author's or borrower's id from a "First Last" display
    /// name. Returns `None` when the name has no space or no row matches.
    pub async fn person_id(&self, name: &str, kind: PersonKind) -> Option<i64> {
        let (first_name, last_name) = name.split_once(' ')?;
        let table = kind.table();

        let sql = Statement::select()
            .table(table.name())
            .condition(&format!("LAST_NAME = {}", quoted(last_name)))
            .condition(&format!("FIRST_NAME = {}", quoted(first_name)))
            .render()
            .ok()?;

        self.fetch(table, &sql)
            .await
            .into_iter()
            .find_map(|record| match record {
                Record::Author(author) => Some(author.id),
                Record::Borrower(borrower) => Some(borrower.id),
                Record::Book(_) | Record::Loan(_) => None,
            })
    }

    /// Validates a row of raw input values and, when they pass, inserts
    /// them into `table`.
    ///
    /// Column names and order come from the validator's rules. Text
    /// values are wrapped as SQL literals; integer values are rendered
    /// bare.
    ///
    /// # Errors
    ///
    /// Returns the validation failure or, if the specification cannot be
    /// rendered, the render failure. Execution failures follow the
    /// fail-soft write path and report zero affected rows.
    pub async fn validated_insert<S: AsRef<str>>(
        &self,
        table: TableId,
        validator: &RowValidator,
        values: &[S],
    ) -> Result<u64> {
        validator.validate_row(values)?;

        let mut statement = Statement::insert().table(table.name());
        for (rule, value) in validator.rules().iter().zip(values) {
            let value = value.as_ref();
            statement = statement.column(rule.name());
            statement = match rule.kind() {
                ColumnKind::Text => statement.value(&quoted(value)),
                ColumnKind::Integer => statement.value(value),
            };
        }

        let sql = statement.render()?;
        Ok(self.execute(&sql).await)
    }
}
