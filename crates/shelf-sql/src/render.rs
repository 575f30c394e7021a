//! Rendering of statement specifications to SQL text.
//!
//! Rendering is a pure function of the specification value; the only side
//! effect is a `tracing` debug event carrying the produced SQL.

use tracing::debug;

use crate::error::RenderError;
use crate::statement::{Statement, StatementKind};

/// Options controlling how a [`Statement`] is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Join UPDATE SET fragments with the legacy `" AND "` separator
    /// instead of a comma.
    ///
    /// The legacy joiner produces invalid SQL for multi-assignment
    /// updates; it exists only to reproduce historical output byte for
    /// byte.
    pub legacy_update_set_joiner: bool,
}

impl Statement {
    /// Renders this specification with default options.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingTable`] if no table was registered.
    pub fn render(&self) -> Result<String, RenderError> {
        self.render_with(RenderOptions::default())
    }

    /// Renders this specification with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingTable`] if no table was registered.
    pub fn render_with(&self, options: RenderOptions) -> Result<String, RenderError> {
        let table = self
            .tables
            .first()
            .ok_or(RenderError::MissingTable { kind: self.kind })?;

        let sql = match self.kind {
            StatementKind::Select => self.render_select(table),
            StatementKind::Insert => self.render_insert(table),
            StatementKind::Update => self.render_update(table, options),
            StatementKind::Delete => self.render_delete(table),
        };

        debug!(kind = %self.kind, sql = %sql, "rendered statement");
        Ok(sql)
    }

    fn render_select(&self, table: &str) -> String {
        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.columns.join(","));
        }
        sql.push_str(" FROM ");
        sql.push_str(table);
        sql.push(' ');
        sql.push_str(&where_clause(&self.conditions));
        if !self.orderings.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.orderings.join(","));
        }
        sql
    }

    fn render_insert(&self, table: &str) -> String {
        let mut sql = format!("INSERT INTO {table}(");
        sql.push_str(&self.columns.join(","));
        sql.push_str(") VALUES(");
        sql.push_str(&self.values.join(","));
        sql.push(')');
        sql.push_str(&where_clause(&self.conditions));
        sql
    }

    fn render_update(&self, table: &str, options: RenderOptions) -> String {
        let joiner = if options.legacy_update_set_joiner {
            " AND "
        } else {
            ","
        };
        let mut sql = format!("UPDATE {table} SET ");
        sql.push_str(&self.values.join(joiner));
        sql.push_str(&where_clause(&self.conditions));
        sql
    }

    fn render_delete(&self, table: &str) -> String {
        let mut sql = format!("DELETE FROM {table}");
        sql.push_str(&where_clause(&self.conditions));
        sql
    }
}

/// Joins condition fragments into a WHERE clause, or nothing when the
/// list is empty.
fn where_clause(conditions: &[String]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_without_columns_degrades_to_star() {
        let sql = Statement::select().table("AUTHOR").render().unwrap();
        assert_eq!(sql, "SELECT * FROM AUTHOR ");
    }

    #[test]
    fn select_round_trip() {
        let sql = Statement::select()
            .table("AUTHOR")
            .columns(&["FIRST_NAME", "LAST_NAME"])
            .condition("LAST_NAME = 'Smith'")
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "SELECT FIRST_NAME,LAST_NAME FROM AUTHOR  WHERE LAST_NAME = 'Smith'"
        );
    }

    #[test]
    fn select_distinct() {
        let sql = Statement::select()
            .distinct()
            .table("BOOK")
            .column("GENRE")
            .render()
            .unwrap();

        assert_eq!(sql, "SELECT DISTINCT GENRE FROM BOOK ");
    }

    #[test]
    fn where_fragments_join_with_and() {
        let sql = Statement::select()
            .table("BORROWER")
            .conditions(&["LAST_NAME = 'Smith'", "FIRST_NAME = 'Jane'"])
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "SELECT * FROM BORROWER  WHERE LAST_NAME = 'Smith' AND FIRST_NAME = 'Jane'"
        );
    }

    #[test]
    fn select_renders_orderings() {
        let sql = Statement::select()
            .table("BOOK")
            .columns(&["TITLE", "ISBN"])
            .orderings(&["TITLE ASC", "ISBN DESC"])
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "SELECT TITLE,ISBN FROM BOOK  ORDER BY TITLE ASC,ISBN DESC"
        );
    }

    #[test]
    fn insert_round_trip() {
        let sql = Statement::insert()
            .table("BOOK")
            .columns(&["TITLE", "ISBN"])
            .values(&["'Dune'", "'1234'"])
            .render()
            .unwrap();

        assert_eq!(sql, "INSERT INTO BOOK(TITLE,ISBN) VALUES('Dune','1234')");
    }

    #[test]
    fn insert_keeps_a_supplied_where_clause() {
        // Odd but accepted: conditions on an INSERT are rendered verbatim.
        let sql = Statement::insert()
            .table("BOOK")
            .column("TITLE")
            .value("'Dune'")
            .condition("ISBN = '1234'")
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "INSERT INTO BOOK(TITLE) VALUES('Dune') WHERE ISBN = '1234'"
        );
    }

    #[test]
    fn update_joins_assignments_with_commas_by_default() {
        let sql = Statement::update()
            .table("BORROWER")
            .values(&["EMAIL = 'j@example.com'", "COMMENT = 'ok'"])
            .condition("BORROWER_ID = 7")
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "UPDATE BORROWER SET EMAIL = 'j@example.com',COMMENT = 'ok' WHERE BORROWER_ID = 7"
        );
    }

    #[test]
    fn update_legacy_joiner_reproduces_historical_output() {
        let options = RenderOptions {
            legacy_update_set_joiner: true,
        };
        let sql = Statement::update()
            .table("BORROWER")
            .values(&["EMAIL = 'j@example.com'", "COMMENT = 'ok'"])
            .condition("BORROWER_ID = 7")
            .render_with(options)
            .unwrap();

        assert_eq!(
            sql,
            "UPDATE BORROWER SET EMAIL = 'j@example.com' AND COMMENT = 'ok' WHERE BORROWER_ID = 7"
        );
    }

    #[test]
    fn delete_with_and_without_conditions() {
        let bare = Statement::delete().table("BOOK_LOAN").render().unwrap();
        assert_eq!(bare, "DELETE FROM BOOK_LOAN");

        let filtered = Statement::delete()
            .table("BOOK_LOAN")
            .condition("LOAN_ID = 3")
            .render()
            .unwrap();
        assert_eq!(filtered, "DELETE FROM BOOK_LOAN WHERE LOAN_ID = 3");
    }

    #[test]
    fn rendering_without_a_table_is_an_error() {
        let err = Statement::select().render().unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingTable {
                kind: StatementKind::Select
            }
        );
    }

    #[test]
    fn specifications_render_repeatedly() {
        let stmt = Statement::select().table("AUTHOR");
        assert_eq!(stmt.render().unwrap(), stmt.render().unwrap());
    }

    #[test]
    fn extra_tables_are_ignored() {
        let sql = Statement::select()
            .table("AUTHOR")
            .table("BOOK")
            .render()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM AUTHOR ");
    }
}
