//! Shared helper functions for SQLite repositories.

use crate::db::Page;

/// Build the ORDER BY / LIMIT / OFFSET tail shared by every list query.
///
/// Rows always come back in insertion order. Both values are integers, so
/// formatting them into the SQL is safe.
pub fn build_page_clause(page: Page) -> String {
    format!("ORDER BY id ASC LIMIT {} OFFSET {}", page.limit, page.skip)
}

/// Build a WHERE clause joining `conditions` with AND, or nothing when empty.
pub fn build_where_clause(conditions: &[&str]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}
