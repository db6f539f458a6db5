//! SQLite BorrowRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::build_page_clause;
use crate::db::utils::current_timestamp;
use crate::db::{
    BorrowRecord, BorrowRepository, DbError, DbResult, Id, NewBorrowRecord, Page,
};

const BORROW_COLUMNS: &str = "id, book_id, borrower_name, borrow_date, return_date";

/// SQLx-backed borrow record repository.
pub struct SqliteBorrowRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> BorrowRepository for SqliteBorrowRepository<'a> {
    async fn create(&self, record: &NewBorrowRecord) -> DbResult<BorrowRecord> {
        // Always stamp the borrow date server-side
        let borrow_date = current_timestamp();

        let result = sqlx::query(
            "INSERT INTO borrow_records (book_id, borrower_name, borrow_date) VALUES (?, ?, ?)",
        )
        .bind(record.book_id)
        .bind(&record.borrower_name)
        .bind(borrow_date)
        .execute(self.pool)
        .await?;

        Ok(BorrowRecord {
            id: result.last_insert_rowid(),
            book_id: record.book_id,
            borrower_name: record.borrower_name.clone(),
            borrow_date,
            return_date: None,
        })
    }

    async fn get(&self, id: Id) -> DbResult<BorrowRecord> {
        let sql = format!("SELECT {} FROM borrow_records WHERE id = ?", BORROW_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Borrow record", id))?;
        Ok(row_to_borrow(&row))
    }

    async fn list(&self, page: Page) -> DbResult<Vec<BorrowRecord>> {
        let sql = format!(
            "SELECT {} FROM borrow_records {}",
            BORROW_COLUMNS,
            build_page_clause(page)
        );

        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;
        Ok(rows.iter().map(row_to_borrow).collect())
    }

    async fn update(&self, id: Id, record: &NewBorrowRecord) -> DbResult<BorrowRecord> {
        let sql = format!(
            "UPDATE borrow_records SET book_id = ?, borrower_name = ? WHERE id = ? RETURNING {}",
            BORROW_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(record.book_id)
            .bind(&record.borrower_name)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Borrow record", id))?;
        Ok(row_to_borrow(&row))
    }

    async fn delete(&self, id: Id) -> DbResult<BorrowRecord> {
        let sql = format!(
            "DELETE FROM borrow_records WHERE id = ? RETURNING {}",
            BORROW_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Borrow record", id))?;
        Ok(row_to_borrow(&row))
    }

    async fn mark_returned(&self, id: Id) -> DbResult<BorrowRecord> {
        // The IS NULL guard makes the return date write-once even under
        // concurrent requests.
        let sql = format!(
            "UPDATE borrow_records SET return_date = ? \
             WHERE id = ? AND return_date IS NULL RETURNING {}",
            BORROW_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(current_timestamp())
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        if let Some(row) = row {
            return Ok(row_to_borrow(&row));
        }

        // Nothing updated: either the record is missing or already returned.
        self.get(id).await?;
        Err(DbError::InvalidState {
            message: "Book already returned".to_string(),
        })
    }
}

/// Convert a database row to a BorrowRecord model.
fn row_to_borrow(row: &sqlx::sqlite::SqliteRow) -> BorrowRecord {
    BorrowRecord {
        id: row.get("id"),
        book_id: row.get("book_id"),
        borrower_name: row.get("borrower_name"),
        borrow_date: row.get("borrow_date"),
        return_date: row.get("return_date"),
    }
}
