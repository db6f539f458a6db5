//! SQLite BookRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::build_page_clause;
use crate::db::{Book, BookRepository, DbError, DbResult, Id, NewBook, Page};

const BOOK_COLUMNS: &str = "id, title, isbn, publication_year, author_id";

/// SQLx-backed book repository.
pub struct SqliteBookRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> BookRepository for SqliteBookRepository<'a> {
    async fn create(&self, book: &NewBook) -> DbResult<Book> {
        let result = sqlx::query(
            "INSERT INTO books (title, isbn, publication_year, author_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.publication_year)
        .bind(book.author_id)
        .execute(self.pool)
        .await?;

        Ok(with_id(result.last_insert_rowid(), book))
    }

    async fn get(&self, id: Id) -> DbResult<Book> {
        let sql = format!("SELECT {} FROM books WHERE id = ?", BOOK_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Book", id))?;
        Ok(row_to_book(&row))
    }

    async fn list(&self, page: Page) -> DbResult<Vec<Book>> {
        let sql = format!(
            "SELECT {} FROM books {}",
            BOOK_COLUMNS,
            build_page_clause(page)
        );

        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;
        Ok(rows.iter().map(row_to_book).collect())
    }

    async fn update(&self, id: Id, book: &NewBook) -> DbResult<Book> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, isbn = ?, publication_year = ?, author_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.publication_year)
        .bind(book.author_id)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", id));
        }

        Ok(with_id(id, book))
    }

    async fn delete(&self, id: Id) -> DbResult<Book> {
        let sql = format!("DELETE FROM books WHERE id = ? RETURNING {}", BOOK_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Book", id))?;
        Ok(row_to_book(&row))
    }
}

fn with_id(id: Id, book: &NewBook) -> Book {
    Book {
        id,
        title: book.title.clone(),
        isbn: book.isbn.clone(),
        publication_year: book.publication_year,
        author_id: book.author_id,
    }
}

/// Convert a database row to a Book model.
fn row_to_book(row: &sqlx::sqlite::SqliteRow) -> Book {
    Book {
        id: row.get("id"),
        title: row.get("title"),
        isbn: row.get("isbn"),
        publication_year: row.get("publication_year"),
        author_id: row.get("author_id"),
    }
}
