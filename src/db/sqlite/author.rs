//! SQLite AuthorRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::build_page_clause;
use crate::db::{Author, AuthorRepository, DbError, DbResult, Id, NewAuthor, Page};

/// SQLx-backed author repository.
pub struct SqliteAuthorRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> AuthorRepository for SqliteAuthorRepository<'a> {
    async fn create(&self, author: &NewAuthor) -> DbResult<Author> {
        let result = sqlx::query("INSERT INTO authors (name, birth_year) VALUES (?, ?)")
            .bind(&author.name)
            .bind(author.birth_year)
            .execute(self.pool)
            .await?;

        Ok(Author {
            id: result.last_insert_rowid(),
            name: author.name.clone(),
            birth_year: author.birth_year,
        })
    }

    async fn get(&self, id: Id) -> DbResult<Author> {
        let row = sqlx::query("SELECT id, name, birth_year FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Author", id))?;
        Ok(row_to_author(&row))
    }

    async fn list(&self, page: Page) -> DbResult<Vec<Author>> {
        let sql = format!(
            "SELECT id, name, birth_year FROM authors {}",
            build_page_clause(page)
        );

        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;
        Ok(rows.iter().map(row_to_author).collect())
    }

    async fn update(&self, id: Id, author: &NewAuthor) -> DbResult<Author> {
        let result = sqlx::query("UPDATE authors SET name = ?, birth_year = ? WHERE id = ?")
            .bind(&author.name)
            .bind(author.birth_year)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Author", id));
        }

        Ok(Author {
            id,
            name: author.name.clone(),
            birth_year: author.birth_year,
        })
    }

    async fn delete(&self, id: Id) -> DbResult<Author> {
        let row = sqlx::query("DELETE FROM authors WHERE id = ? RETURNING id, name, birth_year")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Author", id))?;
        Ok(row_to_author(&row))
    }
}

fn row_to_author(row: &sqlx::sqlite::SqliteRow) -> Author {
    Author {
        id: row.get("id"),
        name: row.get("name"),
        birth_year: row.get("birth_year"),
    }
}
