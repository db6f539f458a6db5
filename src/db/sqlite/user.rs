//! SQLite UserRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::build_page_clause;
use crate::db::{DbError, DbResult, Id, NewUser, Page, User, UserRepository};

/// SQLx-backed user repository.
pub struct SqliteUserRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> UserRepository for SqliteUserRepository<'a> {
    async fn create(&self, user: &NewUser) -> DbResult<User> {
        let result = sqlx::query("INSERT INTO users (username, email) VALUES (?, ?)")
            .bind(&user.username)
            .bind(&user.email)
            .execute(self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: user.username.clone(),
            email: user.email.clone(),
        })
    }

    async fn get(&self, id: Id) -> DbResult<User> {
        let row = sqlx::query("SELECT id, username, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("User", id))?;
        Ok(row_to_user(&row))
    }

    async fn list(&self, page: Page) -> DbResult<Vec<User>> {
        let sql = format!(
            "SELECT id, username, email FROM users {}",
            build_page_clause(page)
        );

        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;
        Ok(rows.iter().map(row_to_user).collect())
    }

    async fn update(&self, id: Id, user: &NewUser) -> DbResult<User> {
        let result = sqlx::query("UPDATE users SET username = ?, email = ? WHERE id = ?")
            .bind(&user.username)
            .bind(&user.email)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", id));
        }

        Ok(User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
        })
    }

    async fn delete(&self, id: Id) -> DbResult<User> {
        let row = sqlx::query("DELETE FROM users WHERE id = ? RETURNING id, username, email")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("User", id))?;
        Ok(row_to_user(&row))
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
    }
}
