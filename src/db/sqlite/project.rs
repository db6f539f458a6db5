//! SQLite ProjectRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::build_page_clause;
use crate::db::{DbError, DbResult, Id, NewProject, Page, Project, ProjectRepository};

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    async fn create(&self, project: &NewProject) -> DbResult<Project> {
        let result = sqlx::query("INSERT INTO projects (name, description) VALUES (?, ?)")
            .bind(&project.name)
            .bind(&project.description)
            .execute(self.pool)
            .await?;

        Ok(Project {
            id: result.last_insert_rowid(),
            name: project.name.clone(),
            description: project.description.clone(),
        })
    }

    async fn get(&self, id: Id) -> DbResult<Project> {
        let row = sqlx::query("SELECT id, name, description FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Project", id))?;
        Ok(row_to_project(&row))
    }

    async fn list(&self, page: Page) -> DbResult<Vec<Project>> {
        let sql = format!(
            "SELECT id, name, description FROM projects {}",
            build_page_clause(page)
        );

        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;
        Ok(rows.iter().map(row_to_project).collect())
    }

    async fn update(&self, id: Id, project: &NewProject) -> DbResult<Project> {
        let result = sqlx::query("UPDATE projects SET name = ?, description = ? WHERE id = ?")
            .bind(&project.name)
            .bind(&project.description)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Project", id));
        }

        Ok(Project {
            id,
            name: project.name.clone(),
            description: project.description.clone(),
        })
    }

    async fn delete(&self, id: Id) -> DbResult<Project> {
        let row =
            sqlx::query("DELETE FROM projects WHERE id = ? RETURNING id, name, description")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        let row = row.ok_or_else(|| DbError::not_found("Project", id))?;
        Ok(row_to_project(&row))
    }
}

fn row_to_project(row: &sqlx::sqlite::SqliteRow) -> Project {
    Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    }
}
