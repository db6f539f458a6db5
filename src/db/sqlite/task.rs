//! SQLite TaskRepository implementation.

use std::str::FromStr;

use sqlx::{Row, SqlitePool};

use super::helpers::{build_page_clause, build_where_clause};
use crate::db::{
    DbError, DbResult, Id, NewTask, Task, TaskPriority, TaskQuery, TaskRepository, TaskStatus,
};

const TASK_COLUMNS: &str =
    "id, title, description, status, priority, due_date, project_id, assigned_to_id";

/// SQLx-backed task repository.
pub struct SqliteTaskRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TaskRepository for SqliteTaskRepository<'a> {
    async fn create(&self, task: &NewTask) -> DbResult<Task> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, description, status, priority, due_date, project_id, assigned_to_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.to_string())
        .bind(task.priority.to_string())
        .bind(task.due_date)
        .bind(task.project_id)
        .bind(task.assigned_to_id)
        .execute(self.pool)
        .await?;

        Ok(with_id(result.last_insert_rowid(), task))
    }

    async fn get(&self, id: Id) -> DbResult<Task> {
        let sql = format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Task", id))?;
        row_to_task(&row)
    }

    async fn list(&self, query: &TaskQuery) -> DbResult<Vec<Task>> {
        // Build filter conditions
        let mut conditions: Vec<&str> = Vec::new();
        if query.status.is_some() {
            conditions.push("status = ?");
        }
        if query.priority.is_some() {
            conditions.push("priority = ?");
        }
        if query.project_id.is_some() {
            conditions.push("project_id = ?");
        }

        let sql = format!(
            "SELECT {} FROM tasks {} {}",
            TASK_COLUMNS,
            build_where_clause(&conditions),
            build_page_clause(query.page)
        );

        // Bind in the same order the conditions were pushed
        let mut query_builder = sqlx::query(&sql);
        if let Some(status) = query.status {
            query_builder = query_builder.bind(status.to_string());
        }
        if let Some(priority) = query.priority {
            query_builder = query_builder.bind(priority.to_string());
        }
        if let Some(project_id) = query.project_id {
            query_builder = query_builder.bind(project_id);
        }

        let rows = query_builder.fetch_all(self.pool).await?;
        rows.iter().map(row_to_task).collect()
    }

    async fn update(&self, id: Id, task: &NewTask) -> DbResult<Task> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, status = ?, priority = ?, due_date = ?,
                project_id = ?, assigned_to_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.to_string())
        .bind(task.priority.to_string())
        .bind(task.due_date)
        .bind(task.project_id)
        .bind(task.assigned_to_id)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Task", id));
        }

        Ok(with_id(id, task))
    }

    async fn delete(&self, id: Id) -> DbResult<Task> {
        let sql = format!("DELETE FROM tasks WHERE id = ? RETURNING {}", TASK_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::not_found("Task", id))?;
        row_to_task(&row)
    }
}

fn with_id(id: Id, task: &NewTask) -> Task {
    Task {
        id,
        title: task.title.clone(),
        description: task.description.clone(),
        status: task.status,
        priority: task.priority,
        due_date: task.due_date,
        project_id: task.project_id,
        assigned_to_id: task.assigned_to_id,
    }
}

/// Convert a database row to a Task model.
fn row_to_task(row: &sqlx::sqlite::SqliteRow) -> DbResult<Task> {
    let status: String = row.get("status");
    let priority: String = row.get("priority");

    Ok(Task {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        status: TaskStatus::from_str(&status).map_err(|message| DbError::Database { message })?,
        priority: TaskPriority::from_str(&priority)
            .map_err(|message| DbError::Database { message })?,
        due_date: row.get("due_date"),
        project_id: row.get("project_id"),
        assigned_to_id: row.get("assigned_to_id"),
    })
}
