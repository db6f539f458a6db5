//! Domain models for the library and task manager databases, plus the
//! in-memory item type.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Query Types for Pagination and Filtering
// =============================================================================

/// Default page size for list queries.
pub const DEFAULT_LIMIT: u32 = 100;

/// Offset/limit window applied to list queries. Rows are always returned in
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of rows to skip.
    pub skip: u32,
    /// Maximum number of rows to return.
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query for Tasks - pagination + exact-match filters (AND logic).
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub page: Page,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub project_id: Option<Id>,
}

/// Integer row id assigned by SQLite on insert.
pub type Id = i64;

// =============================================================================
// Items (in-memory)
// =============================================================================

/// An entry in the in-memory item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "A small widget")]
    pub description: Option<String>,
}

// =============================================================================
// Library
// =============================================================================

/// A person who wrote books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Id,
    pub name: String,
    pub birth_year: i32,
}

/// Fields supplied when creating or replacing an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub birth_year: i32,
}

/// A book in the library catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Id,
    pub title: String,
    pub isbn: String,
    pub publication_year: i32,
    pub author_id: Id,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub publication_year: i32,
    pub author_id: Id,
}

/// A single lending of a book.
///
/// `borrow_date` is set when the record is created and `return_date` is set
/// exactly once, when the book comes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: Id,
    pub book_id: Id,
    pub borrower_name: String,
    pub borrow_date: NaiveDateTime,
    pub return_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBorrowRecord {
    pub book_id: Id,
    pub borrower_name: String,
}

// =============================================================================
// Task manager
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

/// A unit of work inside a project, optionally assigned to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: NaiveDateTime,
    pub project_id: Id,
    pub assigned_to_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: NaiveDateTime,
    pub project_id: Id,
    pub assigned_to_id: Option<Id>,
}

/// Status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "TODO"),
            TaskStatus::InProgress => write!(f, "IN_PROGRESS"),
            TaskStatus::Done => write!(f, "DONE"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(TaskStatus::Todo),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            _ => Err(format!("Unknown task status: {}", s)),
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "LOW"),
            TaskPriority::Medium => write!(f, "MEDIUM"),
            TaskPriority::High => write!(f, "HIGH"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(TaskPriority::Low),
            "MEDIUM" => Ok(TaskPriority::Medium),
            "HIGH" => Ok(TaskPriority::High),
            _ => Err(format!("Unknown task priority: {}", s)),
        }
    }
}
