//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing storage backends to be swapped without changing handlers.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Item, Author, Book, BorrowRecord, User, Project, Task)
//! - `repository`: Trait definitions for data access
//! - `memory`: In-process item store
//! - `sqlite`: SQLx-backed implementations of the repository traits

mod error;
mod memory;
mod models;
mod repository;
pub mod sqlite;
pub mod utils;

#[cfg(test)]
mod memory_test;

pub use error::{DbError, DbResult};
pub use memory::ItemStore;
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteLibraryDatabase, SqliteTaskManagerDatabase};
