//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod author;
mod book;
mod borrow;
mod connection;
mod helpers;
mod project;
mod task;
mod user;

#[cfg(test)]
mod author_test;
#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod user_test;

pub use author::SqliteAuthorRepository;
pub use book::SqliteBookRepository;
pub use borrow::SqliteBorrowRepository;
pub use connection::{SqliteLibraryDatabase, SqliteTaskManagerDatabase};
pub use project::SqliteProjectRepository;
pub use task::SqliteTaskRepository;
pub use user::SqliteUserRepository;
