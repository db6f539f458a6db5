//! Task manager service: users, projects and tasks backed by SQLite.

mod projects;
mod routes;
mod tasks;
mod users;

#[cfg(test)]
mod tasks_test;

pub use projects::*;
pub use routes::{ApiDoc, create_router};
pub use tasks::*;
pub use users::*;
