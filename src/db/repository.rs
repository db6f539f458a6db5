//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//!
//! Methods return `Send` futures so handlers generic over a database can be
//! served by axum on a multi-threaded runtime.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{
        Author, Book, BorrowRecord, Id, NewAuthor, NewBook, NewBorrowRecord, NewProject, NewTask,
        NewUser, Page, Project, Task, TaskQuery, User,
    },
};

/// Repository for Author operations.
pub trait AuthorRepository {
    fn create(&self, author: &NewAuthor) -> impl Future<Output = DbResult<Author>> + Send;

    fn get(&self, id: Id) -> impl Future<Output = DbResult<Author>> + Send;

    fn list(&self, page: Page) -> impl Future<Output = DbResult<Vec<Author>>> + Send;

    /// Replace all mutable fields of an author.
    fn update(&self, id: Id, author: &NewAuthor)
    -> impl Future<Output = DbResult<Author>> + Send;

    /// Delete an author, returning the removed row.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<Author>> + Send;
}

/// Repository for Book operations.
pub trait BookRepository {
    fn create(&self, book: &NewBook) -> impl Future<Output = DbResult<Book>> + Send;

    fn get(&self, id: Id) -> impl Future<Output = DbResult<Book>> + Send;

    fn list(&self, page: Page) -> impl Future<Output = DbResult<Vec<Book>>> + Send;

    fn update(&self, id: Id, book: &NewBook) -> impl Future<Output = DbResult<Book>> + Send;

    fn delete(&self, id: Id) -> impl Future<Output = DbResult<Book>> + Send;
}

/// Repository for BorrowRecord operations.
pub trait BorrowRepository {
    /// Create a borrow record stamped with the current time.
    fn create(
        &self,
        record: &NewBorrowRecord,
    ) -> impl Future<Output = DbResult<BorrowRecord>> + Send;

    fn get(&self, id: Id) -> impl Future<Output = DbResult<BorrowRecord>> + Send;

    fn list(&self, page: Page) -> impl Future<Output = DbResult<Vec<BorrowRecord>>> + Send;

    /// Replace book and borrower. Borrow and return dates are left untouched.
    fn update(
        &self,
        id: Id,
        record: &NewBorrowRecord,
    ) -> impl Future<Output = DbResult<BorrowRecord>> + Send;

    fn delete(&self, id: Id) -> impl Future<Output = DbResult<BorrowRecord>> + Send;

    /// Stamp the return date.
    ///
    /// Fails with `NotFound` for a missing record and `InvalidState` when the
    /// record was already returned.
    fn mark_returned(&self, id: Id) -> impl Future<Output = DbResult<BorrowRecord>> + Send;
}

/// Repository for User operations.
pub trait UserRepository {
    fn create(&self, user: &NewUser) -> impl Future<Output = DbResult<User>> + Send;

    fn get(&self, id: Id) -> impl Future<Output = DbResult<User>> + Send;

    fn list(&self, page: Page) -> impl Future<Output = DbResult<Vec<User>>> + Send;

    fn update(&self, id: Id, user: &NewUser) -> impl Future<Output = DbResult<User>> + Send;

    fn delete(&self, id: Id) -> impl Future<Output = DbResult<User>> + Send;
}

/// Repository for Project operations.
pub trait ProjectRepository {
    fn create(&self, project: &NewProject) -> impl Future<Output = DbResult<Project>> + Send;

    fn get(&self, id: Id) -> impl Future<Output = DbResult<Project>> + Send;

    fn list(&self, page: Page) -> impl Future<Output = DbResult<Vec<Project>>> + Send;

    fn update(
        &self,
        id: Id,
        project: &NewProject,
    ) -> impl Future<Output = DbResult<Project>> + Send;

    fn delete(&self, id: Id) -> impl Future<Output = DbResult<Project>> + Send;
}

/// Repository for Task operations.
pub trait TaskRepository {
    fn create(&self, task: &NewTask) -> impl Future<Output = DbResult<Task>> + Send;

    fn get(&self, id: Id) -> impl Future<Output = DbResult<Task>> + Send;

    /// List tasks matching every filter set in `query`.
    fn list(&self, query: &TaskQuery) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    fn update(&self, id: Id, task: &NewTask) -> impl Future<Output = DbResult<Task>> + Send;

    fn delete(&self, id: Id) -> impl Future<Output = DbResult<Task>> + Send;
}

/// Database backing the library service.
pub trait LibraryDatabase: Send + Sync + 'static {
    type Authors<'a>: AuthorRepository + Send + Sync
    where
        Self: 'a;
    type Books<'a>: BookRepository + Send + Sync
    where
        Self: 'a;
    type Borrows<'a>: BorrowRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    fn authors(&self) -> Self::Authors<'_>;

    fn books(&self) -> Self::Books<'_>;

    fn borrows(&self) -> Self::Borrows<'_>;
}

/// Database backing the task manager service.
pub trait TaskManagerDatabase: Send + Sync + 'static {
    type Users<'a>: UserRepository + Send + Sync
    where
        Self: 'a;
    type Projects<'a>: ProjectRepository + Send + Sync
    where
        Self: 'a;
    type Tasks<'a>: TaskRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    fn users(&self) -> Self::Users<'_>;

    fn projects(&self) -> Self::Projects<'_>;

    fn tasks(&self) -> Self::Tasks<'_>;
}
