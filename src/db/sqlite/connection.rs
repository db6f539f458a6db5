//! SQLite database connection and migration management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::{
    SqliteAuthorRepository, SqliteBookRepository, SqliteBorrowRepository,
    SqliteProjectRepository, SqliteTaskRepository, SqliteUserRepository,
};
use crate::db::{DbError, DbResult, LibraryDatabase, TaskManagerDatabase};

// Embed migrations from data/sql/sqlite/ at compile time
static LIBRARY_MIGRATIONS: Migrator = sqlx::migrate!("data/sql/sqlite/library");
static TASK_MANAGER_MIGRATIONS: Migrator = sqlx::migrate!("data/sql/sqlite/taskmanager");

/// Open a file-backed pool, creating the file if needed.
///
/// Foreign keys stay off: reference columns are informational and deletes
/// never cascade.
async fn open_pool<P: AsRef<Path>>(path: P) -> DbResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| DbError::Connection {
            message: e.to_string(),
        })
}

/// Open an in-memory pool.
///
/// Every `:memory:` connection is its own database, so the pool is pinned to
/// one connection that is never recycled.
async fn in_memory_pool() -> DbResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| DbError::Connection {
            message: e.to_string(),
        })
}

async fn run_migrations(migrator: &Migrator, pool: &SqlitePool) -> DbResult<()> {
    migrator.run(pool).await.map_err(|e| DbError::Migration {
        message: e.to_string(),
    })
}

/// SQLite database for the library service.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub struct SqliteLibraryDatabase {
    pool: SqlitePool,
}

impl SqliteLibraryDatabase {
    /// Open a database at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        Ok(Self {
            pool: open_pool(path).await?,
        })
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        Ok(Self {
            pool: in_memory_pool().await?,
        })
    }

    /// Underlying pool, for tests and ad-hoc queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl LibraryDatabase for SqliteLibraryDatabase {
    type Authors<'a> = SqliteAuthorRepository<'a>;
    type Books<'a> = SqliteBookRepository<'a>;
    type Borrows<'a> = SqliteBorrowRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        run_migrations(&LIBRARY_MIGRATIONS, &self.pool).await
    }

    fn authors(&self) -> Self::Authors<'_> {
        SqliteAuthorRepository { pool: &self.pool }
    }

    fn books(&self) -> Self::Books<'_> {
        SqliteBookRepository { pool: &self.pool }
    }

    fn borrows(&self) -> Self::Borrows<'_> {
        SqliteBorrowRepository { pool: &self.pool }
    }
}

/// SQLite database for the task manager service.
pub struct SqliteTaskManagerDatabase {
    pool: SqlitePool,
}

impl SqliteTaskManagerDatabase {
    /// Open a database at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        Ok(Self {
            pool: open_pool(path).await?,
        })
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        Ok(Self {
            pool: in_memory_pool().await?,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl TaskManagerDatabase for SqliteTaskManagerDatabase {
    type Users<'a> = SqliteUserRepository<'a>;
    type Projects<'a> = SqliteProjectRepository<'a>;
    type Tasks<'a> = SqliteTaskRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        run_migrations(&TASK_MANAGER_MIGRATIONS, &self.pool).await
    }

    fn users(&self) -> Self::Users<'_> {
        SqliteUserRepository { pool: &self.pool }
    }

    fn projects(&self) -> Self::Projects<'_> {
        SqliteProjectRepository { pool: &self.pool }
    }

    fn tasks(&self) -> Self::Tasks<'_> {
        SqliteTaskRepository { pool: &self.pool }
    }
}
