//! Library service: books, authors and borrow records backed by SQLite.

mod authors;
mod books;
mod borrows;
mod routes;

#[cfg(test)]
mod books_test;

pub use authors::*;
pub use books::*;
pub use borrows::*;
pub use routes::{ApiDoc, create_router};
