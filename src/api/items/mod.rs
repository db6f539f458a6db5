//! Item store service: a non-persistent ordered list of items.

mod handlers;
mod routes;


pub use handlers::*;
pub use routes::{ApiDoc, create_router};
