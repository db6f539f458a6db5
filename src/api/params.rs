//! Query parameters shared by list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::db::{DEFAULT_LIMIT, Page};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Number of rows to skip
    #[param(example = 0)]
    pub skip: Option<u32>,
    /// Maximum number of rows to return (default 100)
    #[param(example = 100)]
    pub limit: Option<u32>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Page {
            skip: params.skip.unwrap_or(0),
            limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        }
    }
}
