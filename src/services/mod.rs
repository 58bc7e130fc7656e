use chrono::NaiveDateTime;
use pushkind_common::repository::errors::RepositoryError;
use thiserror::Error;

pub mod prices;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No price record is applicable to the requested product, brand and date.
    #[error("no price found for product {product_id}, brand {brand_id} at {date}")]
    PriceNotFound {
        product_id: i64,
        brand_id: i64,
        date: NaiveDateTime,
    },
    /// The request could not be turned into a valid lookup.
    #[error("invalid request: {0}")]
    Form(String),
    /// The price store could not be queried.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
