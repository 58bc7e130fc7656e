use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::price::{Price, PriceLookup};

pub mod price;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over price records.
pub trait PriceReader {
    /// Returns every price for the product and brand whose validity window
    /// contains the lookup date. No ordering is guaranteed.
    fn list_applicable_prices(&self, lookup: &PriceLookup) -> RepositoryResult<Vec<Price>>;
}
