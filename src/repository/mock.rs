use mockall::mock;

use super::PriceReader;
use crate::domain::price::{Price, PriceLookup};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub PriceReader {}

    impl PriceReader for PriceReader {
        fn list_applicable_prices(&self, lookup: &PriceLookup) -> RepositoryResult<Vec<Price>>;
    }
}
