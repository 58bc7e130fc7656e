use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::price::{Price as DomainPrice, PriceLookup},
    models::price::Price as DbPrice,
    repository::{DieselRepository, PriceReader},
};

impl PriceReader for DieselRepository {
    fn list_applicable_prices(&self, lookup: &PriceLookup) -> RepositoryResult<Vec<DomainPrice>> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let db_prices = prices::table
            .filter(prices::product_id.eq(lookup.product_id))
            .filter(prices::brand_id.eq(lookup.brand_id))
            .filter(prices::start_date.le(lookup.date))
            .filter(prices::end_date.ge(lookup.date))
            .select(DbPrice::as_select())
            .load::<DbPrice>(&mut conn)?;

        Ok(db_prices.into_iter().map(Into::into).collect())
    }
}
