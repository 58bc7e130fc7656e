use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::price::{Price, PriceLookup, select_applicable};
use crate::forms::prices::PriceQueryForm;
use crate::repository::PriceReader;
use crate::services::{ServiceError, ServiceResult};

/// Applicable price returned by the prices API.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub product_id: i64,
    pub brand_id: i64,
    /// Identifier of the applied tariff.
    pub price_list: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Final price, rendered as a JSON number keeping its scale (`35.50`).
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub currency: String,
}

impl From<Price> for PriceResponse {
    fn from(value: Price) -> Self {
        Self {
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            start_date: value.start_date,
            end_date: value.end_date,
            price: value.amount,
            currency: value.currency,
        }
    }
}

/// Resolves the single price applicable to `lookup`.
///
/// Among the records matching product, brand and date the one with the
/// highest priority is returned; ties go to the lowest record id.
pub fn resolve_price<R>(repo: &R, lookup: &PriceLookup) -> ServiceResult<Price>
where
    R: PriceReader + ?Sized,
{
    log::info!(
        "Resolving price for product={}, brand={}, date={}",
        lookup.product_id,
        lookup.brand_id,
        lookup.date
    );

    let candidates = repo
        .list_applicable_prices(lookup)
        .map_err(ServiceError::from)?
        .into_iter()
        .filter(|price| price.matches(lookup));

    match select_applicable(candidates) {
        Some(price) => Ok(price),
        None => {
            log::warn!(
                "No price found for product={}, brand={}, date={}",
                lookup.product_id,
                lookup.brand_id,
                lookup.date
            );
            Err(ServiceError::PriceNotFound {
                product_id: lookup.product_id,
                brand_id: lookup.brand_id,
                date: lookup.date,
            })
        }
    }
}

/// Validates the query string and loads the applicable price for the API.
pub fn load_applicable_price<R>(repo: &R, form: PriceQueryForm) -> ServiceResult<PriceResponse>
where
    R: PriceReader + ?Sized,
{
    let lookup = form
        .into_price_lookup()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    resolve_price(repo, &lookup).map(PriceResponse::from)
}
