use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::price::PriceLookup;

/// Accepted ISO-8601 local date-time layouts for the `date` parameter.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Result type returned by the price form helpers.
pub type PriceFormResult<T> = Result<T, PriceFormError>;

/// Errors that can occur while processing a price lookup request.
#[derive(Debug, Error)]
pub enum PriceFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The `date` parameter is not an ISO-8601 local date-time.
    #[error("invalid value `{value}` for parameter `date`, expected ISO-8601 date-time")]
    InvalidDate { value: String },
}

/// Query string of `GET /api/prices`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriceQueryForm {
    /// Application date, e.g. `2020-06-14T10:00:00`.
    #[validate(length(min = 1))]
    pub date: String,
    /// Identifier of the product.
    pub product_id: i64,
    /// Identifier of the brand.
    pub brand_id: i64,
}

impl PriceQueryForm {
    /// Validates the query and converts it into a domain `PriceLookup`.
    pub fn into_price_lookup(self) -> PriceFormResult<PriceLookup> {
        self.validate()?;

        let date = parse_date(&self.date)?;

        Ok(PriceLookup::new(self.product_id, self.brand_id, date))
    }
}

fn parse_date(value: &str) -> PriceFormResult<NaiveDateTime> {
    let trimmed = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| PriceFormError::InvalidDate {
            value: value.to_string(),
        })
}
