use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain representation of a tariff entry valid for a product and brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    /// Unique identifier of the price record.
    pub id: i32,
    /// Identifier of the product the price applies to.
    pub product_id: i64,
    /// Identifier of the brand (store chain) the price applies to.
    pub brand_id: i64,
    /// First instant the price is valid, inclusive.
    pub start_date: NaiveDateTime,
    /// Last instant the price is valid, inclusive.
    pub end_date: NaiveDateTime,
    /// Rank used to pick among overlapping windows. Higher wins.
    pub priority: i32,
    /// Identifier of the rate tariff applied.
    pub price_list: i64,
    /// Final sale price.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Price {
    /// Whether `date` falls inside the validity window.
    pub fn is_valid_at(&self, date: NaiveDateTime) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether the record satisfies every predicate of `lookup`.
    ///
    /// In-memory form of the store query; the resolver re-checks candidates
    /// with it before selecting one.
    pub fn matches(&self, lookup: &PriceLookup) -> bool {
        self.product_id == lookup.product_id
            && self.brand_id == lookup.brand_id
            && self.is_valid_at(lookup.date)
    }
}

/// Input of a price resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLookup {
    /// Identifier of the requested product.
    pub product_id: i64,
    /// Identifier of the requested brand.
    pub brand_id: i64,
    /// Application date the price must be valid at.
    pub date: NaiveDateTime,
}

impl PriceLookup {
    pub fn new(product_id: i64, brand_id: i64, date: NaiveDateTime) -> Self {
        Self {
            product_id,
            brand_id,
            date,
        }
    }
}

/// Picks the applicable price among matching records.
///
/// The highest priority wins. Records tied on the highest priority are
/// resolved in favour of the lowest `id`, so the outcome never depends on
/// the order the store returned them in.
pub fn select_applicable<I>(prices: I) -> Option<Price>
where
    I: IntoIterator<Item = Price>,
{
    prices.into_iter().max_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.id.cmp(&a.id))
    })
}
