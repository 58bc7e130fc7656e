use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::price::Price as DomainPrice;

/// Number of decimal places stored in `price_cents`.
const PRICE_SCALE: u32 = 2;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::prices)]
pub struct Price {
    pub id: i32,
    pub brand_id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub price_list: i64,
    pub product_id: i64,
    pub priority: i32,
    pub price_cents: i64,
    pub currency: String,
}

impl From<Price> for DomainPrice {
    fn from(value: Price) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            brand_id: value.brand_id,
            start_date: value.start_date,
            end_date: value.end_date,
            priority: value.priority,
            price_list: value.price_list,
            amount: Decimal::new(value.price_cents, PRICE_SCALE),
            currency: value.currency,
        }
    }
}
