use pushkind_prices::domain::price::PriceLookup;
use pushkind_prices::forms::prices::PriceQueryForm;
use pushkind_prices::repository::DieselRepository;
use pushkind_prices::services::ServiceError;
use pushkind_prices::services::prices::{load_applicable_price, resolve_price};
use rust_decimal::Decimal;

mod common;

fn assert_tariff(repo: &DieselRepository, date: &str, price_list: i64, cents: i64) {
    let lookup = PriceLookup::new(35455, 1, common::datetime(date));
    let price = match resolve_price(repo, &lookup) {
        Ok(price) => price,
        Err(err) => panic!("expected a price at {date}, got error: {err}"),
    };

    assert_eq!(price.price_list, price_list, "tariff at {date}");
    assert_eq!(price.amount, Decimal::new(cents, 2), "amount at {date}");
}

#[test]
fn resolve_price_matches_reference_scenarios() {
    let test_db = common::TestDb::new("service_resolve_price_scenarios.db");
    let repo = DieselRepository::new(test_db.pool());

    assert_tariff(&repo, "2020-06-14T10:00:00", 1, 3550);
    assert_tariff(&repo, "2020-06-14T16:00:00", 2, 2545);
    assert_tariff(&repo, "2020-06-14T21:00:00", 1, 3550);
    assert_tariff(&repo, "2020-06-15T10:00:00", 3, 3050);
    assert_tariff(&repo, "2020-06-16T21:00:00", 4, 3895);
}

#[test]
fn resolve_price_reports_unknown_brand_product_and_date() {
    let test_db = common::TestDb::new("service_resolve_price_not_found.db");
    let repo = DieselRepository::new(test_db.pool());
    let date = common::datetime("2020-06-14T10:00:00");

    let unknown_brand = resolve_price(&repo, &PriceLookup::new(35455, 999, date));
    match unknown_brand {
        Err(ServiceError::PriceNotFound {
            product_id,
            brand_id,
            date: reported,
        }) => {
            assert_eq!(product_id, 35455);
            assert_eq!(brand_id, 999);
            assert_eq!(reported, date);
        }
        other => panic!("expected not found, got {other:?}"),
    }

    let unknown_product = resolve_price(&repo, &PriceLookup::new(99999, 1, date));
    assert!(matches!(
        unknown_product,
        Err(ServiceError::PriceNotFound {
            product_id: 99999,
            ..
        })
    ));

    let outside = resolve_price(
        &repo,
        &PriceLookup::new(35455, 1, common::midnight(2019, 1, 1)),
    );
    assert!(matches!(outside, Err(ServiceError::PriceNotFound { .. })));
}

#[test]
fn load_applicable_price_returns_response_dto() {
    let test_db = common::TestDb::new("service_load_applicable_price.db");
    let repo = DieselRepository::new(test_db.pool());

    let form = PriceQueryForm {
        date: "2020-06-16T21:00:00".to_string(),
        product_id: 35455,
        brand_id: 1,
    };

    let response = load_applicable_price(&repo, form).expect("expected a price");

    assert_eq!(response.product_id, 35455);
    assert_eq!(response.brand_id, 1);
    assert_eq!(response.price_list, 4);
    assert_eq!(response.price, Decimal::new(3895, 2));
    assert_eq!(response.currency, "EUR");
    assert_eq!(response.start_date, common::datetime("2020-06-15T16:00:00"));
    assert_eq!(response.end_date, common::datetime("2020-12-31T23:59:59"));
}
