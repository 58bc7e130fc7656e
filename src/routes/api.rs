use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::forms::prices::PriceQueryForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, prices as prices_service};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().naive_utc(),
            message: message.into(),
            code: status.as_u16(),
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(status, message))
}

/// Turns query string binding failures (missing or mistyped parameters)
/// into a `400 Bad Request` with an [`ErrorResponse`] body.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("invalid query parameters: {err}");
    let response = error_response(StatusCode::BAD_REQUEST, message);
    InternalError::from_response(err, response).into()
}

#[get("/api/prices")]
/// Return the price applicable to a product and brand at the requested date.
///
/// Responds with `404 Not Found` when no price matches and `400 Bad Request`
/// when the query cannot be parsed.
pub async fn get_price(
    params: web::Query<PriceQueryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match prices_service::load_applicable_price(repo.get_ref(), params.0) {
        Ok(price) => HttpResponse::Ok().json(price),
        Err(err @ ServiceError::PriceNotFound { .. }) => {
            error_response(StatusCode::NOT_FOUND, err.to_string())
        }
        Err(ServiceError::Form(message)) => error_response(StatusCode::BAD_REQUEST, message),
        Err(err) => {
            log::error!("Failed to resolve price: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "unexpected error")
        }
    }
}
