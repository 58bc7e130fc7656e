use actix_web::web;

pub mod api;

/// Registers the HTTP endpoints together with their extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(api::query_error_handler))
        .service(api::get_price);
}
