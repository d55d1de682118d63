pub mod api_v1;
pub mod article_table;
pub mod dashboard;
pub mod deal_summary;
pub mod filters;

use actix_web::{HttpResponse, web};

use crate::errors::AppError;

/// Register every page and API route. The caller adds middleware, shared
/// state and the static file service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Root redirect
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish()
        }))
        .route("/dashboard", web::get().to(dashboard::index))
        .route("/deal-summary", web::get().to(deal_summary::index))
        .route("/filters/reset", web::get().to(filters::reset))
        .service(web::scope("/api/v1").configure(api_v1::configure));
}

/// Fallback service for unmatched routes.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
