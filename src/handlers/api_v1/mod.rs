//! Stateless JSON API. Filters come only from the query string, never from
//! the session.

pub mod articles;
pub mod stats;

use actix_web::{HttpRequest, web};

use crate::handlers::filters;
use crate::models::filter::FilterSelection;

/// Selection described by the request's `date_range`, `article_type` and
/// `institution` parameters.
fn selection_from_query(req: &HttpRequest) -> (FilterSelection, Vec<(String, String)>) {
    let pairs = filters::query_pairs(req);
    let selection = FilterSelection::default().merge(&filters::filter_update(&pairs));
    (selection, pairs)
}

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(stats::metrics))
        .route("/spending", web::get().to(stats::spending))
        .route("/chart", web::get().to(stats::chart))
        .route("/articles", web::get().to(articles::list))
        .route("/institutions", web::get().to(articles::institutions));
}
