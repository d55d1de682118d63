use actix_web::{HttpRequest, HttpResponse, web};

use super::selection_from_query;
use crate::models::{metrics, timeseries::{self, ChartRange}};
use crate::state::AppState;
use crate::templates_structs::{ApiErrorResponse, ApiMetricsResponse, ApiSpendingResponse};

/// GET /api/v1/metrics - Total, approved and rejected counts
pub async fn metrics(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let (selection, _) = selection_from_query(&req);
    let m = metrics::compute_metrics(state.source.articles(), &selection, state.config.today());
    HttpResponse::Ok().json(ApiMetricsResponse::from(m))
}

/// GET /api/v1/spending - Current and projected APC spend
pub async fn spending(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let (selection, _) = selection_from_query(&req);
    let s = metrics::compute_spending(state.source.articles(), &selection, state.config.today());
    HttpResponse::Ok().json(ApiSpendingResponse::from(s))
}

/// GET /api/v1/chart - Monthly buckets, most recent first
/// Query params: range (3m, 6m or 12m; default 12m)
pub async fn chart(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let (selection, pairs) = selection_from_query(&req);
    let range = match pairs.iter().rev().find(|(k, _)| k == "range") {
        None => ChartRange::default(),
        Some((_, raw)) => match ChartRange::from_param(raw) {
            Some(r) => r,
            None => {
                return HttpResponse::BadRequest().json(ApiErrorResponse {
                    error: format!("Unknown range {raw:?}; expected 3m, 6m or 12m"),
                });
            }
        },
    };

    let series = {
        let mut rng = rand::rng();
        timeseries::bucketize(
            state.source.articles(),
            &selection,
            range,
            state.config.today(),
            state.config.demo_mode,
            &mut rng,
        )
    };
    HttpResponse::Ok().json(series)
}
