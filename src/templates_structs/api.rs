use serde::Serialize;

use crate::models::article::ArticleRow;
use crate::models::metrics::{ArticleMetrics, SpendingSummary};

/// Generic paginated response for API list endpoints.
#[derive(Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Serialize)]
pub struct ApiArticleResponse {
    pub doi: String,
    pub title: String,
    pub journal: String,
    pub institution: String,
    pub status: String,
    pub online_date: String,
    pub price: String,
}

impl From<ArticleRow> for ApiArticleResponse {
    fn from(r: ArticleRow) -> Self {
        ApiArticleResponse {
            doi: r.doi,
            title: r.title,
            journal: r.journal,
            institution: r.institution,
            status: r.status,
            online_date: r.online_date,
            price: r.price,
        }
    }
}

#[derive(Serialize)]
pub struct ApiMetricsResponse {
    #[serde(flatten)]
    pub metrics: ArticleMetrics,
    pub approved_pct_label: String,
    pub rejected_pct_label: String,
}

impl From<ArticleMetrics> for ApiMetricsResponse {
    fn from(metrics: ArticleMetrics) -> Self {
        ApiMetricsResponse {
            approved_pct_label: metrics.approved_pct_label(),
            rejected_pct_label: metrics.rejected_pct_label(),
            metrics,
        }
    }
}

#[derive(Serialize)]
pub struct ApiSpendingResponse {
    pub current: f64,
    pub projected: f64,
    pub current_label: String,
    pub projected_label: String,
}

impl From<SpendingSummary> for ApiSpendingResponse {
    fn from(s: SpendingSummary) -> Self {
        ApiSpendingResponse {
            current: s.current,
            projected: s.projected,
            current_label: s.current_label(),
            projected_label: s.projected_label(),
        }
    }
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
