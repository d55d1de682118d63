use actix_web::{HttpRequest, HttpResponse, web};

use super::selection_from_query;
use crate::models::article::{self, filter::TableQuery};
use crate::state::AppState;
use crate::templates_structs::{ApiArticleResponse, PaginatedResponse};

/// GET /api/v1/articles - Filtered, sorted, paginated article rows
/// Query params: q, sort, dir, page, per_page (default from config, max 100)
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let (selection, pairs) = selection_from_query(&req);
    let per_page = pairs
        .iter()
        .rev()
        .find(|(k, _)| k == "per_page")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(state.config.page_size)
        .clamp(1, 100);

    let filtered = selection.apply(state.source.articles(), state.config.today());
    let query = TableQuery::from_pairs(&pairs);
    let article_page = article::find_paginated(&filtered, &query, per_page);

    let response = PaginatedResponse {
        page: article_page.page,
        per_page: article_page.per_page,
        total: article_page.total_count,
        total_pages: article_page.total_pages,
        items: article_page
            .rows
            .into_iter()
            .map(ApiArticleResponse::from)
            .collect(),
    };
    HttpResponse::Ok().json(response)
}

/// GET /api/v1/institutions - Values accepted by the institution filter
pub async fn institutions(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.source.institutions())
}
