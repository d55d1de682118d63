use crate::models::article::{self, Article, filter::{self as af, TableQuery}};
use crate::templates_structs::TableView;

/// Assemble the article table for a page from the selection-filtered
/// articles and the request's table parameters.
pub fn build(
    base: &str,
    articles: &[&Article],
    pairs: &[(String, String)],
    per_page: usize,
) -> TableView {
    let query = TableQuery::from_pairs(pairs);
    let article_page = article::find_paginated(articles, &query, per_page);

    let prev_href = query.page_href(base, article_page.page.saturating_sub(1).max(1));
    let next_href = query.page_href(base, (article_page.page + 1).min(article_page.total_pages));

    TableView {
        columns: af::columns(base, &query),
        form_action: base.to_string(),
        search_query: query.q.clone(),
        sort: query.sort.column.clone(),
        dir: query.sort.dir_str().to_string(),
        prev_href,
        next_href,
        article_page,
        query,
    }
}
