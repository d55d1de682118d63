use super::filter::{self as af, TableQuery};
use super::types::{Article, ArticlePage, ArticleRow};
use crate::models::format::{format_date_dmy, format_eur};
use crate::models::table_filter::{SortDir, text_matches};

fn to_row(article: &Article, selected: bool) -> ArticleRow {
    ArticleRow {
        doi: article.doi.clone(),
        title: article.article_title.clone(),
        journal: article.journal_title.clone(),
        institution: article.approving_institution.clone(),
        status: article.article_status.as_str().to_string(),
        approved: article.article_status.is_approved(),
        online_date: format_date_dmy(&article.online_date),
        price: format_eur(article.customer_apc_list_price),
        selected,
    }
}

/// Title-filter, sort and paginate an already selection-filtered list.
pub fn find_paginated(articles: &[&Article], query: &TableQuery, per_page: usize) -> ArticlePage {
    let per_page = per_page.max(1);

    let mut matching: Vec<&Article> = articles
        .iter()
        .copied()
        .filter(|a| text_matches(&a.article_title, &query.q))
        .collect();

    if !query.sort.column.is_empty() {
        matching.sort_by(|a, b| {
            let ord = af::compare(&query.sort.column, a, b);
            match query.sort.dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
    }

    let total_count = matching.len();
    let total_pages = total_count.div_ceil(per_page).max(1);
    let page = query.page.clamp(1, total_pages);
    let offset = (page - 1) * per_page;

    let rows: Vec<ArticleRow> = matching
        .iter()
        .skip(offset)
        .take(per_page)
        .map(|a| to_row(a, query.is_selected(&a.doi)))
        .collect();
    let selected_count = rows.iter().filter(|r| r.selected).count();

    ArticlePage { rows, page, per_page, total_count, total_pages, selected_count }
}
