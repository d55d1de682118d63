// src/models/article/filter.rs
use std::cmp::Ordering;

use crate::models::article::Article;
use crate::models::table_filter::{ColumnDef, SortSpec};

/// Allowed sort keys and their labels, in display order.
const COLUMNS: &[(&str, &str)] = &[
    ("doi", "DOI"),
    ("title", "Article Title"),
    ("journal", "Journal"),
    ("institution", "Institution"),
    ("status", "Status"),
    ("online_date", "Online Date"),
    ("price", "Price"),
];

/// Compare two articles on a sort key. Unknown keys compare equal, which
/// leaves the source order intact under a stable sort.
pub fn compare(key: &str, a: &Article, b: &Article) -> Ordering {
    fn text(a: &str, b: &str) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }
    match key {
        "doi" => text(&a.doi, &b.doi),
        "title" => text(&a.article_title, &b.article_title),
        "journal" => text(&a.journal_title, &b.journal_title),
        "institution" => text(&a.approving_institution, &b.approving_institution),
        "status" => a.article_status.as_str().cmp(b.article_status.as_str()),
        "online_date" => a.online_date().cmp(&b.online_date()),
        "price" => a.customer_apc_list_price.total_cmp(&b.customer_apc_list_price),
        _ => Ordering::Equal,
    }
}

pub fn is_sort_key(key: &str) -> bool {
    COLUMNS.iter().any(|(k, _)| *k == key)
}

/// Query state of the article table: title filter, sort, page and the
/// rows ticked on the current page.
///
/// `select_all` is the header toggle: `Some(true)` ticks the whole page,
/// `Some(false)` clears it. Explicit `sel` values win over a tick.
#[derive(Debug, Clone, Default)]
pub struct TableQuery {
    pub q: String,
    pub sort: SortSpec,
    pub page: usize,
    pub selected: Vec<String>,
    pub select_all: Option<bool>,
}

impl TableQuery {
    /// Build from decoded query pairs. `sel` may repeat.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let get = |key: &str| {
            pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
        };
        let sort = get("sort").filter(|s| is_sort_key(s));
        TableQuery {
            q: get("q").unwrap_or("").trim().to_string(),
            sort: SortSpec::from_params(sort, get("dir")),
            page: get("page").and_then(|p| p.parse().ok()).unwrap_or(1),
            selected: pairs
                .iter()
                .filter(|(k, _)| k == "sel")
                .map(|(_, v)| v.clone())
                .collect(),
            select_all: match get("select_all") {
                Some("1" | "true" | "on") => Some(true),
                Some("0" | "false" | "off") => Some(false),
                _ => None,
            },
        }
    }

    /// Whether the row with `doi` is ticked on the current page.
    pub fn is_selected(&self, doi: &str) -> bool {
        match self.select_all {
            Some(false) => false,
            Some(true) if self.selected.is_empty() => true,
            _ => self.selected.iter().any(|d| d == doi),
        }
    }

    fn base_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![];
        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }
        if !self.sort.column.is_empty() {
            pairs.push(("sort", self.sort.column.clone()));
            pairs.push(("dir", self.sort.dir_str().to_string()));
        }
        pairs
    }

    /// Link to another page with the same filter and sort.
    pub fn page_href(&self, base: &str, page: usize) -> String {
        let mut pairs = self.base_pairs();
        pairs.push(("page", page.to_string()));
        href(base, &pairs)
    }

    /// Link that keeps the table state on `page` and adds one more parameter.
    pub fn href_with(&self, base: &str, page: usize, key: &'static str, value: &str) -> String {
        let mut pairs = vec![(key, value.to_string())];
        pairs.extend(self.base_pairs());
        pairs.push(("page", page.to_string()));
        href(base, &pairs)
    }

    /// Header link: sort by `column`, back to page one.
    pub fn sort_href(&self, base: &str, column: &str) -> String {
        let mut pairs: Vec<(&'static str, String)> =
            self.base_pairs().into_iter().filter(|(k, _)| *k == "q").collect();
        pairs.push(("sort", column.to_string()));
        pairs.push(("dir", self.sort.next_dir_for(column).to_string()));
        href(base, &pairs)
    }
}

fn href(base: &str, pairs: &[(&str, String)]) -> String {
    match serde_urlencoded::to_string(pairs) {
        Ok(qs) if !qs.is_empty() => format!("{base}?{qs}"),
        _ => base.to_string(),
    }
}

/// Column definitions for the article table with header links resolved.
pub fn columns(base: &str, query: &TableQuery) -> Vec<ColumnDef> {
    COLUMNS
        .iter()
        .map(|(key, label)| ColumnDef {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
            href: query.sort_href(base, key),
            indicator: if query.sort.is_active(key) {
                query.sort.dir_str().to_string()
            } else {
                String::new()
            },
        })
        .collect()
}
