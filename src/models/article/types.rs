use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::month::YearMonth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleStatus {
    Approved,
    Rejected,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Approved => "Approved",
            ArticleStatus::Rejected => "Rejected",
        }
    }

    pub fn is_approved(&self) -> bool {
        *self == ArticleStatus::Approved
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One open-access submission as supplied by the data source.
///
/// Dates stay as the source wrote them and are parsed on use, so a single
/// malformed value only drops the article from date-based views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub doi: String,
    pub article_title: String,
    pub journal_title: String,
    pub article_status: ArticleStatus,
    #[serde(default)]
    pub approving_institution: String,
    #[serde(default)]
    pub allocation_month: String,
    #[serde(default)]
    pub online_date: String,
    #[serde(default)]
    pub oa_approval_date: Option<String>,
    pub customer_apc_list_price: f64,
}

impl Article {
    pub fn online_date(&self) -> Option<NaiveDate> {
        parse_date(&self.online_date)
    }

    pub fn oa_approval_date(&self) -> Option<NaiveDate> {
        self.oa_approval_date.as_deref().and_then(parse_date)
    }

    /// Month the article is reported under: the allocation month when it
    /// parses, otherwise the month of the online date.
    pub fn reporting_month(&self) -> Option<YearMonth> {
        YearMonth::parse_allocation(&self.allocation_month)
            .or_else(|| self.online_date().map(YearMonth::from_date))
    }
}

/// Parse `YYYY-MM-DD`, also accepting a full timestamp with that prefix.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

/// Display row for the article table. Formatting happens once here so
/// templates and the JSON API print the same strings.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRow {
    pub doi: String,
    pub title: String,
    pub journal: String,
    pub institution: String,
    pub status: String,
    pub approved: bool,
    pub online_date: String,
    pub price: String,
    pub selected: bool,
}

/// Pagination metadata for the article table.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlePage {
    pub rows: Vec<ArticleRow>,
    pub page: usize,
    pub per_page: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub selected_count: usize,
}

impl ArticlePage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| r.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(allocation: &str, online: &str) -> Article {
        Article {
            doi: "10.1000/x".into(),
            article_title: "T".into(),
            journal_title: "J".into(),
            article_status: ArticleStatus::Approved,
            approving_institution: "Inst".into(),
            allocation_month: allocation.into(),
            online_date: online.into(),
            oa_approval_date: None,
            customer_apc_list_price: 100.0,
        }
    }

    #[test]
    fn parse_date_accepts_timestamp_prefix() {
        let d = parse_date("2024-09-15T10:00:00Z").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 9, 15).unwrap());
        assert!(parse_date("15/09/2024").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn reporting_month_prefers_allocation_month() {
        let a = article("Sep-24", "2024-11-02");
        assert_eq!(a.reporting_month(), Some(YearMonth::new(2024, 9)));
    }

    #[test]
    fn reporting_month_falls_back_to_online_date() {
        let a = article("", "2024-11-02");
        assert_eq!(a.reporting_month(), Some(YearMonth::new(2024, 11)));
        let b = article("garbage", "not a date");
        assert_eq!(b.reporting_month(), None);
    }

    #[test]
    fn status_deserializes_from_capitalized_names() {
        let s: ArticleStatus = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(s, ArticleStatus::Rejected);
        assert!(serde_json::from_str::<ArticleStatus>("\"Pending\"").is_err());
    }
}
