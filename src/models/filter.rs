use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::article::{Article, ArticleStatus};
use crate::models::month::YearMonth;

/// Date range control. Relative ranges use the same month window as the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    All,
    Year(i32),
    LastMonths(u32),
}

impl DateRange {
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim() {
            "all" => Some(DateRange::All),
            "last3months" => Some(DateRange::LastMonths(3)),
            "last6months" => Some(DateRange::LastMonths(6)),
            // Accepted in links, not offered by the control
            "last12months" => Some(DateRange::LastMonths(12)),
            y if y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()) => {
                y.parse().ok().map(DateRange::Year)
            }
            _ => None,
        }
    }

    pub fn to_param(&self) -> String {
        match self {
            DateRange::All => "all".to_string(),
            DateRange::Year(y) => y.to_string(),
            DateRange::LastMonths(n) => format!("last{n}months"),
        }
    }

    pub fn label(&self) -> String {
        match self {
            DateRange::All => "All Time".to_string(),
            DateRange::Year(y) => y.to_string(),
            DateRange::LastMonths(n) => format!("Last {n} Months"),
        }
    }

    /// Choices offered by the filter control: all time, the current and
    /// previous calendar year, and the two relative windows.
    pub fn options(today: NaiveDate) -> Vec<DateRange> {
        vec![
            DateRange::All,
            DateRange::Year(today.year()),
            DateRange::Year(today.year() - 1),
            DateRange::LastMonths(6),
            DateRange::LastMonths(3),
        ]
    }

    pub fn contains(&self, month: Option<YearMonth>, today: NaiveDate) -> bool {
        match (self, month) {
            (DateRange::All, _) => true,
            (_, None) => false,
            (DateRange::Year(y), Some(m)) => m.year == *y,
            (DateRange::LastMonths(n), Some(m)) => {
                let end = YearMonth::from_date(today);
                let start = end.offset(-(*n as i64) + 1);
                m >= start && m <= end
            }
        }
    }
}

/// Article status control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArticleType {
    #[default]
    All,
    Only(ArticleStatus),
}

impl ArticleType {
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim() {
            "all" => Some(ArticleType::All),
            "Approved" => Some(ArticleType::Only(ArticleStatus::Approved)),
            "Rejected" => Some(ArticleType::Only(ArticleStatus::Rejected)),
            _ => None,
        }
    }

    pub fn to_param(&self) -> &'static str {
        match self {
            ArticleType::All => "all",
            ArticleType::Only(s) => s.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleType::All => "All Types",
            ArticleType::Only(s) => s.as_str(),
        }
    }

    pub fn options() -> [ArticleType; 3] {
        [
            ArticleType::All,
            ArticleType::Only(ArticleStatus::Approved),
            ArticleType::Only(ArticleStatus::Rejected),
        ]
    }

    pub fn accepts(&self, status: ArticleStatus) -> bool {
        match self {
            ArticleType::All => true,
            ArticleType::Only(s) => *s == status,
        }
    }
}

/// The (date range, article status, institution) triple. All three
/// compose with AND wherever articles are filtered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub date_range: DateRange,
    pub article_type: ArticleType,
    /// `None` means all institutions.
    pub institution: Option<String>,
}

/// Partial update emitted by the filter controls. Absent fields keep
/// their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterUpdate {
    pub date_range: Option<String>,
    pub article_type: Option<String>,
    pub institution: Option<String>,
}

impl FilterUpdate {
    pub fn is_empty(&self) -> bool {
        self.date_range.is_none() && self.article_type.is_none() && self.institution.is_none()
    }
}

impl FilterSelection {
    /// Merge a partial update. Values that do not parse are ignored.
    pub fn merge(&self, update: &FilterUpdate) -> FilterSelection {
        let mut next = self.clone();
        if let Some(raw) = update.date_range.as_deref() {
            match DateRange::from_param(raw) {
                Some(r) => next.date_range = r,
                None => log::warn!("Ignoring unknown date range filter: {raw:?}"),
            }
        }
        if let Some(raw) = update.article_type.as_deref() {
            match ArticleType::from_param(raw) {
                Some(t) => next.article_type = t,
                None => log::warn!("Ignoring unknown article type filter: {raw:?}"),
            }
        }
        if let Some(raw) = update.institution.as_deref() {
            next.institution = match raw.trim() {
                "" | "all" => None,
                name => Some(name.to_string()),
            };
        }
        next
    }

    pub fn institution_param(&self) -> &str {
        self.institution.as_deref().unwrap_or("all")
    }

    pub fn is_default(&self) -> bool {
        *self == FilterSelection::default()
    }

    pub fn matches(&self, article: &Article, today: NaiveDate) -> bool {
        if let Some(inst) = &self.institution {
            if article.approving_institution != *inst {
                return false;
            }
        }
        self.article_type.accepts(article.article_status)
            && self.date_range.contains(article.reporting_month(), today)
    }

    pub fn apply<'a>(&self, articles: &'a [Article], today: NaiveDate) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a, today)).collect()
    }
}
