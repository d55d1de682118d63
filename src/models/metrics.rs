use chrono::NaiveDate;
use serde::Serialize;

use crate::models::article::{Article, ArticleStatus};
use crate::models::filter::FilterSelection;
use crate::models::format::{format_eur_whole, format_pct, percentage};

/// Counts behind the metrics cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ArticleMetrics {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub approved_pct: f64,
    pub rejected_pct: f64,
}

impl ArticleMetrics {
    pub fn approved_pct_label(&self) -> String {
        format_pct(self.approved, self.total)
    }

    pub fn rejected_pct_label(&self) -> String {
        format_pct(self.rejected, self.total)
    }
}

/// Spend figures behind the spending cards. Only approved articles incur
/// an APC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SpendingSummary {
    /// Approved articles already online at the reference date.
    pub current: f64,
    /// All approved articles in the selection.
    pub projected: f64,
}

impl SpendingSummary {
    pub fn current_label(&self) -> String {
        format_eur_whole(self.current)
    }

    pub fn projected_label(&self) -> String {
        format_eur_whole(self.projected)
    }
}

pub fn compute_metrics(
    articles: &[Article],
    filters: &FilterSelection,
    today: NaiveDate,
) -> ArticleMetrics {
    let mut m = ArticleMetrics::default();
    for article in articles.iter().filter(|a| filters.matches(a, today)) {
        m.total += 1;
        match article.article_status {
            ArticleStatus::Approved => m.approved += 1,
            ArticleStatus::Rejected => m.rejected += 1,
        }
    }
    m.approved_pct = percentage(m.approved, m.total);
    m.rejected_pct = percentage(m.rejected, m.total);
    m
}

pub fn compute_spending(
    articles: &[Article],
    filters: &FilterSelection,
    today: NaiveDate,
) -> SpendingSummary {
    let mut s = SpendingSummary::default();
    for article in articles.iter().filter(|a| filters.matches(a, today)) {
        if !article.article_status.is_approved() {
            continue;
        }
        let price = article.customer_apc_list_price.max(0.0);
        s.projected += price;
        if article.online_date().is_some_and(|d| d <= today) {
            s.current += price;
        }
    }
    s
}
