use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::models::article::{Article, ArticleStatus};
use crate::models::filter::FilterSelection;
use crate::models::month::YearMonth;

/// Placeholder counts per month in demo mode.
const DEMO_MIN: usize = 5;
const DEMO_MAX: usize = 40;

/// Width of the chart toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChartRange {
    Months3,
    Months6,
    #[default]
    Months12,
}

impl ChartRange {
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim() {
            "3m" => Some(ChartRange::Months3),
            "6m" => Some(ChartRange::Months6),
            "12m" => Some(ChartRange::Months12),
            _ => None,
        }
    }

    pub fn to_param(&self) -> &'static str {
        match self {
            ChartRange::Months3 => "3m",
            ChartRange::Months6 => "6m",
            ChartRange::Months12 => "12m",
        }
    }

    pub fn months(&self) -> usize {
        match self {
            ChartRange::Months3 => 3,
            ChartRange::Months6 => 6,
            ChartRange::Months12 => 12,
        }
    }

    pub fn label(&self) -> String {
        format!("Last {} months", self.months())
    }

    pub fn all() -> [ChartRange; 3] {
        [ChartRange::Months12, ChartRange::Months6, ChartRange::Months3]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: YearMonth,
    pub label: String,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
    /// Bar widths in percent of the busiest month.
    pub approved_width: f64,
    pub rejected_width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub range: ChartRange,
    /// Most recent month first.
    pub buckets: Vec<MonthlyBucket>,
    /// True when the counts are demo placeholders rather than data.
    pub placeholder: bool,
}

impl MonthlyBucket {
    pub fn approved_style(&self) -> String {
        format!("width: {:.1}%", self.approved_width)
    }

    pub fn rejected_style(&self) -> String {
        format!("width: {:.1}%", self.rejected_width)
    }
}

impl ChartSeries {
    pub fn chronological(&self) -> Vec<MonthlyBucket> {
        self.buckets.iter().rev().cloned().collect()
    }

    pub fn peak(&self) -> usize {
        self.buckets.iter().map(|b| b.total).max().unwrap_or(0)
    }
}

#[derive(Default, Clone, Copy)]
struct Counts {
    approved: usize,
    rejected: usize,
}

/// Bucket the filtered articles by reporting month over the window that
/// ends at `today`'s month.
///
/// With `demo` set and nothing matching the filters, every month gets random
/// placeholder counts from `rng` and the series is flagged as placeholder.
/// Without it an empty selection yields zeros.
pub fn bucketize<R: Rng>(
    articles: &[Article],
    filters: &FilterSelection,
    range: ChartRange,
    today: NaiveDate,
    demo: bool,
    rng: &mut R,
) -> ChartSeries {
    let window = YearMonth::from_date(today).window_ending(range.months());
    let mut counts: HashMap<YearMonth, Counts> =
        window.iter().map(|m| (*m, Counts::default())).collect();

    let mut matched = 0usize;
    for article in articles.iter().filter(|a| filters.matches(a, today)) {
        matched += 1;
        let Some(month) = article.reporting_month() else {
            log::debug!("Skipping {} in chart: no usable month", article.doi);
            continue;
        };
        let Some(bucket) = counts.get_mut(&month) else {
            continue;
        };
        match article.article_status {
            ArticleStatus::Approved => bucket.approved += 1,
            ArticleStatus::Rejected => bucket.rejected += 1,
        }
    }

    let placeholder = demo && matched == 0;
    if placeholder {
        for c in counts.values_mut() {
            c.approved = rng.random_range(DEMO_MIN..=DEMO_MAX);
            c.rejected = rng.random_range(0..=DEMO_MAX / 2);
        }
    }

    let peak = counts.values().map(|c| c.approved + c.rejected).max().unwrap_or(0);
    let width = |n: usize| if peak == 0 { 0.0 } else { n as f64 / peak as f64 * 100.0 };

    let buckets = window
        .iter()
        .rev()
        .map(|m| {
            let c = counts.get(m).copied().unwrap_or_default();
            MonthlyBucket {
                month: *m,
                label: m.label(),
                approved: c.approved,
                rejected: c.rejected,
                total: c.approved + c.rejected,
                approved_width: width(c.approved),
                rejected_width: width(c.rejected),
            }
        })
        .collect();

    ChartSeries { range, buckets, placeholder }
}
