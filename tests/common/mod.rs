//! Shared test fixtures.
//!
//! # Fixtures
//! - `sample_articles()` - ten articles (6 Approved, 4 Rejected) around
//!   `reference_date()`, including one posted after it and one with no
//!   usable date
//! - `test_state()` - `AppState` over any article list with a pinned date
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use oasis::config::AppConfig;
use oasis::data::InMemorySource;
use oasis::models::article::{Article, ArticleStatus};
use oasis::state::AppState;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const OSLO: &str = "University of Oslo";
pub const KTH: &str = "KTH Royal Institute of Technology";
pub const HELSINKI: &str = "University of Helsinki";
pub const AARHUS: &str = "Aarhus University";

/// 2025-03-15. Every fixture is laid out relative to this date.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date")
}

// ============================================================================
// ARTICLES
// ============================================================================

pub fn article(
    doi: &str,
    title: &str,
    status: ArticleStatus,
    institution: &str,
    allocation_month: &str,
    online_date: &str,
    price: f64,
) -> Article {
    Article {
        doi: doi.to_string(),
        article_title: title.to_string(),
        journal_title: "Journal of Testing".to_string(),
        article_status: status,
        approving_institution: institution.to_string(),
        allocation_month: allocation_month.to_string(),
        online_date: online_date.to_string(),
        oa_approval_date: None,
        customer_apc_list_price: price,
    }
}

/// Ten articles: 6 Approved, 4 Rejected.
///
/// | # | status | institution | month  | online     | price |
/// |---|--------|-------------|--------|------------|-------|
/// | 1 | A      | Oslo        | Mar-25 | 2025-03-02 | 2000  |
/// | 2 | A      | Oslo        | Feb-25 | 2025-02-10 | 1500  |
/// | 3 | R      | Oslo        | Feb-25 | 2025-02-11 | 1800  |
/// | 4 | A      | KTH         | Jan-25 | 2025-01-20 | 2500  |
/// | 5 | R      | KTH         | Dec-24 | 2024-12-05 | 3000  |
/// | 6 | A      | Helsinki    | Nov-24 | 2024-11-11 | 1000  |
/// | 7 | A      | Helsinki    | Apr-24 | 2024-04-01 | 1200  |
/// | 8 | R      | Helsinki    | Mar-24 | 2024-03-30 |  900  |
/// | 9 | A      | Aarhus      | Mar-25 | 2025-03-28 | 4000  |
/// |10 | R      | Aarhus      | (none) | not-a-date |  700  |
pub fn sample_articles() -> Vec<Article> {
    use ArticleStatus::{Approved, Rejected};
    vec![
        article("10.1000/a01", "Open Science Policy in Norway", Approved, OSLO, "Mar-25", "2025-03-02", 2000.0),
        article("10.1000/a02", "Arctic Sea Ice Decline", Approved, OSLO, "Feb-25", "2025-02-10", 1500.0),
        article("10.1000/a03", "Salmon Farming Economics", Rejected, OSLO, "Feb-25", "2025-02-11", 1800.0),
        article("10.1000/a04", "Quantum Transport in Graphene", Approved, KTH, "Jan-25", "2025-01-20", 2500.0),
        article("10.1000/a05", "Urban Cycling Behaviour", Rejected, KTH, "Dec-24", "2024-12-05", 3000.0),
        article("10.1000/a06", "Peatland Methane Flux", Approved, HELSINKI, "Nov-24", "2024-11-11", 1000.0),
        article("10.1000/a07", "Neural Correlates of Music", Approved, HELSINKI, "Apr-24", "2024-04-01", 1200.0),
        article("10.1000/a08", "Wind Farm Wake Effects", Rejected, HELSINKI, "Mar-24", "2024-03-30", 900.0),
        article("10.1000/a09", "Coastal Erosion Modelling", Approved, AARHUS, "Mar-25", "2025-03-28", 4000.0),
        article("10.1000/a10", "Ancient DNA from Burials", Rejected, AARHUS, "", "not-a-date", 700.0),
    ]
}

/// `n` approved articles with numbered titles, all in the reference month.
pub fn numbered_articles(n: usize) -> Vec<Article> {
    (1..=n)
        .map(|i| {
            article(
                &format!("10.2000/n{i:03}"),
                &format!("Numbered Article {i:03}"),
                ArticleStatus::Approved,
                OSLO,
                "Mar-25",
                "2025-03-01",
                100.0 * i as f64,
            )
        })
        .collect()
}

// ============================================================================
// APP STATE
// ============================================================================

pub fn test_config(page_size: usize) -> AppConfig {
    AppConfig {
        page_size,
        reference_date: Some(reference_date()),
        ..AppConfig::default()
    }
}

pub fn test_state(articles: Vec<Article>, page_size: usize) -> AppState {
    AppState::new(test_config(page_size), Arc::new(InMemorySource::new(articles)))
}
