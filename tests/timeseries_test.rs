//! Monthly bucketing for the articles-per-month chart.

mod common;

use rand::SeedableRng;
use rand::rngs::StdRng;

use oasis::models::filter::FilterSelection;
use oasis::models::month::YearMonth;
use oasis::models::timeseries::{ChartRange, bucketize};
use common::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn institution(name: &str) -> FilterSelection {
    FilterSelection { institution: Some(name.to_string()), ..Default::default() }
}

#[test]
fn test_output_length_matches_window() {
    let articles = sample_articles();
    for range in ChartRange::all() {
        let s = bucketize(&articles, &FilterSelection::default(), range, reference_date(), false, &mut rng());
        assert_eq!(s.buckets.len(), range.months());
    }
    let s = bucketize(&[], &FilterSelection::default(), ChartRange::Months6, reference_date(), false, &mut rng());
    assert_eq!(s.buckets.len(), 6);
}

#[test]
fn test_most_recent_month_first() {
    let s = bucketize(&sample_articles(), &FilterSelection::default(), ChartRange::Months12, reference_date(), false, &mut rng());
    assert_eq!(s.buckets[0].month, YearMonth::new(2025, 3));
    assert_eq!(s.buckets[11].month, YearMonth::new(2024, 4));

    let chrono_order: Vec<YearMonth> = s.chronological().iter().map(|b| b.month).collect();
    let mut sorted = chrono_order.clone();
    sorted.sort();
    assert_eq!(chrono_order, sorted);
}

#[test]
fn test_counts_per_month() {
    let s = bucketize(&sample_articles(), &FilterSelection::default(), ChartRange::Months3, reference_date(), false, &mut rng());
    let counts: Vec<(String, usize, usize, usize)> = s
        .buckets
        .iter()
        .map(|b| (b.label.clone(), b.approved, b.rejected, b.total))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Mar 2025".to_string(), 2, 0, 2),
            ("Feb 2025".to_string(), 1, 1, 2),
            ("Jan 2025".to_string(), 1, 0, 1),
        ]
    );
    assert!(!s.placeholder);
}

#[test]
fn test_window_excludes_older_and_undated_articles() {
    let s = bucketize(&sample_articles(), &FilterSelection::default(), ChartRange::Months12, reference_date(), false, &mut rng());
    let approved: usize = s.buckets.iter().map(|b| b.approved).sum();
    let rejected: usize = s.buckets.iter().map(|b| b.rejected).sum();
    // Article 8 (Mar 2024) falls outside; article 10 has no usable month
    assert_eq!(approved, 6);
    assert_eq!(rejected, 2);
}

#[test]
fn test_institution_filter_applies_to_chart() {
    let s = bucketize(&sample_articles(), &institution(KTH), ChartRange::Months3, reference_date(), false, &mut rng());
    let total: usize = s.buckets.iter().map(|b| b.total).sum();
    assert_eq!(total, 1);
    assert_eq!(s.buckets[2].approved, 1);
}

#[test]
fn test_empty_selection_is_all_zero_without_demo_mode() {
    let s = bucketize(&sample_articles(), &institution("Nowhere"), ChartRange::Months6, reference_date(), false, &mut rng());
    assert!(s.buckets.iter().all(|b| b.total == 0));
    assert!(!s.placeholder);
    assert_eq!(s.peak(), 0);
    assert!(s.buckets.iter().all(|b| b.approved_width == 0.0));
}

#[test]
fn test_demo_mode_fills_placeholder_counts() {
    let s = bucketize(&[], &FilterSelection::default(), ChartRange::Months6, reference_date(), true, &mut rng());
    assert!(s.placeholder);
    assert_eq!(s.buckets.len(), 6);
    assert!(s.buckets.iter().all(|b| b.approved >= 5 && b.total == b.approved + b.rejected));

    // Same seed, same placeholder series
    let again = bucketize(&[], &FilterSelection::default(), ChartRange::Months6, reference_date(), true, &mut rng());
    assert_eq!(s.buckets, again.buckets);
}

#[test]
fn test_demo_mode_ignored_when_data_matches() {
    let s = bucketize(&sample_articles(), &FilterSelection::default(), ChartRange::Months3, reference_date(), true, &mut rng());
    assert!(!s.placeholder);
    assert_eq!(s.buckets[0].approved, 2);
}

#[test]
fn test_window_crosses_year_boundary() {
    let jan = chrono::NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    let s = bucketize(&sample_articles(), &FilterSelection::default(), ChartRange::Months3, jan, false, &mut rng());
    let labels: Vec<&str> = s.buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan 2025", "Dec 2024", "Nov 2024"]);
    assert_eq!((s.buckets[1].approved, s.buckets[1].rejected), (0, 1));
}

#[test]
fn test_bar_widths_relative_to_peak() {
    let s = bucketize(&sample_articles(), &FilterSelection::default(), ChartRange::Months3, reference_date(), false, &mut rng());
    assert_eq!(s.peak(), 2);
    assert_eq!(s.buckets[0].approved_width, 100.0);
    assert_eq!(s.buckets[1].approved_width, 50.0);
    assert_eq!(s.buckets[0].approved_style(), "width: 100.0%");
}
