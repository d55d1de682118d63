//! Per-visitor filter state kept in the cookie session.

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::filter::{FilterSelection, FilterUpdate};
use crate::models::timeseries::ChartRange;

const FILTERS_KEY: &str = "filters";
const CHART_RANGE_KEY: &str = "chart_range";

/// Pages a reset may send the visitor back to.
const RESET_TARGETS: &[&str] = &["/dashboard", "/deal-summary"];

/// Decode the raw query string into pairs, keeping repeated keys.
pub fn query_pairs(req: &HttpRequest) -> Vec<(String, String)> {
    match serde_urlencoded::from_str::<Vec<(String, String)>>(req.query_string()) {
        Ok(pairs) => pairs,
        Err(e) => {
            log::warn!("Ignoring malformed query string {:?}: {e}", req.query_string());
            vec![]
        }
    }
}

pub fn filter_update(pairs: &[(String, String)]) -> FilterUpdate {
    let get = |key: &str| pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.clone());
    FilterUpdate {
        date_range: get("date_range"),
        article_type: get("article_type"),
        institution: get("institution"),
    }
}

/// Merge any filter parameters in the request into the session selection
/// and return the result.
pub fn current_selection(session: &Session, pairs: &[(String, String)]) -> Result<FilterSelection, AppError> {
    let stored = session.get::<FilterSelection>(FILTERS_KEY)?.unwrap_or_default();
    let update = filter_update(pairs);
    if update.is_empty() {
        return Ok(stored);
    }
    let next = stored.merge(&update);
    if next != stored {
        session.insert(FILTERS_KEY, &next)?;
    }
    Ok(next)
}

/// Chart window from `range`, falling back to the session, then 12 months.
pub fn current_chart_range(session: &Session, pairs: &[(String, String)]) -> Result<ChartRange, AppError> {
    let requested = pairs.iter().rev().find(|(k, _)| k == "range").map(|(_, v)| v.as_str());
    if let Some(raw) = requested {
        match ChartRange::from_param(raw) {
            Some(range) => {
                session.insert(CHART_RANGE_KEY, range.to_param())?;
                return Ok(range);
            }
            None => log::warn!("Ignoring unknown chart range: {raw:?}"),
        }
    }
    let stored = session.get::<String>(CHART_RANGE_KEY)?;
    Ok(stored.as_deref().and_then(ChartRange::from_param).unwrap_or_default())
}

#[derive(Deserialize)]
pub struct ResetQuery {
    next: Option<String>,
}

pub async fn reset(session: Session, query: web::Query<ResetQuery>) -> HttpResponse {
    session.remove(FILTERS_KEY);
    let target = query
        .next
        .as_deref()
        .filter(|n| RESET_TARGETS.contains(n))
        .unwrap_or("/dashboard")
        .to_string();
    HttpResponse::SeeOther()
        .insert_header(("Location", target))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_update_takes_last_value() {
        let pairs = vec![
            ("institution".to_string(), "A".to_string()),
            ("institution".to_string(), "B".to_string()),
            ("q".to_string(), "x".to_string()),
        ];
        let update = filter_update(&pairs);
        assert_eq!(update.institution.as_deref(), Some("B"));
        assert!(update.date_range.is_none());
        assert!(!update.is_empty());
    }
}
