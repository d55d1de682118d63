use chrono::NaiveDate;

use crate::models::filter::{ArticleType, DateRange, FilterSelection};

mod api;
mod dashboard;
pub use api::*;
pub use dashboard::*;

/// Sidebar entries: (label, path).
const NAV: &[(&str, &str)] = &[
    ("Performance and Spending", "/dashboard"),
    ("Deal Summary", "/deal-summary"),
];

pub struct NavItem {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One `<option>` of a filter control.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.nav_items`, etc.
pub struct PageContext {
    pub app_name: String,
    pub current_path: String,
    pub nav_items: Vec<NavItem>,
    pub date_range_options: Vec<SelectOption>,
    pub article_type_options: Vec<SelectOption>,
    pub institution_options: Vec<SelectOption>,
    pub filters_active: bool,
    pub reference_date: String,
}

impl PageContext {
    pub fn build(
        app_name: &str,
        current_path: &str,
        filters: &FilterSelection,
        institutions: &[String],
        today: NaiveDate,
    ) -> Self {
        let nav_items = NAV
            .iter()
            .map(|(label, href)| NavItem {
                label: label.to_string(),
                href: href.to_string(),
                active: *href == current_path,
            })
            .collect();

        let mut ranges = DateRange::options(today);
        if !ranges.contains(&filters.date_range) {
            ranges.push(filters.date_range);
        }
        let date_range_options = ranges
            .iter()
            .map(|r| SelectOption {
                value: r.to_param(),
                label: r.label(),
                selected: *r == filters.date_range,
            })
            .collect();

        let article_type_options = ArticleType::options()
            .iter()
            .map(|t| SelectOption {
                value: t.to_param().to_string(),
                label: t.label().to_string(),
                selected: *t == filters.article_type,
            })
            .collect();

        let mut institution_options = vec![SelectOption {
            value: "all".to_string(),
            label: "All Institutions".to_string(),
            selected: filters.institution.is_none(),
        }];
        institution_options.extend(institutions.iter().map(|name| SelectOption {
            value: name.clone(),
            label: name.clone(),
            selected: filters.institution.as_deref() == Some(name.as_str()),
        }));

        Self {
            app_name: app_name.to_string(),
            current_path: current_path.to_string(),
            nav_items,
            date_range_options,
            article_type_options,
            institution_options,
            filters_active: !filters.is_default(),
            reference_date: today.format("%d/%m/%Y").to_string(),
        }
    }
}
