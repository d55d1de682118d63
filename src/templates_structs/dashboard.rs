use askama::Template;

use super::PageContext;
use crate::models::article::ArticlePage;
use crate::models::article::filter::TableQuery;
use crate::models::metrics::{ArticleMetrics, SpendingSummary};
use crate::models::table_filter::ColumnDef;
use crate::models::timeseries::{ChartRange, ChartSeries};

/// Article table as rendered by both pages.
pub struct TableView {
    pub article_page: ArticlePage,
    pub columns: Vec<ColumnDef>,
    pub form_action: String,
    pub search_query: String,
    pub sort: String,
    pub dir: String,
    pub prev_href: String,
    pub next_href: String,
    pub query: TableQuery,
}

pub struct ChartToggle {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Chart window links for the toggle group. The table keeps its search,
/// sort and page.
pub fn chart_toggles(base: &str, current: ChartRange, table: &TableView) -> Vec<ChartToggle> {
    ChartRange::all()
        .iter()
        .map(|r| ChartToggle {
            label: r.label(),
            href: table.query.href_with(base, table.article_page.page, "range", r.to_param()),
            active: *r == current,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub metrics: ArticleMetrics,
    pub spending: SpendingSummary,
    pub chart: ChartSeries,
    pub chart_toggles: Vec<ChartToggle>,
    pub table: TableView,
}

#[derive(Template)]
#[template(path = "deal_summary.html")]
pub struct DealSummaryTemplate {
    pub ctx: PageContext,
    pub table: TableView,
}
