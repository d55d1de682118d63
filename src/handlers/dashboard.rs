use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::{AppError, render};
use crate::handlers::{article_table, filters};
use crate::models::{metrics, timeseries};
use crate::state::AppState;
use crate::templates_structs::{DashboardTemplate, PageContext, chart_toggles};

const PATH: &str = "/dashboard";

pub async fn index(
    state: web::Data<AppState>,
    session: Session,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let pairs = filters::query_pairs(&req);
    let selection = filters::current_selection(&session, &pairs)?;
    let range = filters::current_chart_range(&session, &pairs)?;

    let today = state.config.today();
    let articles = state.source.articles();
    let institutions = state.source.institutions();

    let ctx = PageContext::build(&state.config.app_name, PATH, &selection, &institutions, today);
    let metrics = metrics::compute_metrics(articles, &selection, today);
    let spending = metrics::compute_spending(articles, &selection, today);
    let chart = {
        let mut rng = rand::rng();
        timeseries::bucketize(articles, &selection, range, today, state.config.demo_mode, &mut rng)
    };
    if chart.placeholder {
        log::info!("No articles match {selection:?}; showing demo placeholder chart");
    }

    let filtered = selection.apply(articles, today);
    let table = article_table::build(PATH, &filtered, &pairs, state.config.page_size);

    let chart_toggles = chart_toggles(PATH, range, &table);
    let tmpl = DashboardTemplate {
        ctx,
        metrics,
        spending,
        chart,
        chart_toggles,
        table,
    };
    render(tmpl)
}
