use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::{AppError, render};
use crate::handlers::{article_table, filters};
use crate::state::AppState;
use crate::templates_structs::{DealSummaryTemplate, PageContext};

const PATH: &str = "/deal-summary";

pub async fn index(
    state: web::Data<AppState>,
    session: Session,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let pairs = filters::query_pairs(&req);
    let selection = filters::current_selection(&session, &pairs)?;

    let today = state.config.today();
    let institutions = state.source.institutions();
    let ctx = PageContext::build(&state.config.app_name, PATH, &selection, &institutions, today);

    let filtered = selection.apply(state.source.articles(), today);
    let table = article_table::build(PATH, &filtered, &pairs, state.config.page_size);

    render(DealSummaryTemplate { ctx, table })
}
