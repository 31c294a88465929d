use axum::{
    extract::{Path, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use maud::Markup;

use crate::{
    charts::{self, ChartInput, ChartKind},
    names,
    rejections::{AppError, ResultExt},
    scoring, views,
    views::result as result_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/result/{id}", get(result_page))
        .route("/charts/{id}/{file}", get(chart_file))
}

async fn result_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Markup, AppError> {
    let assessment = state
        .db
        .get_assessment(&state.catalog, id)
        .await
        .reject("could not get assessment")?
        .ok_or(AppError::NotFound(names::ASSESSMENT_NOT_FOUND))?;

    let totals = state
        .db
        .assessment_totals(&state.catalog)
        .await
        .reject("could not get assessment totals")?;

    let categories = scoring::category_scores(&state.catalog, &assessment.scores)
        .reject("could not aggregate category scores")?;

    let rendered = charts::render_all(&ChartInput {
        catalog: &state.catalog,
        scores: &assessment.scores,
        categories: &categories,
        totals: &totals,
    })
    .reject("could not render charts")?;

    state
        .charts
        .save(id, &rendered)
        .await
        .reject("could not write charts")?;

    let total = scoring::compute_total(assessment.scores.values());
    let likelihood = scoring::classify(total);
    tracing::debug!(id, total, ?likelihood, "assessment scored");

    Ok(views::page(
        "Result",
        result_views::result(result_views::ResultData {
            assessment_id: id,
            total,
            likelihood,
            categories,
        }),
    ))
}

async fn chart_file(
    State(state): State<AppState>,
    Path((id, file)): Path<(i64, String)>,
) -> Result<Response, AppError> {
    let kind =
        ChartKind::from_file_name(&file).ok_or(AppError::NotFound(names::CHART_NOT_FOUND))?;

    let svg = state
        .charts
        .load(id, kind)
        .await
        .reject("could not read chart")?
        .ok_or(AppError::NotFound(names::CHART_NOT_FOUND))?;

    Ok((
        [(CONTENT_TYPE, "image/svg+xml"), (CACHE_CONTROL, "no-cache")],
        svg,
    )
        .into_response())
}
