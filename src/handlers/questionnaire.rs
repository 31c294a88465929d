use std::collections::HashMap;

use axum::{
    extract::{Form, State},
    response::Redirect,
    routing::get,
    Router,
};
use maud::Markup;

use crate::{
    names,
    rejections::{AppError, ResultExt},
    views,
    views::questionnaire as questionnaire_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        names::QUESTIONNAIRE_URL,
        get(questionnaire_page).post(submit_questionnaire),
    )
}

async fn questionnaire_page(State(state): State<AppState>) -> Markup {
    views::page("Questionnaire", questionnaire_views::form(&state.catalog))
}

async fn submit_questionnaire(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let scores = state.catalog.parse_submission(&form)?;

    let id = state
        .db
        .insert_assessment(&state.catalog, &scores)
        .await
        .reject("could not save assessment")?;

    Ok(Redirect::to(&names::result_url(id)))
}
