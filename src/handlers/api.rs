use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    db::Assessment,
    models::Catalog,
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/assessment/{id}", get(get_assessment))
}

/// `id` followed by every answer keyed by question id, in catalog order.
struct AssessmentBody<'a> {
    catalog: &'a Catalog,
    assessment: &'a Assessment,
}

impl Serialize for AssessmentBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values = self.assessment.scores.values();
        let mut map = serializer.serialize_map(Some(values.len() + 1))?;
        map.serialize_entry("id", &self.assessment.id)?;
        for (question, value) in self.catalog.questions().iter().zip(values) {
            map.serialize_entry(question.id, value)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let assessment = state
        .db
        .get_assessment(&state.catalog, id)
        .await
        .reject("could not get assessment")?;

    Ok(match assessment {
        Some(assessment) => Json(AssessmentBody {
            catalog: &state.catalog,
            assessment: &assessment,
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: names::ASSESSMENT_NOT_FOUND,
            }),
        )
            .into_response(),
    })
}
