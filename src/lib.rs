pub mod charts;
pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod scoring;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub catalog: Arc<models::Catalog>,
    pub charts: charts::ChartStore,
}

impl AppState {
    pub fn new(db: db::Db, charts: charts::ChartStore) -> Self {
        Self {
            db,
            catalog: Arc::new(models::Catalog::default()),
            charts,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::questionnaire::routes())
        .merge(handlers::result::routes())
        .merge(handlers::api::routes())
        .nest("/static", statics::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
