#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use screener::{charts::ChartStore, db::Db, models::Catalog, AppState};
use sqlx::SqlitePool;

static COUNTER: AtomicU32 = AtomicU32::new(0);

fn scratch_path(kind: &str) -> PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("screener_test_{kind}_{}_{}", std::process::id(), id))
}

/// A fresh database, plus a second pool on the same file for checks that go
/// around the `Db` API.
pub async fn create_test_db_with_pool() -> (Db, SqlitePool) {
    let path = scratch_path("db");
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    let db = Db::new(url.clone())
        .await
        .expect("failed to create test database");
    let pool = SqlitePool::connect(&url)
        .await
        .expect("failed to open test database");
    (db, pool)
}

pub async fn create_test_db() -> Db {
    create_test_db_with_pool().await.0
}

pub async fn create_test_state_with_pool() -> (AppState, SqlitePool) {
    let (db, pool) = create_test_db_with_pool().await;
    let chart_dir = scratch_path("charts");
    let _ = std::fs::remove_dir_all(&chart_dir);
    (AppState::new(db, ChartStore::new(chart_dir)), pool)
}

pub async fn create_test_state() -> AppState {
    create_test_state_with_pool().await.0
}

pub async fn stored_assessments(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM assessments")
        .fetch_one(pool)
        .await
        .expect("count query failed")
}

/// Urlencoded form body answering every question with `value`, leaving out
/// any question listed in `skip`.
pub fn form_body(value: i64, skip: &[&str]) -> String {
    Catalog::default()
        .questions()
        .iter()
        .filter(|q| !skip.contains(&q.id))
        .map(|q| format!("{}={value}", q.id))
        .collect::<Vec<_>>()
        .join("&")
}
