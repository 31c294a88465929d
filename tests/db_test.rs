mod common;

use common::{create_test_db, create_test_db_with_pool, stored_assessments};
use screener::models::{Catalog, Scores};
use screener::scoring;

fn scores(f: impl Fn(usize) -> Option<i64>) -> Scores {
    Scores::new((0..Catalog::default().len()).map(f).collect())
}

#[tokio::test]
async fn test_db_connection() {
    let (_db, pool) = create_test_db_with_pool().await;
    let versions: Vec<String> = sqlx::query_scalar("SELECT version FROM schema_migrations")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(versions, vec!["V1".to_string()]);
}

#[tokio::test]
async fn test_columns_follow_catalog_order() {
    let (_db, pool) = create_test_db_with_pool().await;
    let catalog = Catalog::default();

    let columns: Vec<String> =
        sqlx::query_scalar("SELECT name FROM pragma_table_info('assessments') ORDER BY cid")
            .fetch_all(&pool)
            .await
            .unwrap();
    let mut expected = vec!["id".to_string()];
    expected.extend(catalog.questions().iter().map(|q| q.id.to_string()));
    assert_eq!(columns, expected);
}

#[tokio::test]
async fn test_insert_and_get_assessment() {
    let db = create_test_db().await;
    let catalog = Catalog::default();
    let submitted = scores(|i| Some(i as i64 % 6));

    let id = db.insert_assessment(&catalog, &submitted).await.unwrap();
    assert!(id > 0);

    let stored = db.get_assessment(&catalog, id).await.unwrap().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.scores, submitted);
}

#[tokio::test]
async fn test_nullable_answer_is_stored_as_null() {
    let db = create_test_db().await;
    let catalog = Catalog::default();
    let nullable = catalog.position("age_started_speaking").unwrap();
    let submitted = scores(|i| (i != nullable).then_some(1));

    let id = db.insert_assessment(&catalog, &submitted).await.unwrap();
    let stored = db.get_assessment(&catalog, id).await.unwrap().unwrap();

    assert_eq!(stored.scores.get(&catalog, "age_started_speaking"), None);
    assert_eq!(scoring::compute_total(stored.scores.values()), 21);
}

#[tokio::test]
async fn test_missing_required_answer_is_rolled_back() {
    let (db, pool) = create_test_db_with_pool().await;
    let catalog = Catalog::default();
    let submitted = scores(|i| (i != 0).then_some(1));

    let result = db.insert_assessment(&catalog, &submitted).await;
    assert!(result.is_err());
    assert_eq!(stored_assessments(&pool).await, 0);

    // The pool is still usable after the rollback.
    let id = db
        .insert_assessment(&catalog, &scores(|_| Some(2)))
        .await
        .unwrap();
    assert!(db.get_assessment(&catalog, id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_wrong_answer_count_is_rejected() {
    let (db, pool) = create_test_db_with_pool().await;
    let catalog = Catalog::default();

    let result = db
        .insert_assessment(&catalog, &Scores::new(vec![Some(1); 3]))
        .await;
    assert!(result.is_err());
    assert_eq!(stored_assessments(&pool).await, 0);
}

#[tokio::test]
async fn test_get_unknown_assessment() {
    let db = create_test_db().await;
    let catalog = Catalog::default();
    assert!(db.get_assessment(&catalog, 42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_totals_cover_every_assessment() {
    let db = create_test_db().await;
    let catalog = Catalog::default();

    assert!(db.assessment_totals(&catalog).await.unwrap().is_empty());

    db.insert_assessment(&catalog, &scores(|_| Some(1)))
        .await
        .unwrap();
    db.insert_assessment(&catalog, &scores(|_| Some(3)))
        .await
        .unwrap();
    db.insert_assessment(&catalog, &scores(|i| (i < 10).then_some(0).or(Some(5))))
        .await
        .unwrap();

    let totals = db.assessment_totals(&catalog).await.unwrap();
    assert_eq!(totals, vec![22, 66, 60]);

    let all = db.all_assessments(&catalog).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}
