use color_eyre::{eyre::ensure, Result};
use sqlx::{sqlite::SqliteRow, Row};

use super::models::Assessment;
use super::Db;
use crate::models::{Catalog, Scores};
use crate::scoring;

fn column_list(catalog: &Catalog) -> String {
    catalog
        .questions()
        .iter()
        .map(|q| q.id)
        .collect::<Vec<_>>()
        .join(", ")
}

fn assessment_from_row(catalog: &Catalog, row: &SqliteRow) -> Result<Assessment> {
    let id: i64 = row.try_get("id")?;
    let values = catalog
        .questions()
        .iter()
        .map(|q| row.try_get::<Option<i64>, _>(q.id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Assessment {
        id,
        scores: Scores::new(values),
    })
}

impl Db {
    /// Insert one submission inside a transaction and return its new id.
    /// A failed insert rolls the transaction back before the error is returned.
    pub async fn insert_assessment(&self, catalog: &Catalog, scores: &Scores) -> Result<i64> {
        ensure!(
            scores.len() == catalog.len(),
            "expected {} answers, got {}",
            catalog.len(),
            scores.len()
        );

        let placeholders = vec!["?"; catalog.len()].join(", ");
        let sql = format!(
            "INSERT INTO assessments ({}) VALUES ({placeholders})",
            column_list(catalog)
        );

        let mut tx = self.pool.begin().await?;

        let mut query = sqlx::query(&sql);
        for value in scores.values() {
            query = query.bind(*value);
        }

        let id = match query.execute(&mut *tx).await {
            Ok(done) => done.last_insert_rowid(),
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };

        tx.commit().await?;

        tracing::info!("new assessment created with id: {id}");
        Ok(id)
    }

    pub async fn get_assessment(&self, catalog: &Catalog, id: i64) -> Result<Option<Assessment>> {
        let sql = format!(
            "SELECT id, {} FROM assessments WHERE id = ?",
            column_list(catalog)
        );

        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(|row| assessment_from_row(catalog, &row))
            .transpose()
    }

    pub async fn all_assessments(&self, catalog: &Catalog) -> Result<Vec<Assessment>> {
        let sql = format!(
            "SELECT id, {} FROM assessments ORDER BY id",
            column_list(catalog)
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| assessment_from_row(catalog, row))
            .collect()
    }

    /// Total score of every stored assessment, oldest first.
    pub async fn assessment_totals(&self, catalog: &Catalog) -> Result<Vec<i64>> {
        let totals = self
            .all_assessments(catalog)
            .await?
            .iter()
            .map(|a| scoring::compute_total(a.scores.values()))
            .collect();
        Ok(totals)
    }
}
