use std::fmt;

use crate::models::{Catalog, Category, Scores};

/// Totals above this are classified as high likelihood.
pub const HIGH_THRESHOLD: i64 = 60;
/// Totals above this (and not above [`HIGH_THRESHOLD`]) are moderate.
pub const MODERATE_THRESHOLD: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Likelihood {
    Low,
    Moderate,
    High,
}

impl Likelihood {
    pub fn label(self) -> &'static str {
        match self {
            Likelihood::Low => "Low likelihood of ASD",
            Likelihood::Moderate => "Moderate likelihood of ASD",
            Likelihood::High => "High likelihood of ASD",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("category `{0}` has no questions")]
    EmptyCategory(&'static str),
    #[error("category `{category}` refers to unknown question `{id}`")]
    UnknownQuestion {
        category: &'static str,
        id: &'static str,
    },
}

/// Sum of all answers; an unanswered nullable question counts as zero.
///
/// Saturates instead of overflowing so a row written outside the accepted
/// answer range still scores.
pub fn compute_total(values: &[Option<i64>]) -> i64 {
    values
        .iter()
        .fold(0i64, |acc, v| acc.saturating_add(v.unwrap_or(0)))
}

pub fn classify(total: i64) -> Likelihood {
    if total > HIGH_THRESHOLD {
        Likelihood::High
    } else if total > MODERATE_THRESHOLD {
        Likelihood::Moderate
    } else {
        Likelihood::Low
    }
}

pub fn category_sum(
    catalog: &Catalog,
    category: &Category,
    scores: &Scores,
) -> Result<i64, ScoringError> {
    category.members.iter().try_fold(0i64, |acc, id| {
        let idx = catalog
            .position(id)
            .ok_or(ScoringError::UnknownQuestion {
                category: category.name,
                id: *id,
            })?;
        Ok(acc.saturating_add(scores.values().get(idx).copied().flatten().unwrap_or(0)))
    })
}

/// Category sum divided by the number of questions in the category.
pub fn category_mean(
    catalog: &Catalog,
    category: &Category,
    scores: &Scores,
) -> Result<f64, ScoringError> {
    if category.members.is_empty() {
        return Err(ScoringError::EmptyCategory(category.name));
    }
    let sum = category_sum(catalog, category, scores)?;
    Ok(sum as f64 / category.members.len() as f64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub name: &'static str,
    pub sum: i64,
    pub mean: f64,
}

/// Sum and mean for every category, in catalog order.
pub fn category_scores(
    catalog: &Catalog,
    scores: &Scores,
) -> Result<Vec<CategoryScore>, ScoringError> {
    catalog
        .categories()
        .iter()
        .map(|category| {
            Ok(CategoryScore {
                name: category.name,
                sum: category_sum(catalog, category, scores)?,
                mean: category_mean(catalog, category, scores)?,
            })
        })
        .collect()
}
