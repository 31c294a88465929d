// Database model structs

use crate::models::Scores;

/// One persisted questionnaire submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub id: i64,
    pub scores: Scores,
}
