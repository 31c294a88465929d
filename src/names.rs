use crate::charts::ChartKind;

pub const QUESTIONNAIRE_URL: &str = "/";
pub const STYLESHEET_URL: &str = "/static/index.css";

pub const ASSESSMENT_NOT_FOUND: &str = "Assessment not found";
pub const CHART_NOT_FOUND: &str = "Chart not found";

pub fn result_url(id: i64) -> String {
    format!("/result/{id}")
}

pub fn api_assessment_url(id: i64) -> String {
    format!("/api/assessment/{id}")
}

pub fn chart_url(id: i64, kind: ChartKind) -> String {
    format!("/charts/{id}/{}", kind.file_name())
}

// Answer choices offered by the form
pub const ANSWER_SCALE: &[(i64, &str)] = &[
    (0, "Never"),
    (1, "Rarely"),
    (2, "Sometimes"),
    (3, "Often"),
    (4, "Very often"),
    (5, "Always"),
];
pub const NOT_APPLICABLE_LABEL: &str = "Not applicable";
