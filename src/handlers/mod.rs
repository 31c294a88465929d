pub mod api;
pub mod questionnaire;
pub mod result;
