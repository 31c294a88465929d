pub mod layout;
pub mod questionnaire;
pub mod result;

// Re-export commonly used functions from layout
pub use layout::page;
