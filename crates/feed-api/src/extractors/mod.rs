//! Custom extractors for API endpoints

pub mod validated;

pub use validated::ValidatedJson;
