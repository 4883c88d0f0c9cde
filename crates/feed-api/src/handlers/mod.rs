//! Request handlers organized by domain

pub mod comments;
pub mod feedback;
pub mod health;
pub mod reactions;
pub mod reconcile;
