//! Entity ↔ model mappers

mod comment;
mod feedback;
mod reaction;
