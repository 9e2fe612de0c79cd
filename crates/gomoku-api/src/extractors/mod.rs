//! Custom Axum extractors.

pub mod validated;

pub use validated::{ValidatedJson, validate};
