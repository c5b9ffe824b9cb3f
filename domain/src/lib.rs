//! Domain layer for docquery
//!
//! This crate contains the core entities and value objects. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Document query
//!
//! One run takes a source [`Document`], derives its [`ExtractedText`], and
//! dispatches that text to every model in the [`ModelRegistry`]. Each
//! invocation terminates in a [`QueryOutcome`] - success or failure - and
//! the keyed outcomes aggregate into a [`ResultSet`].
//!
//! ## Payload shaping
//!
//! Each [`ModelSpec`] carries a [`PayloadShape`] describing how extracted
//! text is packaged for that model family: verbatim (`RawText`) or paired
//! with a question (`QuestionContext`).

pub mod core;
pub mod document;
pub mod query;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{error::DomainError, question::Question};
pub use document::{text::ExtractedText, Document, DocumentFormat};
pub use query::{
    outcome::{FailureKind, QueryOutcome},
    payload::QueryPayload,
    result_set::ResultSet,
};
pub use registry::{ModelRegistry, ModelSpec, PayloadShape};
