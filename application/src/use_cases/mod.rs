//! Use cases - the application's entry points.

pub mod ask_model;
pub mod query_document;

pub use ask_model::{AskModelError, AskModelInput, AskModelUseCase};
pub use query_document::{
    QueryDocumentInput, QueryDocumentUseCase, EXTRACTION_SENTINEL_KEY,
};
