//! Hugging Face inference API adapter.

pub mod client;

pub use client::{HfInferenceClient, DEFAULT_API_URL};
