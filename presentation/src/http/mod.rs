//! HTTP front end exposing single-model queries.
//!
//! `POST /generate` resolves a logical model key, shapes a payload from the
//! caller's question per the registry's rules, and returns the raw outcome.
//! Missing fields are a client error; an unknown key is not found.

pub mod routes;

pub use routes::{router, ApiState, GenerateRequest};
