//! Query data model - payloads, outcomes and the aggregated result set.
//!
//! - [`payload::QueryPayload`] - shaped request body for one model
//! - [`outcome::QueryOutcome`] - terminal result of one invocation
//! - [`result_set::ResultSet`] - ordered key → outcome mapping for one run

pub mod outcome;
pub mod payload;
pub mod result_set;
