//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate wires the salary rules of the domain to a job source:
//!
//! - [`orchestrator`]: reads a listing and runs aggregation, summaries and filtering
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{SalaryMatches, SalaryStatistic};
pub use orchestrator::SalaryInsights;
