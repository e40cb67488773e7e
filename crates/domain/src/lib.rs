//! # Domain
//!
//! Salary rules for job listings.
//!
//! - [`salary`]: validation, range matching and range filtering
//! - [`analytics`]: min/max aggregation and summaries over many records
//!
//! Everything here is pure: no I/O, no logging, no shared state.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod salary;

pub use analytics::{SalaryAggregator, SalarySummary};
pub use salary::{
    FilterPolicy, SalaryRange, filter_by_salary_range, filter_by_salary_range_with, matches_salary_range,
    record_range, validate_salaries, validated_range,
};
