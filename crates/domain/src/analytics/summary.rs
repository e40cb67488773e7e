use job_insights_shared_kernel::{JobRecord, Salary, SalaryField};
use serde::Serialize;

use super::aggregate::SalaryAggregator;
use crate::salary::record_range;

/// Salary overview of a whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySummary {
    pub jobs: usize,
    /// Jobs whose own `[min_salary, max_salary]` range is well-formed.
    pub valid_ranges: usize,
    pub lowest_min: Option<Salary>,
    pub highest_max: Option<Salary>,
}

impl SalarySummary {
    pub fn from_records(jobs: &[JobRecord]) -> Self {
        Self {
            jobs: jobs.len(),
            valid_ranges: jobs.iter().filter(|job| record_range(job).is_ok()).count(),
            lowest_min: SalaryAggregator::numeric_values(jobs, SalaryField::Min).min(),
            highest_max: SalaryAggregator::numeric_values(jobs, SalaryField::Max).max(),
        }
    }
}
