use job_insights_shared_kernel::{JobRecord, Salary, SalaryField};
use serde::Serialize;

/// A single aggregated salary column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryStatistic {
    pub field: SalaryField,
    pub value: Salary,
}

/// Jobs of a listing whose salary range contains `salary`.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryMatches {
    pub salary: Salary,
    pub total: usize,
    pub jobs: Vec<JobRecord>,
}
