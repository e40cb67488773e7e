use job_insights_shared_kernel::{DomainError, DomainResult, JobRecord, Salary, SalaryField};

/// Min/max over the numeric salary columns of many jobs.
pub struct SalaryAggregator;

impl SalaryAggregator {
    /// Highest `max_salary` among jobs whose `max_salary` is a numeric string.
    pub fn max_salary(jobs: &[JobRecord]) -> DomainResult<Salary> {
        Self::numeric_values(jobs, SalaryField::Max)
            .max()
            .ok_or(DomainError::EmptyAggregation { field: SalaryField::Max })
    }

    /// Lowest `min_salary` among jobs whose `min_salary` is a numeric string.
    pub fn min_salary(jobs: &[JobRecord]) -> DomainResult<Salary> {
        Self::numeric_values(jobs, SalaryField::Min)
            .min()
            .ok_or(DomainError::EmptyAggregation { field: SalaryField::Min })
    }

    /// Values of `field` that parse as non-negative integers. Jobs lacking the
    /// field, or holding anything but ASCII digits there, contribute nothing.
    pub fn numeric_values(jobs: &[JobRecord], field: SalaryField) -> impl Iterator<Item = Salary> + '_ {
        jobs.iter().filter_map(move |job| job.salary_text(field).and_then(Salary::parse_numeric))
    }
}
