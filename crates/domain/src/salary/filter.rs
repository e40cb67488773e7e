use job_insights_shared_kernel::{DomainError, DomainResult, JobRecord, SalaryValue};
use serde::{Deserialize, Serialize};

use super::matching::matches_salary_range;

/// What to do with a job whose own salary range is unusable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPolicy {
    /// Leave the job out and keep going.
    #[default]
    Skip,
    /// Stop at the first such job.
    Strict,
}

/// Jobs whose salary range contains `salary`, in their original order.
///
/// Jobs with missing or malformed salary fields are skipped. An invalid
/// `salary` fails the whole call.
pub fn filter_by_salary_range<'a>(jobs: &'a [JobRecord], salary: &SalaryValue) -> DomainResult<Vec<&'a JobRecord>> {
    filter_by_salary_range_with(jobs, salary, FilterPolicy::Skip)
}

/// Like [`filter_by_salary_range`] with an explicit policy for invalid jobs.
///
/// Under [`FilterPolicy::Strict`] the first failing job is reported as
/// [`DomainError::InvalidRecord`] carrying its position.
pub fn filter_by_salary_range_with<'a>(
    jobs: &'a [JobRecord],
    salary: &SalaryValue,
    policy: FilterPolicy,
) -> DomainResult<Vec<&'a JobRecord>> {
    // Normalised once so a bad query is never mistaken for a bad job.
    let query = SalaryValue::from(salary.normalize()?);

    let mut matched = Vec::new();
    for (index, job) in jobs.iter().enumerate() {
        match matches_salary_range(job, &query) {
            Ok(true) => matched.push(job),
            Ok(false) => {}
            Err(_) if policy == FilterPolicy::Skip => {}
            Err(source) => return Err(DomainError::InvalidRecord { index, source: Box::new(source) }),
        }
    }
    Ok(matched)
}
