use job_insights_shared_kernel::{DomainError, DomainResult, JobRecord, SalaryField, SalaryValue};

use super::{range::SalaryRange, validation::validated_range};

/// Tells whether `salary` lies within the job's inclusive salary range.
///
/// # Errors
///
/// - [`DomainError::MissingSalaryField`] when `min_salary` or `max_salary` is absent
/// - any error raised by [`super::validate_salaries`], unchanged
pub fn matches_salary_range(job: &JobRecord, salary: &SalaryValue) -> DomainResult<bool> {
    let (min, max) = salary_bounds(job)?;
    let (range, salary) = validated_range(&min, &max, salary)?;
    Ok(range.contains(salary))
}

/// The job's own salary range, validated without a query salary.
pub fn record_range(job: &JobRecord) -> DomainResult<SalaryRange> {
    let (min, max) = salary_bounds(job)?;
    SalaryRange::try_new(min.normalize()?, max.normalize()?)
}

fn salary_bounds(job: &JobRecord) -> DomainResult<(SalaryValue, SalaryValue)> {
    match (job.salary_value(SalaryField::Min), job.salary_value(SalaryField::Max)) {
        (Some(min), Some(max)) => Ok((min, max)),
        (min, max) => {
            let fields = [(SalaryField::Min, min.is_none()), (SalaryField::Max, max.is_none())]
                .into_iter()
                .filter_map(|(field, missing)| missing.then_some(field))
                .collect();
            Err(DomainError::MissingSalaryField { fields })
        }
    }
}
