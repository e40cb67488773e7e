use job_insights_shared_kernel::{DomainResult, Salary, SalaryValue};

use super::range::SalaryRange;

/// Checks that all three values are valid salaries and that `min_salary` does
/// not exceed `max_salary`.
///
/// Type errors take precedence over range errors: every value is normalised
/// before the bounds are compared, and bounds are compared as integers, so
/// `"9"` is below `"10"`.
pub fn validate_salaries(
    min_salary: &SalaryValue,
    max_salary: &SalaryValue,
    salary: &SalaryValue,
) -> DomainResult<()> {
    validated_range(min_salary, max_salary, salary).map(|_| ())
}

/// Same checks as [`validate_salaries`], handing back the normalised values.
pub fn validated_range(
    min_salary: &SalaryValue,
    max_salary: &SalaryValue,
    salary: &SalaryValue,
) -> DomainResult<(SalaryRange, Salary)> {
    let min = min_salary.normalize()?;
    let max = max_salary.normalize()?;
    let salary = salary.normalize()?;
    Ok((SalaryRange::try_new(min, max)?, salary))
}
