//! # job_insights
//!
//! Salary statistics and salary-range matching over job listings.
//!
//! The free functions here read CSV listings through [`CsvJobSource`]; use
//! [`SalaryInsights`] directly to plug in another [`JobSource`].
//!
//! ```no_run
//! use job_insights::{JobRecord, SalaryValue, get_max_salary, matches_salary_range};
//!
//! let highest = get_max_salary("data/jobs.csv")?;
//! let job = JobRecord::from([("min_salary", "50000"), ("max_salary", "90000")]);
//! assert!(matches_salary_range(&job, &SalaryValue::from(90_000))?);
//! # let _ = highest;
//! # Ok::<(), job_insights::JobInsightsError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

pub use job_insights_domain::{
    FilterPolicy, SalaryAggregator, SalaryRange, SalarySummary, filter_by_salary_range, filter_by_salary_range_with,
    matches_salary_range, validate_salaries,
};
pub use job_insights_infra::CsvJobSource;
pub use job_insights_ports::JobSource;
pub use job_insights_shared_kernel::{
    DomainError, DomainResult, ErrorContext, JobInsightsError, JobRecord, Result, Salary, SalaryField, SalaryValue,
};
pub use job_insights_usecase::{SalaryInsights, SalaryMatches, SalaryStatistic};

/// All jobs of a comma-separated listing with a header row.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<JobRecord>> {
    Ok(CsvJobSource::new().read_path(path.as_ref())?)
}

/// Highest numeric `max_salary` in the listing at `path`.
pub fn get_max_salary(path: impl AsRef<Path>) -> Result<Salary> {
    SalaryInsights::new(&CsvJobSource::new()).get_max_salary(&locator(path.as_ref()))
}

/// Lowest numeric `min_salary` in the listing at `path`.
pub fn get_min_salary(path: impl AsRef<Path>) -> Result<Salary> {
    SalaryInsights::new(&CsvJobSource::new()).get_min_salary(&locator(path.as_ref()))
}

fn locator(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
