use job_insights_domain::{FilterPolicy, SalaryAggregator, SalarySummary, filter_by_salary_range_with};
use job_insights_ports::JobSource;
use job_insights_shared_kernel::{
    ApplicationError, JobRecord, Result, Salary, SalaryField, SalaryValue,
};
use log::debug;

use crate::dto::{SalaryMatches, SalaryStatistic};

/// Salary operations over listings obtained from a [`JobSource`].
///
/// Every call reads the listing afresh; nothing is cached between calls.
pub struct SalaryInsights<'a> {
    source: &'a dyn JobSource,
}

impl<'a> SalaryInsights<'a> {
    pub fn new(source: &'a dyn JobSource) -> Self {
        Self { source }
    }

    pub fn get_max_salary(&self, locator: &str) -> Result<Salary> {
        Ok(self.statistic(locator, SalaryField::Max)?.value)
    }

    pub fn get_min_salary(&self, locator: &str) -> Result<Salary> {
        Ok(self.statistic(locator, SalaryField::Min)?.value)
    }

    /// Max of `max_salary` or min of `min_salary`, depending on `field`.
    pub fn statistic(&self, locator: &str, field: SalaryField) -> Result<SalaryStatistic> {
        let jobs = self.load(locator)?;
        let value = match field {
            SalaryField::Max => SalaryAggregator::max_salary(&jobs)?,
            SalaryField::Min => SalaryAggregator::min_salary(&jobs)?,
        };
        debug!("{field} aggregate over {} jobs: {value}", jobs.len());
        Ok(SalaryStatistic { field, value })
    }

    pub fn summarize(&self, locator: &str) -> Result<SalarySummary> {
        let jobs = self.load(locator)?;
        Ok(SalarySummary::from_records(&jobs))
    }

    /// Jobs whose salary range contains `salary`, in listing order.
    pub fn filter_by_salary_range(
        &self,
        locator: &str,
        salary: &SalaryValue,
        policy: FilterPolicy,
    ) -> Result<SalaryMatches> {
        let salary_value = salary.normalize()?;
        let jobs = self.load(locator)?;
        let matched: Vec<JobRecord> =
            filter_by_salary_range_with(&jobs, salary, policy)?.into_iter().cloned().collect();
        debug!("{} of {} jobs match salary {salary_value} ({policy:?})", matched.len(), jobs.len());
        Ok(SalaryMatches { salary: salary_value, total: jobs.len(), jobs: matched })
    }

    fn load(&self, locator: &str) -> Result<Vec<JobRecord>> {
        let jobs = self
            .source
            .read(locator)
            .map_err(|e| ApplicationError::ReadFailed { locator: locator.to_string(), source: Box::new(e) })?;
        debug!("loaded {} jobs from {locator}", jobs.len());
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use job_insights_shared_kernel::{DomainError, InfrastructureError, JobInsightsError};

    use super::*;

    #[derive(Default)]
    struct StubSource {
        jobs: Vec<JobRecord>,
        reads: Mutex<Vec<String>>,
    }

    impl StubSource {
        fn with_ranges(ranges: &[(&str, &str)]) -> Self {
            let jobs = ranges
                .iter()
                .map(|(min, max)| JobRecord::from([("min_salary", *min), ("max_salary", *max)]))
                .collect();
            Self { jobs, reads: Mutex::new(Vec::new()) }
        }
    }

    impl JobSource for StubSource {
        fn read(&self, locator: &str) -> Result<Vec<JobRecord>> {
            self.reads.lock().unwrap().push(locator.to_string());
            Ok(self.jobs.clone())
        }
    }

    struct FailingSource;

    impl JobSource for FailingSource {
        fn read(&self, locator: &str) -> Result<Vec<JobRecord>> {
            Err(InfrastructureError::FileRead {
                path: locator.into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            }
            .into())
        }
    }

    #[test]
    fn max_and_min_pass_locator_to_source() {
        let stub = StubSource::with_ranges(&[("100", "900"), ("50", "abc"), ("", "1200")]);
        let insights = SalaryInsights::new(&stub);

        assert_eq!(insights.get_max_salary("jobs.csv").unwrap(), Salary::new(1200));
        assert_eq!(insights.get_min_salary("other.csv").unwrap(), Salary::new(50));
        assert_eq!(*stub.reads.lock().unwrap(), ["jobs.csv", "other.csv"]);
    }

    #[test]
    fn empty_aggregation_surfaces_domain_error() {
        let stub = StubSource::with_ranges(&[("n/a", "n/a")]);
        let err = SalaryInsights::new(&stub).get_max_salary("jobs.csv").unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::EmptyAggregation { field: SalaryField::Max })));
    }

    #[test]
    fn read_failure_names_locator() {
        let err = SalaryInsights::new(&FailingSource).get_min_salary("missing.csv").unwrap_err();
        assert!(matches!(err, JobInsightsError::Application(ApplicationError::ReadFailed { ref locator, .. }) if locator == "missing.csv"));
        assert!(err.as_domain().is_none());
    }

    #[test]
    fn filter_returns_owned_matches() {
        let stub = StubSource::with_ranges(&[("0", "10"), ("20", "30"), ("x", "y"), ("5", "25")]);
        let matches = SalaryInsights::new(&stub)
            .filter_by_salary_range("jobs.csv", &SalaryValue::from("7"), FilterPolicy::Skip)
            .unwrap();
        assert_eq!(matches.salary, Salary::new(7));
        assert_eq!(matches.total, 4);
        assert_eq!(matches.jobs.len(), 2);
        assert_eq!(matches.jobs[1].get("max_salary"), Some("25"));
    }

    #[test]
    fn invalid_query_is_rejected_before_reading() {
        let stub = StubSource::default();
        let err = SalaryInsights::new(&stub)
            .filter_by_salary_range("jobs.csv", &SalaryValue::from("-3"), FilterPolicy::Skip)
            .unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::InvalidSalaryType { .. })));
        assert!(stub.reads.lock().unwrap().is_empty());
    }

    #[test]
    fn summary_counts_valid_ranges() {
        let stub = StubSource::with_ranges(&[("1", "2"), ("3", "1"), ("4", "")]);
        let summary = SalaryInsights::new(&stub).summarize("jobs.csv").unwrap();
        assert_eq!(summary.jobs, 3);
        assert_eq!(summary.valid_ranges, 1);
        assert_eq!(summary.lowest_min, Some(Salary::new(1)));
        assert_eq!(summary.highest_max, Some(Salary::new(2)));
    }
}
