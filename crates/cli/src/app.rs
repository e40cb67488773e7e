use std::{io::Write, path::Path};

use job_insights_domain::validated_range;
use job_insights_infra::CsvJobSource;
use job_insights_shared_kernel::{JobInsightsError, SalaryField};
use job_insights_usecase::SalaryInsights;
use log::debug;

use crate::{
    config::{Config, Task},
    error::Result,
    presentation,
};

/// Executes the configured task, writing its report to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let source = CsvJobSource::new().with_delimiter(config.delimiter);
    let insights = SalaryInsights::new(&source);
    debug!("running {:?}", config.task);

    match &config.task {
        Task::Max { path } => {
            let stat = insights.statistic(&locator(path), SalaryField::Max)?;
            presentation::print_statistic(out, &stat, config.format)
        }
        Task::Min { path } => {
            let stat = insights.statistic(&locator(path), SalaryField::Min)?;
            presentation::print_statistic(out, &stat, config.format)
        }
        Task::Summary { path } => {
            let summary = insights.summarize(&locator(path))?;
            presentation::print_summary(out, &summary, config.format)
        }
        Task::Match { path, salary, policy } => {
            let matches = insights.filter_by_salary_range(&locator(path), salary, *policy)?;
            presentation::print_matches(out, &matches, config.format)
        }
        Task::Validate { min, max, salary } => {
            let (range, salary) = validated_range(min, max, salary).map_err(JobInsightsError::from)?;
            presentation::print_validation(out, range, salary, config.format)
        }
    }
}

fn locator(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
