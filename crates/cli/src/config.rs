// crates/cli/src/config.rs
use std::path::PathBuf;

use job_insights_domain::FilterPolicy;
use job_insights_shared_kernel::SalaryValue;

use crate::args::{Args, Command};
use crate::options::OutputFormat;

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Max { path: PathBuf },
    Min { path: PathBuf },
    Summary { path: PathBuf },
    Match { path: PathBuf, salary: SalaryValue, policy: FilterPolicy },
    Validate { min: SalaryValue, max: SalaryValue, salary: SalaryValue },
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub delimiter: u8,
    pub verbose: bool,
    pub task: Task,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // Command-line salaries are always text; validation decides whether they are numeric.
        let task = match args.command {
            Command::Max { path } => Task::Max { path },
            Command::Min { path } => Task::Min { path },
            Command::Summary { path } => Task::Summary { path },
            Command::Match { path, salary, strict } => Task::Match {
                path,
                salary: SalaryValue::Text(salary),
                policy: if strict { FilterPolicy::Strict } else { FilterPolicy::Skip },
            },
            Command::Validate { min, max, salary } => Task::Validate {
                min: SalaryValue::Text(min),
                max: SalaryValue::Text(max),
                salary: SalaryValue::Text(salary),
            },
        };

        Self { format: args.format, delimiter: args.delimiter.0, verbose: args.verbose, task }
    }
}
