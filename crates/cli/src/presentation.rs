// crates/cli/src/presentation.rs
use std::io::Write;

use job_insights_domain::{SalaryRange, SalarySummary};
use job_insights_shared_kernel::{JobRecord, Salary, SalaryField};
use job_insights_usecase::{SalaryMatches, SalaryStatistic};
use serde::Serialize;

use crate::{error::Result, options::OutputFormat};

pub fn print_statistic(out: &mut impl Write, stat: &SalaryStatistic, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(out, stat),
        OutputFormat::Table => {
            writeln!(out, "{:<12}{:>12}", stat.field, stat.value)?;
            Ok(())
        }
    }
}

pub fn print_summary(out: &mut impl Write, summary: &SalarySummary, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(out, summary);
    }
    let or_dash = |v: Option<Salary>| v.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
    writeln!(out, "{:<14}{:>12}", "jobs", summary.jobs)?;
    writeln!(out, "{:<14}{:>12}", "valid ranges", summary.valid_ranges)?;
    writeln!(out, "{:<14}{:>12}", "lowest min", or_dash(summary.lowest_min))?;
    writeln!(out, "{:<14}{:>12}", "highest max", or_dash(summary.highest_max))?;
    Ok(())
}

pub fn print_matches(out: &mut impl Write, matches: &SalaryMatches, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(out, matches);
    }

    writeln!(out, "  MIN_SALARY  MAX_SALARY     JOB")?;
    writeln!(out, "----------------------------------------------")?;
    for job in &matches.jobs {
        writeln!(
            out,
            "{:>12}{:>12}     {}",
            job.salary_text(SalaryField::Min).unwrap_or_default(),
            job.salary_text(SalaryField::Max).unwrap_or_default(),
            other_fields(job)
        )?;
    }
    writeln!(out, "----------------------------------------------")?;
    writeln!(out, "{} of {} jobs pay {}", matches.jobs.len(), matches.total, matches.salary)?;
    Ok(())
}

#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    range: SalaryRange,
    salary: Salary,
    in_range: bool,
}

pub fn print_validation(out: &mut impl Write, range: SalaryRange, salary: Salary, format: OutputFormat) -> Result<()> {
    let report = ValidationReport { valid: true, range, salary, in_range: range.contains(salary) };
    if format == OutputFormat::Json {
        return print_json(out, &report);
    }
    writeln!(out, "valid: min={} max={} salary={}", range.min(), range.max(), salary)?;
    writeln!(out, "in range: {}", if report.in_range { "yes" } else { "no" })?;
    Ok(())
}

fn other_fields(job: &JobRecord) -> String {
    job.iter()
        .filter(|(k, _)| !SalaryField::ALL.iter().any(|f| f.as_str() == *k))
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
