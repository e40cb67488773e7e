// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::{Salary, SalaryField};

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum JobInsightsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<JobInsightsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl JobInsightsError {
    /// Walks through `Context` wrappers and returns the domain error underneath, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Context { source, .. } => source.as_domain(),
            Self::Domain(err) => Some(err),
            Self::Application(ApplicationError::ReadFailed { source, .. }) => source.as_domain(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, JobInsightsError>;

/// Salary rule violations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Cannot aggregate `{field}`: no job has a numeric value")]
    EmptyAggregation { field: SalaryField },

    #[error("Job salaries do not exist: missing {}", join_fields(.fields))]
    MissingSalaryField { fields: Vec<SalaryField> },

    #[error("Job salaries must be valid integers: {value:?}")]
    InvalidSalaryType { value: String },

    #[error("Min salary can't be greater than max salary: {min} > {max}")]
    InvalidSalaryRange { min: Salary, max: Salary },

    #[error("Job #{index} has an invalid salary range: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<DomainError>,
    },
}

fn join_fields(fields: &[SalaryField]) -> String {
    fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to read jobs from '{locator}': {source}")]
    ReadFailed {
        locator: String,
        #[source]
        source: Box<JobInsightsError>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in '{path}': {details}")]
    Csv { path: PathBuf, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<JobInsightsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| JobInsightsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| JobInsightsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
