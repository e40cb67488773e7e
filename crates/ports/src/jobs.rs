// crates/ports/src/jobs.rs
use job_insights_shared_kernel::{JobRecord, Result};

/// Port for loading job listings.
///
/// `locator` is whatever the implementation understands (a file path for the
/// CSV adapter). Records come back in source order with string-valued fields.
pub trait JobSource: Send + Sync {
    fn read(&self, locator: &str) -> Result<Vec<JobRecord>>;
}
