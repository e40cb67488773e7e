use std::{io::Read, path::Path};

use job_insights_ports::JobSource;
use job_insights_shared_kernel::{InfraResult, InfrastructureError, JobRecord, Result};
use log::{debug, trace};

use crate::persistence::FileReader;

/// Reads job listings from CSV files with a header row.
///
/// Every cell is kept as a string keyed by its column header. Rows shorter
/// than the header simply lack the trailing fields.
#[derive(Debug, Clone, Copy)]
pub struct CsvJobSource {
    delimiter: u8,
}

impl Default for CsvJobSource {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn read_path(&self, path: &Path) -> InfraResult<Vec<JobRecord>> {
        let file = FileReader::open_buffered(path)?;
        let jobs = self.read_from(file, path)?;
        debug!("read {} job rows from {}", jobs.len(), path.display());
        Ok(jobs)
    }

    /// Parses CSV from any reader; `origin` only labels errors.
    pub fn read_from<R: Read>(&self, reader: R, origin: &Path) -> InfraResult<Vec<JobRecord>> {
        let csv_error = |err: csv::Error| InfrastructureError::Csv {
            path: origin.to_path_buf(),
            details: err.to_string(),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);
        let headers = rdr.headers().map_err(csv_error)?.clone();
        trace!("csv headers: {headers:?}");

        rdr.records()
            .map(|row| -> InfraResult<JobRecord> {
                let row = row.map_err(csv_error)?;
                Ok(headers.iter().zip(row.iter()).collect())
            })
            .collect()
    }
}

impl JobSource for CsvJobSource {
    fn read(&self, locator: &str) -> Result<Vec<JobRecord>> {
        Ok(self.read_path(Path::new(locator))?)
    }
}
