use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use job_insights_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = FileReader::open(Path::new("definitely/not/here.csv")).unwrap_err();
        match err {
            InfrastructureError::FileRead { path, source } => {
                assert_eq!(path, Path::new("definitely/not/here.csv"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
