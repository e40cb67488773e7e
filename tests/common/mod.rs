// tests/common/mod.rs
use std::{io::Write, path::PathBuf};

use tempfile::TempDir;

pub const HEADER: &str = "job_title,company,state,min_salary,max_salary,job_type";

/// A temporary directory holding CSV listings.
pub struct Listing {
    dir: TempDir,
}

impl Listing {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("temp dir") }
    }

    /// Write `rows` under the standard header and return the file path.
    pub fn write(&self, name: &str, rows: &[&str]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create csv");
        writeln!(file, "{HEADER}").expect("write header");
        for row in rows {
            writeln!(file, "{row}").expect("write row");
        }
        path
    }
}
