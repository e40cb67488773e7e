// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod jobs;
pub mod persistence;

pub use jobs::CsvJobSource;
