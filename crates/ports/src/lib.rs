//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`jobs`]: loading job listings from a source locator
//!
//! These ports allow the domain and application layers to remain
//! independent of where job records come from.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod jobs;

pub use jobs::JobSource;
