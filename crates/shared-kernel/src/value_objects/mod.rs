// crates/shared-kernel/src/value_objects/mod.rs
pub mod job_record;
pub mod salary;

pub use job_record::{JobRecord, SalaryField};
pub use salary::{Salary, SalaryValue};
