mod filter;
mod matching;
mod range;
mod validation;

pub use filter::{FilterPolicy, filter_by_salary_range, filter_by_salary_range_with};
pub use matching::{matches_salary_range, record_range};
pub use range::SalaryRange;
pub use validation::{validate_salaries, validated_range};
