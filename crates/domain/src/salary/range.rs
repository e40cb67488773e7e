use job_insights_shared_kernel::{DomainError, DomainResult, Salary};
use serde::Serialize;

/// Inclusive salary interval `[min, max]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SalaryRange {
    min: Salary,
    max: Salary,
}

impl SalaryRange {
    pub fn try_new(min: Salary, max: Salary) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::InvalidSalaryRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub const fn min(&self) -> Salary {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> Salary {
        self.max
    }

    #[inline]
    pub fn contains(&self, value: Salary) -> bool {
        value >= self.min && value <= self.max
    }
}
