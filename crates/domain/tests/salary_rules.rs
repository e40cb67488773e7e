// crates/domain/tests/salary_rules.rs
use job_insights_domain::{SalaryAggregator, matches_salary_range, validate_salaries};
use job_insights_shared_kernel::{DomainError, JobRecord, Salary, SalaryValue};

fn value(v: impl Into<SalaryValue>) -> SalaryValue {
    v.into()
}

#[test]
fn validate_examples() {
    assert!(validate_salaries(&value(5), &value(10), &value(7)).is_ok());

    let err = validate_salaries(&value(10), &value(5), &value(7)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidSalaryRange { .. }));

    let err = validate_salaries(&value("abc"), &value(10), &value(7)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidSalaryType { .. }));
}

#[test]
fn dynamic_values_are_type_checked() {
    let min = serde_json::json!(5);
    let max = serde_json::json!("10");
    let salary = serde_json::json!(7.0);

    assert!(SalaryValue::try_from(&min).is_ok());
    assert!(SalaryValue::try_from(&max).is_ok());
    let err = SalaryValue::try_from(&salary).unwrap_err();
    assert!(matches!(err, DomainError::InvalidSalaryType { .. }));
}

#[test]
fn match_examples() {
    let job = JobRecord::from([("min_salary", "50000"), ("max_salary", "90000")]);
    assert!(matches_salary_range(&job, &value(90_000)).unwrap());
    assert!(!matches_salary_range(&job, &value(49_999)).unwrap());

    let partial = JobRecord::from([("min_salary", "50000")]);
    let err = matches_salary_range(&partial, &value(60_000)).unwrap_err();
    assert!(matches!(err, DomainError::MissingSalaryField { .. }));
}

#[test]
fn aggregation_over_listing() {
    let jobs: Vec<JobRecord> = [("1000", "2000"), ("abc", "3000"), ("500", "invalid"), ("-5", "")]
        .into_iter()
        .map(|(min, max)| JobRecord::from([("min_salary", min), ("max_salary", max)]))
        .collect();

    assert_eq!(SalaryAggregator::max_salary(&jobs).unwrap(), Salary::new(3000));
    assert_eq!(SalaryAggregator::min_salary(&jobs).unwrap(), Salary::new(500));
}
