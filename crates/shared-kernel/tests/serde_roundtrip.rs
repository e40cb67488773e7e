// crates/shared-kernel/tests/serde_roundtrip.rs
use job_insights_shared_kernel::{JobRecord, Salary, SalaryField, SalaryValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Report {
    field: SalaryField,
    value: Salary,
}

#[test]
fn report_serializes_with_column_names() {
    let report = Report { field: SalaryField::Max, value: Salary::new(90_000) };
    let json = serde_json::to_string(&report).expect("serializes");
    assert_eq!(json, r#"{"field":"max_salary","value":90000}"#);
    let decoded: Report = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, report);
}

#[test]
fn job_record_is_a_plain_object() {
    let job = JobRecord::from([("min_salary", "50000"), ("max_salary", "90000")]);
    let json = serde_json::to_value(&job).expect("serializes");
    assert_eq!(json, serde_json::json!({"min_salary": "50000", "max_salary": "90000"}));
}

#[test]
fn salary_value_accepts_integers_and_strings_only() {
    let int = SalaryValue::try_from(&serde_json::json!(5)).expect("integer");
    assert_eq!(int, SalaryValue::Integer(5));

    let text = SalaryValue::try_from(&serde_json::json!("10")).expect("string");
    assert_eq!(text, SalaryValue::Text("10".into()));

    for rejected in [serde_json::json!(1.5), serde_json::json!(true), serde_json::Value::Null] {
        assert!(SalaryValue::try_from(&rejected).is_err(), "{rejected} should be rejected");
    }
}
