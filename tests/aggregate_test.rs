//! Integration tests for the aggregate validator's fixed field order.

use pretty_assertions::assert_eq;
use signup_validator::prelude::*;

fn valid_record() -> UserInputRecord {
    UserInputRecord::new("Alice", "alice@example.com", "s3cret!pw", "alice_01")
}

#[test]
fn all_fields_valid() {
    let verdict = validate_user_input(&valid_record(), &ValidationConfig::default());
    assert!(verdict.is_valid());
    assert_eq!(verdict.reason(), "All fields valid");
}

#[test]
fn invalid_name_short_circuits_everything_else() {
    // Every other field is also invalid; only the name reason may surface.
    let record = UserInputRecord::new("", "nope", "x", "_");
    assert_eq!(
        validate_user_input(&record, &ValidationConfig::default()).reason(),
        "Name is empty"
    );
}

#[test]
fn field_order_is_name_email_password_tag() {
    let config = ValidationConfig::default();

    let mut record = valid_record();
    record.email = "nope".into();
    record.password = "x".into();
    record.tag = "_".into();
    assert_eq!(
        validate_user_input(&record, &config).reason(),
        "Email does not contain @"
    );

    let mut record = valid_record();
    record.password = "x".into();
    record.tag = "_".into();
    assert_eq!(
        validate_user_input(&record, &config).reason(),
        "Password is too short"
    );

    let mut record = valid_record();
    record.tag = "_x".into();
    assert_eq!(
        validate_user_input(&record, &config).reason(),
        "First character must be letter or number"
    );
}

#[test]
fn aggregate_uses_detailed_policies() {
    // Separators are legal under the rich tag policy, so the aggregate must
    // accept them even though the legacy simple policy would not.
    let mut record = valid_record();
    record.tag = "alice.dev-01".into();
    assert!(validate_user_input(&record, &ValidationConfig::default()).is_valid());
}

#[test]
fn failure_verdict_is_returned_verbatim() {
    let mut record = valid_record();
    record.email = "user@".into();
    let aggregate = validate_user_input(&record, &ValidationConfig::default());
    let direct = validate_email("user@", &ValidationConfig::default());
    assert_eq!(aggregate, direct);
}
