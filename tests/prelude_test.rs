//! Integration tests for the prelude module.
//!
//! Verifies that `use signup_validator::prelude::*` brings in everything a
//! consumer needs for common validation scenarios.

use signup_validator::prelude::*;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_provides_field_policy_trait() {
    let config = ValidationConfig::default();
    assert!(NamePolicy.check("Alice", &config).is_valid());
    assert!(TagPolicy.check("alice_01", &config).is_valid());
}

#[test]
fn prelude_provides_constructor_functions() {
    let config = ValidationConfig::default();
    assert!(email_policy().check("user@example.com", &config).is_valid());
    assert!(
        !simple_tag_policy()
            .check("alice.dev", &config)
            .is_valid()
    );
}

#[test]
fn prelude_provides_free_functions() {
    let config = ValidationConfig::default();
    assert!(validate_password("s3cret!pw", &config).is_valid());
    assert!(!validate_email("user@", &config).is_valid());
}

// ============================================================================
// POLICY OBJECTS BEHIND THE TRAIT
// ============================================================================

#[test]
fn policies_work_as_trait_objects() {
    let config = ValidationConfig::default();
    let policies: Vec<(&dyn FieldPolicy, &str)> = vec![
        (&NamePolicy, "Alice"),
        (&StrictPasswordPolicy, "s3cret!pw"),
        (&SimplePasswordPolicy, "s3cret!pw"),
        (&TagPolicy, "alice_01"),
        (&SimpleTagPolicy, "alice_01"),
        (&EmailPolicy, "user@example.com"),
    ];
    for (policy, input) in policies {
        assert!(policy.check(input, &config).is_valid(), "input {input:?}");
    }
}

// ============================================================================
// RESULT BRIDGE
// ============================================================================

#[test]
fn into_result_bridges_to_question_mark() {
    fn register(tag: &str) -> Result<(), Rejection> {
        validate_tag(tag, &ValidationConfig::default()).into_result()?;
        Ok(())
    }

    assert!(register("alice_01").is_ok());
    let err = register("ab__cd").unwrap_err();
    assert_eq!(err.reason(), "Tag contains consecutive underscores");
}
