use serde_json::json;
use verdict::rules::{IsInteger, Max, MinLength, Required};
use verdict::{RuleRegistry, Validator};

fn user_validator() -> Validator {
    let mut validator = Validator::new();
    validator
        .attribute("user.name")
        .rule(Required)
        .rule(MinLength::new(3));
    validator
        .attribute("user.age")
        .rule(IsInteger)
        .rule(Max::new(120.0));
    validator
}

#[test]
fn valid_input_yields_empty_report() {
    let report = user_validator().validate(&json!({
        "user": { "name": "ada", "age": 36 }
    }));
    assert!(report.valid());
    assert!(!report.has_error());
}

#[test]
fn failures_land_at_the_right_paths() {
    let report = user_validator().validate(&json!({
        "user": { "name": "x", "age": 200.5 }
    }));

    assert!(!report.valid());
    assert_eq!(
        report.first_of("user.name"),
        Some("name must be at least 3 characters long.")
    );
    let age = report.try_attribute("user.age").unwrap();
    assert_eq!(age.rule("is_integer"), Some("age must be an integer."));
    assert_eq!(age.rule("max"), Some("age must be less than 120."));
}

#[test]
fn missing_attribute_validates_as_null() {
    let report = user_validator().validate(&json!({ "user": {} }));
    assert_eq!(
        report.first_of("user.name"),
        Some("name is required.")
    );
}

#[test]
fn passing_attributes_are_not_materialized() {
    let report = user_validator().validate(&json!({
        "user": { "name": "grace", "age": 200 }
    }));

    // Only the failing branch exists in the report.
    assert!(report.try_attribute("user.name").is_none());
    assert!(report.try_attribute("user.age").is_some());
    assert_eq!(report.try_attribute("user").unwrap().count(), 1);
}

#[test]
fn message_templates_can_be_overridden_per_rule() {
    let mut validator = Validator::new();
    validator
        .attribute("email")
        .rule(Required)
        .message("required", "We need your :attribute.");

    let report = validator.validate(&json!({}));
    assert_eq!(report.first_of("email"), Some("We need your email."));
}

#[test]
fn display_name_overrides_the_attribute_name() {
    let mut validator = Validator::new();
    validator
        .attribute("dob")
        .rule(Required)
        .display_name("date of birth");

    let report = validator.validate(&json!({}));
    assert_eq!(report.first_of("dob"), Some("date of birth is required."));
}

#[test]
fn root_rules_render_with_the_default_name() {
    let mut validator = Validator::new();
    validator.rule(IsInteger);

    let report = validator.validate(&json!("nope"));
    assert_eq!(report.rule("is_integer"), Some("value must be an integer."));
}

#[test]
fn registry_built_rules_plug_into_a_validator() {
    let registry = RuleRegistry::default();
    let mut validator = Validator::new();
    validator
        .attribute("code")
        .boxed_rule(registry.lookup("matches", &[json!("^[A-Z]{3}$")]).unwrap());

    assert!(validator.valid(&json!({ "code": "ABC" })));
    assert!(!validator.valid(&json!({ "code": "abc" })));
}

#[test]
fn check_returns_the_report_on_failure() {
    let validator = user_validator();

    assert!(verdict::check(&validator, &json!({ "user": { "name": "ada", "age": 1 } })).is_ok());

    let report = verdict::check(&validator, &json!({ "user": { "age": 1 } })).unwrap_err();
    assert_eq!(report.first_of("user.name"), Some("name is required."));
}

#[test]
fn reports_from_independent_validators_merge() {
    let mut name_rules = Validator::new();
    name_rules.attribute("name").rule(Required);

    let mut age_rules = Validator::new();
    age_rules.attribute("age").rule(IsInteger);

    let input = json!({ "name": null, "age": "old" });
    let mut combined = name_rules.validate(&input);
    combined.merge(&age_rules.validate(&input));

    assert_eq!(combined.count(), 2);
    assert_eq!(combined.first_of("name"), Some("name is required."));
    assert_eq!(combined.first_of("age"), Some("age must be an integer."));
}
