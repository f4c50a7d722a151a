//! End-to-end scenarios for configured and unconfigured factories.
//!
//! Configurations here are written as JSON objects, the shape they usually
//! arrive in: string keys that have to be coerced to numeric codes.

use error_factory::{
    Arg, CustomError, DEFAULT_CODE, DEFAULT_MESSAGE, ErrorFactory, TemplateConfig, create_error,
};
use serde_json::{Value, json};

fn config_from_json(value: Value) -> TemplateConfig {
    let Value::Object(entries) = value else {
        panic!("configuration must be a JSON object");
    };
    entries
        .into_iter()
        .filter_map(|(key, template)| template.as_str().map(|t| (key, t.to_owned())))
        .collect()
}

// ============================================================================
// UNCONFIGURED
// ============================================================================

#[test]
fn default_code_is_returned_without_configuration() {
    let factory = ErrorFactory::default();

    let err = factory.create(100, &[Arg::from("blah")]);
    assert_eq!(err.code(), DEFAULT_CODE);
    assert_eq!(err.message(), "blah");
}

#[test]
fn empty_json_configuration_knows_nothing() {
    let factory = ErrorFactory::new(config_from_json(json!({})));
    assert!(factory.templates().is_empty());

    let err = create_error!(factory, 100);
    assert_eq!(err.code(), DEFAULT_CODE);
    assert_eq!(err.message(), "100");
}

// ============================================================================
// CONFIGURED
// ============================================================================

#[test]
fn raw_message_with_configured_factory() {
    let make_error = ErrorFactory::using(config_from_json(json!({ "100": "test ${0}" })));

    let err = create_error!(make_error, "a custom error message");
    assert_eq!(err.code(), DEFAULT_CODE);
    assert_eq!(err.message(), "a custom error message");
}

#[test]
fn replaces_placeholder() {
    let make_error = ErrorFactory::using(config_from_json(json!({ "100": "test {0}" })));

    let err = create_error!(make_error, 100, "a custom error message");
    assert_eq!(err.code(), 100);
    assert_eq!(err.message(), "test a custom error message");
}

#[test]
fn dollar_before_placeholder_is_kept() {
    let make_error = ErrorFactory::using(config_from_json(json!({ "100": "test ${0}" })));

    let err = create_error!(make_error, 100, "x");
    assert_eq!(err.message(), "test $x");
}

#[test]
fn replaces_multiple_placeholders() {
    let make_error = ErrorFactory::using(config_from_json(json!({
        "100": "hi {0}, here is your custom message: {1}"
    })));

    let err = create_error!(make_error, 100, "simon", "you rock!");
    assert_eq!(err.code(), 100);
    assert_eq!(err.message(), "hi simon, here is your custom message: you rock!");
}

#[test]
fn handles_empty_placeholders() {
    let make_error = ErrorFactory::using(config_from_json(json!({
        "100": "hi {0}, here is your {1} message: {2}"
    })));

    let err = create_error!(make_error, 100, "simon", Arg::MISSING, "you rock!");
    assert_eq!(err.code(), 100);
    assert_eq!(err.message(), "hi simon, here is your message: you rock!");
}

#[test]
fn formatted_values_work() {
    let make_error = ErrorFactory::using(config_from_json(json!({ "100": "hi {0}" })));
    let name = "simon";

    let err = create_error!(make_error, 100, format!("{name}"));
    assert_eq!(err.code(), 100);
    assert_eq!(err.message(), "hi simon");
}

#[test]
fn code_with_no_values() {
    let make_error = ErrorFactory::using(config_from_json(json!({ "100": "hi {0}" })));

    let err = create_error!(make_error, 100);
    assert_eq!(err.code(), 100);
    assert_eq!(err.message(), "hi ");
}

#[test]
fn constructor_matches_bound_form() {
    let config = config_from_json(json!({ "100": "hi {0}" }));
    let factory = ErrorFactory::new(config.clone());
    let make_error = ErrorFactory::using(config);

    let direct = factory.create(100, &[Arg::from("simon")]);
    let bound = create_error!(make_error, 100, "simon");

    assert_eq!(direct, bound);
    assert_eq!(direct.message(), "hi simon");
}

#[test]
fn created_error_propagates_as_err() {
    let make_error = ErrorFactory::using([(100, "hi {0}")]);

    let attempt = || -> error_factory::Result<()> {
        let outcome: Result<(), CustomError> = Err(create_error!(make_error, 100, "simon"));
        outcome?;
        Ok(())
    };

    let err = attempt().unwrap_err();
    assert_eq!(err.code(), 100);
    assert_eq!(err.to_string(), "hi simon");
}

#[test]
fn boxes_into_dyn_error() {
    let make_error = ErrorFactory::using([(100, "hi {0}")]);

    let attempt = || -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let outcome: Result<(), CustomError> = Err(create_error!(make_error, 100, "simon"));
        outcome?;
        Ok(())
    };

    let err = attempt().unwrap_err();
    let custom = err.downcast_ref::<CustomError>().unwrap();
    assert_eq!(custom.code(), 100);
}

#[test]
fn bound_factories_are_independent() {
    let goodbye = ErrorFactory::using(config_from_json(json!({ "100": "goodbye {0}" })));
    let err = create_error!(goodbye, 100, "simon");

    assert_eq!(err.code(), 100);
    assert_eq!(err.message(), "goodbye simon");

    let hello = ErrorFactory::using(config_from_json(json!({ "100": "hi {0}" })));
    let other = create_error!(hello, 100, "simon");

    assert_ne!(err.message(), other.message());
}

#[test]
fn non_numeric_json_keys_are_ignored() {
    let factory = ErrorFactory::new(config_from_json(json!({
        "name": "not a code {0}",
        "7": "seven {0}"
    })));

    assert_eq!(factory.templates().codes().collect::<Vec<_>>(), vec![7]);

    let err = create_error!(factory, "name", "value");
    assert_eq!(err.code(), DEFAULT_CODE);
    assert_eq!(err.message(), "value");
}

#[test]
fn strict_loading_reports_bad_keys() {
    let Value::Object(entries) = json!({ "1": "ok", "oops": "bad" }) else {
        unreachable!()
    };
    let result = TemplateConfig::try_from_entries(
        entries
            .into_iter()
            .map(|(key, value)| (key, value.as_str().unwrap_or_default().to_owned())),
    );

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("oops"));
}

#[test]
fn missing_first_value_falls_back_to_default_message() {
    let factory = ErrorFactory::new([(1, "one")]);

    let err = create_error!(factory, 2, Arg::MISSING, "second");
    assert_eq!(err.code(), DEFAULT_CODE);
    assert_eq!(err.message(), DEFAULT_MESSAGE);
}
