//! Resolver contract tests.
//!
//! Verify the priority order (CLI arguments over config file over
//! built-in defaults) and the validation guarantees of plan resolution.

use cctr::config::Config;
use cctr::error::TranslateError;
use cctr::translation::{Direction, ResolveOptions, resolve_plan};

fn config_with_defaults() -> Config {
    Config {
        native_language: Some("ja".to_string()),
        default_model: Some("sonnet".to_string()),
    }
}

#[test]
fn test_cli_model_overrides_config_model() {
    let options = ResolveOptions {
        model: Some("opus".to_string()),
        ..Default::default()
    };

    let plan = resolve_plan(&options, &config_with_defaults()).unwrap();

    assert_eq!(plan.model_id, "claude-opus-4-20250514");
}

#[test]
fn test_config_model_used_when_cli_not_specified() {
    let plan = resolve_plan(&ResolveOptions::default(), &config_with_defaults()).unwrap();

    assert_eq!(plan.model_id, "claude-3-5-sonnet-20241022");
}

#[test]
fn test_builtin_default_model_as_last_resort() {
    let config = Config {
        native_language: Some("ja".to_string()),
        default_model: None,
    };

    let plan = resolve_plan(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(plan.model_id, "claude-3-5-haiku-20241022");
}

#[test]
fn test_explicit_target_ignores_native_language() {
    let options = ResolveOptions {
        to: Some("ko".to_string()),
        ..Default::default()
    };

    let plan = resolve_plan(&options, &config_with_defaults()).unwrap();

    assert_eq!(
        plan.direction,
        Direction::Explicit {
            source: None,
            target: "ko".to_string(),
        }
    );
}

#[test]
fn test_auto_direction_carries_native_language() {
    let plan = resolve_plan(&ResolveOptions::default(), &config_with_defaults()).unwrap();

    assert_eq!(
        plan.direction,
        Direction::Auto {
            native_language: "ja".to_string(),
        }
    );
}

#[test]
fn test_missing_native_language_without_target_is_an_error() {
    let result = resolve_plan(&ResolveOptions::default(), &Config::default());

    assert!(matches!(result, Err(TranslateError::ConfigurationMissing)));
}

#[test]
fn test_unknown_model_is_rejected_regardless_of_source() {
    let from_cli = ResolveOptions {
        model: Some("turbo".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        resolve_plan(&from_cli, &config_with_defaults()),
        Err(TranslateError::UnknownModel(m)) if m == "turbo"
    ));

    let from_config = Config {
        native_language: Some("ja".to_string()),
        default_model: Some("gpt-4o".to_string()),
    };
    assert!(matches!(
        resolve_plan(&ResolveOptions::default(), &from_config),
        Err(TranslateError::UnknownModel(m)) if m == "gpt-4o"
    ));
}

#[test]
fn test_resolution_is_deterministic() {
    let options = ResolveOptions {
        to: Some("de".to_string()),
        from: Some("en".to_string()),
        model: Some("haiku".to_string()),
    };
    let config = config_with_defaults();

    assert_eq!(
        resolve_plan(&options, &config).unwrap(),
        resolve_plan(&options, &config).unwrap()
    );
}
