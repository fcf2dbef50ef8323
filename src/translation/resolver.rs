//! Resolves CLI flags and configuration into a concrete translation plan.
//!
//! The resolver is pure: given the same options and config it always
//! produces the same plan, and it touches neither the filesystem nor the
//! agent. All validation that can happen before spawning the subprocess
//! happens here.

use crate::config::Config;
use crate::error::TranslateError;

/// Model aliases and the pinned identifiers they resolve to.
pub const MODEL_ALIASES: &[(&str, &str)] = &[
    ("haiku", "claude-3-5-haiku-20241022"),
    ("sonnet", "claude-3-5-sonnet-20241022"),
    ("opus", "claude-opus-4-20250514"),
];

/// Alias used when neither `--model` nor the config specify one.
pub const DEFAULT_MODEL_ALIAS: &str = "haiku";

/// How the target language for this call is determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Explicit `--to` target; source is `--from` or detected by the agent.
    Explicit {
        source: Option<String>,
        target: String,
    },
    /// No `--to`: the agent detects the source language and applies the
    /// rule "native language -> English, anything else -> native
    /// language". The conditional lives in the prompt, not here, because
    /// the CLI never sees the detected language.
    Auto { native_language: String },
}

/// The resolved plan driving one translation call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlan {
    pub direction: Direction,
    pub model_id: String,
}

/// CLI overrides feeding into plan resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language code override (`--to`).
    pub to: Option<String>,
    /// Source language code override (`--from`).
    pub from: Option<String>,
    /// Model alias or full identifier override (`--model`).
    pub model: Option<String>,
}

/// Resolves options and config into a [`ResolvedPlan`].
///
/// # Errors
///
/// Returns [`TranslateError::ConfigurationMissing`] when no `--to` is
/// given and no native language is known, and
/// [`TranslateError::UnknownModel`] for unrecognized model names.
pub fn resolve_plan(options: &ResolveOptions, config: &Config) -> Result<ResolvedPlan, TranslateError> {
    let direction = match &options.to {
        Some(target) => Direction::Explicit {
            source: options.from.clone(),
            target: target.clone(),
        },
        None => {
            let native_language = config
                .native_language
                .clone()
                .ok_or(TranslateError::ConfigurationMissing)?;
            Direction::Auto { native_language }
        }
    };

    let model_name = options
        .model
        .as_deref()
        .or(config.default_model.as_deref())
        .unwrap_or(DEFAULT_MODEL_ALIAS);

    Ok(ResolvedPlan {
        direction,
        model_id: resolve_model(model_name)?,
    })
}

/// Resolves a model alias to its pinned identifier.
///
/// Full identifiers (`claude-...`) pass through verbatim so users can
/// pin versions the alias table does not know about.
fn resolve_model(name: &str) -> Result<String, TranslateError> {
    if let Some((_, id)) = MODEL_ALIASES.iter().find(|(alias, _)| *alias == name) {
        return Ok((*id).to_string());
    }

    if name.starts_with("claude-") {
        return Ok(name.to_string());
    }

    Err(TranslateError::UnknownModel(name.to_string()))
}
