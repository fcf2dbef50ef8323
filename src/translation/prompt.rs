//! Prompt construction for the translation agent.
//!
//! The no-`--to` case deliberately delegates both detection and the
//! target choice to the agent: the prompt states the rule and the agent
//! applies it, because the CLI never computes the detected language
//! itself. The exact wording is kept in template constants so it can be
//! tuned without touching the resolver contract.

use super::language::language_name;
use super::resolver::Direction;

pub const EXPLICIT_PROMPT_TEMPLATE: &str = "\
Translate the following text from {source_language} to {target_language}.
Output ONLY the translation, without any explanations, comments, or additional text.
Preserve the original formatting including blank lines and whitespace.

Text to translate:
{text}";

pub const AUTO_PROMPT_TEMPLATE: &str = "\
Detect the language of the following text.
If it is {native_language}, translate it to English; otherwise translate it to {native_language}.
Output ONLY the translation, without any explanations, comments, or additional text.
Preserve the original formatting including blank lines and whitespace.

Text to translate:
{text}";

/// Builds the agent prompt for one translation call.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(direction: &Direction, text: &str) -> String {
    // {placeholders} are replaced by string substitution, not format args
    match direction {
        Direction::Explicit { source, target } => {
            let source_name = source
                .as_deref()
                .map_or("the auto-detected source language", language_name);

            EXPLICIT_PROMPT_TEMPLATE
                .replace("{source_language}", source_name)
                .replace("{target_language}", language_name(target))
                .replace("{text}", text)
        }
        Direction::Auto { native_language } => AUTO_PROMPT_TEMPLATE
            .replace("{native_language}", language_name(native_language))
            .replace("{text}", text),
    }
}
