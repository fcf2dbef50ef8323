//! Typed error kinds for a translation run.
//!
//! Validation errors (`EmptyInput`, `ConfigurationMissing`, `UnknownModel`)
//! are raised before the agent subprocess is spawned; the remaining kinds
//! originate from the in-flight call and surface through the session's
//! terminal `Failed` event. None of them are retried.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum TranslateError {
    #[error("empty input text")]
    EmptyInput,

    #[error(
        "no native language configured and no --to target given\n\n\
         Set one via:\n  \
         cctr --set-native-lang <lang>   (e.g. ja)\n  \
         cctr --to <lang> <text>"
    )]
    ConfigurationMissing,

    #[error(
        "unknown model '{0}'\n\n\
         Valid aliases: haiku, sonnet, opus\n\
         Full model identifiers (claude-...) are also accepted."
    )]
    UnknownModel(String),

    #[error("authentication failure: {0}")]
    AuthenticationFailure(String),

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("translation agent error: {0}")]
    AgentError(String),

    #[error("translation timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl TranslateError {
    /// Maps the error kind to a sysexits-style process exit code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyInput => exitcode::DATAERR,
            Self::UnknownModel(_) => exitcode::USAGE,
            Self::ConfigurationMissing => exitcode::CONFIG,
            Self::AuthenticationFailure(_) => exitcode::NOPERM,
            Self::TransportFailure(_) => exitcode::UNAVAILABLE,
            Self::Timeout(_) => exitcode::TEMPFAIL,
            Self::AgentError(_) => exitcode::SOFTWARE,
        }
    }
}
