mod language;
mod prompt;
mod resolver;
mod session;

pub use language::{LANGUAGE_NAMES, language_name};
pub use prompt::build_prompt;
pub use resolver::{
    DEFAULT_MODEL_ALIAS, Direction, MODEL_ALIASES, ResolveOptions, ResolvedPlan, resolve_plan,
};
pub use session::{SessionEvent, TranslationSession, preview};
