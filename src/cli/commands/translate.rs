use std::io::{self, Write};
use std::pin::pin;
use std::time::Duration;

use anyhow::Result;
use futures_util::StreamExt;

use crate::agent::AgentClient;
use crate::config::ConfigManager;
use crate::debug_log;
use crate::error::TranslateError;
use crate::input::InputReader;
use crate::translation::{ResolveOptions, SessionEvent, TranslationSession, resolve_plan};
use crate::ui::ProgressRenderer;

pub struct TranslateOptions {
    pub text: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: u64,
}

/// Runs one translation: validate input, resolve the plan, drive the
/// session event stream while animating progress, print the result.
///
/// Stdout receives either the full translation or nothing; everything
/// else goes to stderr.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = ConfigManager::new().load_or_default()?;
    debug_log!(
        "config: native_language={:?}, default_model={:?}",
        config.native_language,
        config.default_model
    );

    let raw = InputReader::read(options.text.as_deref())?;
    let text = raw.trim();
    if text.is_empty() {
        return Err(TranslateError::EmptyInput.into());
    }

    let resolve_options = ResolveOptions {
        to: options.to,
        from: options.from,
        model: options.model,
    };
    let plan = resolve_plan(&resolve_options, &config)?;
    debug_log!("plan: {plan:?}");

    let agent = AgentClient::new(
        plan.model_id.clone(),
        Duration::from_secs(options.timeout_secs),
    );
    let session = TranslationSession::new(agent);

    let mut renderer = ProgressRenderer::new();
    renderer.start();

    let mut events = pin!(session.start(&plan, text));
    let mut outcome: Option<Result<String, TranslateError>> = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                // The agent subprocess shares our process group and gets
                // the SIGINT too; clear the spinner line and leave.
                renderer.cancel();
                std::process::exit(130);
            }
            event = events.next() => {
                let Some(event) = event else { break };
                renderer.observe(&event);
                match event {
                    SessionEvent::Completed { text, .. } => {
                        outcome = Some(Ok(text));
                        break;
                    }
                    SessionEvent::Failed(err) => {
                        outcome = Some(Err(err));
                        break;
                    }
                    SessionEvent::PartialText(_) | SessionEvent::ToolUse(_) => {}
                }
            }
        }
    }

    match outcome {
        Some(Ok(translated)) => {
            println!("{translated}");
            io::stdout().flush()?;
            Ok(())
        }
        Some(Err(err)) => Err(err.into()),
        // Session streams always end with a terminal event; an empty
        // stream here is a contract violation.
        None => Err(TranslateError::AgentError(
            "session ended without a terminal event".to_string(),
        )
        .into()),
    }
}
