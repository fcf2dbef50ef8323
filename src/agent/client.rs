use std::process::Stdio;
use std::time::Duration;

use futures_util::Stream;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, Command};

use crate::debug_log;
use crate::error::TranslateError;

use super::stream::{AgentMessage, parse_stream_line};

/// Environment variable overriding the agent binary, mainly for tests.
const AGENT_BIN_ENV: &str = "CCTR_CLAUDE_BIN";

const DEFAULT_AGENT_BIN: &str = "claude";

/// Client for one call to the Claude CLI.
///
/// Authentication is handled by the CLI itself (subscription or API key);
/// no key material passes through here.
pub struct AgentClient {
    binary: String,
    model: String,
    timeout: Duration,
}

impl AgentClient {
    pub fn new(model: String, timeout: Duration) -> Self {
        let binary =
            std::env::var(AGENT_BIN_ENV).unwrap_or_else(|_| DEFAULT_AGENT_BIN.to_string());
        Self {
            binary,
            model,
            timeout,
        }
    }

    /// Issues the prompt and yields parsed stream-JSON events.
    ///
    /// The whole call is bounded by the configured timeout; on expiry the
    /// child is killed and the stream ends with
    /// [`TranslateError::Timeout`]. The child also carries
    /// `kill_on_drop`, so abandoning the stream (Ctrl-C) reaps it.
    pub fn query(
        self,
        prompt: String,
    ) -> impl Stream<Item = Result<AgentMessage, TranslateError>> + Send {
        async_stream::stream! {
            let deadline = tokio::time::Instant::now() + self.timeout;

            debug_log!("spawning {} (model: {})", self.binary, self.model);

            let mut child = match self.spawn(&prompt) {
                Ok(child) => child,
                Err(e) => {
                    yield Err(TranslateError::TransportFailure(format!(
                        "failed to start '{}': {e}",
                        self.binary
                    )));
                    return;
                }
            };

            let Some(stdout) = child.stdout.take() else {
                yield Err(TranslateError::TransportFailure(
                    "agent stdout was not captured".to_string(),
                ));
                return;
            };

            // Drain stderr concurrently so the child never blocks on a
            // full pipe; its contents are only read on failure.
            let stderr = child.stderr.take();
            let stderr_task = tokio::spawn(async move {
                let mut buffer = String::new();
                if let Some(mut stderr) = stderr {
                    let _ = stderr.read_to_string(&mut buffer).await;
                }
                buffer
            });

            let mut lines = BufReader::new(stdout).lines();

            loop {
                match tokio::time::timeout_at(deadline, lines.next_line()).await {
                    Err(_) => {
                        let _ = child.start_kill();
                        yield Err(TranslateError::Timeout(self.timeout));
                        return;
                    }
                    Ok(Err(e)) => {
                        yield Err(TranslateError::TransportFailure(format!(
                            "failed to read agent output: {e}"
                        )));
                        return;
                    }
                    Ok(Ok(None)) => break,
                    Ok(Ok(Some(line))) => {
                        debug_log!("agent event: {line}");
                        if let Some(message) = parse_stream_line(&line) {
                            yield Ok(message);
                        }
                    }
                }
            }

            match tokio::time::timeout_at(deadline, child.wait()).await {
                Err(_) => {
                    let _ = child.start_kill();
                    yield Err(TranslateError::Timeout(self.timeout));
                }
                Ok(Err(e)) => {
                    yield Err(TranslateError::TransportFailure(format!(
                        "failed to wait for agent: {e}"
                    )));
                }
                Ok(Ok(status)) if !status.success() => {
                    let stderr_text = stderr_task.await.unwrap_or_default();
                    debug_log!("agent exited with {status}: {stderr_text}");
                    yield Err(classify_failure(&stderr_text, status.code()));
                }
                Ok(Ok(_)) => {}
            }
        }
    }

    fn spawn(&self, prompt: &str) -> std::io::Result<Child> {
        Command::new(&self.binary)
            .arg("-p")
            .arg(prompt)
            .arg("--model")
            .arg(&self.model)
            .arg("--output-format")
            .arg("stream-json")
            .arg("--verbose")
            .arg("--permission-mode")
            .arg("bypassPermissions")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
    }
}

/// Classifies a nonzero agent exit by its stderr output.
pub(crate) fn classify_failure(stderr_text: &str, exit_code: Option<i32>) -> TranslateError {
    let detail = stderr_text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map_or_else(
            || format!("agent exited with code {}", exit_code.unwrap_or(-1)),
            |line| line.to_string(),
        );

    if is_authentication_message(stderr_text) {
        TranslateError::AuthenticationFailure(detail)
    } else {
        TranslateError::AgentError(detail)
    }
}

/// Heuristic match for authentication problems in agent error text.
pub(crate) fn is_authentication_message(text: &str) -> bool {
    let lower = text.to_lowercase();
    ["api key", "authentication", "unauthorized", "please run /login", "not logged in"]
        .iter()
        .any(|needle| lower.contains(*needle))
}
