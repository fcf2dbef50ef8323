//! The translation session: one in-flight agent call exposed as a finite
//! event stream.
//!
//! Ordering contract: zero or more `PartialText`/`ToolUse` events in
//! arrival order, then exactly one `Completed` or `Failed`, then end of
//! stream. Nothing is ever emitted after the terminal event, and a
//! session is not restartable; construct a fresh one per call.

use futures_util::{Stream, StreamExt};

use crate::agent::{AgentClient, AgentMessage, ContentBlock, is_authentication_message};
use crate::error::TranslateError;

use super::prompt::build_prompt;
use super::resolver::ResolvedPlan;

/// Maximum length of streamed preview text, in characters.
const PREVIEW_LIMIT: usize = 50;

/// An observation from an in-flight translation call.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Best-effort preview of the text streamed so far. Truncated for
    /// display; carries no correctness guarantee.
    PartialText(String),
    /// The agent invoked a tool (e.g. a web lookup for terminology).
    ToolUse(String),
    /// Terminal: the final translation and the agent's own cost figure,
    /// passed through verbatim.
    Completed {
        text: String,
        cost_usd: Option<f64>,
    },
    /// Terminal: the call failed. Never retried.
    Failed(TranslateError),
}

impl SessionEvent {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Failed(_))
    }
}

/// Owns exactly one call to the translation agent.
pub struct TranslationSession {
    agent: AgentClient,
}

impl TranslationSession {
    pub const fn new(agent: AgentClient) -> Self {
        Self { agent }
    }

    /// Starts the call and returns its event stream. Consumes the
    /// session.
    pub fn start(
        self,
        plan: &ResolvedPlan,
        text: &str,
    ) -> impl Stream<Item = SessionEvent> + Send {
        let prompt = build_prompt(&plan.direction, text);
        events_from_agent(self.agent.query(prompt))
    }
}

/// Condenses text to a single-line preview that fits the spinner line.
pub fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if flat.chars().count() <= PREVIEW_LIMIT {
        flat
    } else {
        let truncated: String = flat.chars().take(PREVIEW_LIMIT - 3).collect();
        format!("{truncated}...")
    }
}

/// Maps raw agent messages onto the session event contract.
///
/// Factored out of [`TranslationSession::start`] so the ordering and
/// terminality guarantees can be tested without a subprocess.
fn events_from_agent(
    messages: impl Stream<Item = Result<AgentMessage, TranslateError>> + Send,
) -> impl Stream<Item = SessionEvent> + Send {
    async_stream::stream! {
        let mut messages = std::pin::pin!(messages);
        let mut accumulated = String::new();

        while let Some(item) = messages.next().await {
            match item {
                Err(e) => {
                    yield SessionEvent::Failed(e);
                    return;
                }
                Ok(AgentMessage::Assistant { message }) => {
                    for block in message.content {
                        match block {
                            ContentBlock::Text { text } => {
                                accumulated.push_str(&text);
                                yield SessionEvent::PartialText(preview(&accumulated));
                            }
                            ContentBlock::ToolUse { name } => {
                                yield SessionEvent::ToolUse(name);
                            }
                            ContentBlock::Other => {}
                        }
                    }
                }
                Ok(AgentMessage::Result {
                    subtype,
                    is_error,
                    result,
                    total_cost_usd,
                }) => {
                    yield terminal_event(
                        subtype,
                        is_error,
                        result,
                        total_cost_usd,
                        &accumulated,
                    );
                    return;
                }
                Ok(AgentMessage::Other) => {}
            }
        }

        yield SessionEvent::Failed(TranslateError::AgentError(
            "agent stream ended without a result".to_string(),
        ));
    }
}

fn terminal_event(
    subtype: Option<String>,
    is_error: bool,
    result: Option<String>,
    total_cost_usd: Option<f64>,
    accumulated: &str,
) -> SessionEvent {
    let result = result.filter(|r| !r.trim().is_empty());

    if is_error {
        let detail = result
            .or(subtype)
            .unwrap_or_else(|| "agent reported an error".to_string());

        let err = if is_authentication_message(&detail) {
            TranslateError::AuthenticationFailure(detail)
        } else {
            TranslateError::AgentError(detail)
        };
        return SessionEvent::Failed(err);
    }

    // The result event carries the final text; fall back to the text
    // streamed through assistant messages when it is missing.
    let text = result.map_or_else(
        || {
            let streamed = accumulated.trim();
            (!streamed.is_empty()).then(|| streamed.to_string())
        },
        |r| Some(r.trim().to_string()),
    );

    match text {
        Some(text) => SessionEvent::Completed {
            text,
            cost_usd: total_cost_usd,
        },
        None => SessionEvent::Failed(TranslateError::AgentError(
            "agent returned an empty result".to_string(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::agent::AssistantPayload;
    use futures::stream;

    fn assistant_text(text: &str) -> Result<AgentMessage, TranslateError> {
        Ok(AgentMessage::Assistant {
            message: AssistantPayload {
                content: vec![ContentBlock::Text {
                    text: text.to_string(),
                }],
            },
        })
    }

    fn assistant_tool(name: &str) -> Result<AgentMessage, TranslateError> {
        Ok(AgentMessage::Assistant {
            message: AssistantPayload {
                content: vec![ContentBlock::ToolUse {
                    name: name.to_string(),
                }],
            },
        })
    }

    fn success_result(text: &str, cost: f64) -> Result<AgentMessage, TranslateError> {
        Ok(AgentMessage::Result {
            subtype: Some("success".to_string()),
            is_error: false,
            result: Some(text.to_string()),
            total_cost_usd: Some(cost),
        })
    }

    async fn collect(
        messages: Vec<Result<AgentMessage, TranslateError>>,
    ) -> Vec<SessionEvent> {
        events_from_agent(stream::iter(messages)).collect().await
    }

    fn assert_single_terminal_last(events: &[SessionEvent]) {
        let terminals = events.iter().filter(|e| e.is_terminal()).count();
        assert_eq!(terminals, 1);
        assert!(events.last().unwrap().is_terminal());
    }

    #[tokio::test]
    async fn test_events_in_order_with_terminal_last() {
        let events = collect(vec![
            Ok(AgentMessage::Other),
            assistant_text("こん"),
            assistant_tool("WebSearch"),
            assistant_text("にちは"),
            success_result("こんにちは、世界！", 0.000_123),
        ])
        .await;

        assert_single_terminal_last(&events);
        assert!(matches!(&events[0], SessionEvent::PartialText(p) if p == "こん"));
        assert!(matches!(&events[1], SessionEvent::ToolUse(n) if n == "WebSearch"));
        assert!(matches!(&events[2], SessionEvent::PartialText(p) if p == "こんにちは"));
        assert!(matches!(
            &events[3],
            SessionEvent::Completed { text, cost_usd: Some(c) }
                if text == "こんにちは、世界！" && (*c - 0.000_123).abs() < f64::EPSILON
        ));
    }

    #[tokio::test]
    async fn test_no_events_after_terminal() {
        // Messages queued after the result must never surface.
        let events = collect(vec![
            success_result("done", 0.0),
            assistant_text("stray"),
            success_result("again", 0.0),
        ])
        .await;

        assert_eq!(events.len(), 1);
        assert_single_terminal_last(&events);
    }

    #[tokio::test]
    async fn test_transport_error_becomes_failed_terminal() {
        let events = collect(vec![
            assistant_text("partial"),
            Err(TranslateError::TransportFailure("broken pipe".to_string())),
        ])
        .await;

        assert_single_terminal_last(&events);
        assert!(matches!(
            events.last().unwrap(),
            SessionEvent::Failed(TranslateError::TransportFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_error_result_becomes_failed() {
        let events = collect(vec![Ok(AgentMessage::Result {
            subtype: Some("error_during_execution".to_string()),
            is_error: true,
            result: None,
            total_cost_usd: None,
        })])
        .await;

        assert_single_terminal_last(&events);
        assert!(matches!(
            events.last().unwrap(),
            SessionEvent::Failed(TranslateError::AgentError(m)) if m == "error_during_execution"
        ));
    }

    #[tokio::test]
    async fn test_auth_error_result_classified() {
        let events = collect(vec![Ok(AgentMessage::Result {
            subtype: Some("error_during_execution".to_string()),
            is_error: true,
            result: Some("Invalid API key · Please run /login".to_string()),
            total_cost_usd: None,
        })])
        .await;

        assert!(matches!(
            events.last().unwrap(),
            SessionEvent::Failed(TranslateError::AuthenticationFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_result_falls_back_to_streamed_text() {
        let events = collect(vec![
            assistant_text("Bonjour"),
            Ok(AgentMessage::Result {
                subtype: Some("success".to_string()),
                is_error: false,
                result: None,
                total_cost_usd: Some(0.001),
            }),
        ])
        .await;

        assert!(matches!(
            events.last().unwrap(),
            SessionEvent::Completed { text, .. } if text == "Bonjour"
        ));
    }

    #[tokio::test]
    async fn test_empty_result_and_no_streamed_text_fails() {
        let events = collect(vec![Ok(AgentMessage::Result {
            subtype: Some("success".to_string()),
            is_error: false,
            result: Some("   ".to_string()),
            total_cost_usd: None,
        })])
        .await;

        assert!(matches!(
            events.last().unwrap(),
            SessionEvent::Failed(TranslateError::AgentError(m)) if m.contains("empty")
        ));
    }

    #[tokio::test]
    async fn test_stream_end_without_result_fails() {
        let events = collect(vec![assistant_text("partial only")]).await;

        assert_single_terminal_last(&events);
        assert!(matches!(
            events.last().unwrap(),
            SessionEvent::Failed(TranslateError::AgentError(m)) if m.contains("without a result")
        ));
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("Hello"), "Hello");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("Hello\n  world\t!"), "Hello world !");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "x".repeat(200);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_LIMIT);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_preview_truncates_on_char_boundaries() {
        let long = "あ".repeat(200);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_LIMIT);
    }
}
