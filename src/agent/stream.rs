//! Parser for the Claude CLI's stream-JSON output (one event per line).

use serde::Deserialize;

/// One event from the agent's stream-JSON output.
///
/// Unknown event types (`system`, `user`, future additions) collapse into
/// [`AgentMessage::Other`] so new CLI versions do not break the stream.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentMessage {
    Assistant {
        message: AssistantPayload,
    },
    Result {
        #[serde(default)]
        subtype: Option<String>,
        #[serde(default)]
        is_error: bool,
        #[serde(default)]
        result: Option<String>,
        #[serde(default)]
        total_cost_usd: Option<f64>,
    },
    #[serde(other)]
    Other,
}

/// The message body of an assistant event.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantPayload {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// A content block inside an assistant message.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    ToolUse { name: String },
    #[serde(other)]
    Other,
}

/// Parses a single stream-JSON line into an [`AgentMessage`].
///
/// Returns `None` for blank lines and lines that are not valid event
/// JSON; the CLI occasionally interleaves diagnostics on stdout and the
/// stream must survive them.
pub fn parse_stream_line(line: &str) -> Option<AgentMessage> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    serde_json::from_str::<AgentMessage>(line).ok()
}
