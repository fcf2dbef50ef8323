//! Claude CLI subprocess client.
//!
//! The translation agent is the `claude` binary run in one-shot mode with
//! `--output-format stream-json`, which emits one JSON event per line:
//! assistant messages with text and tool-use content blocks while the call
//! is in flight, then a single result event carrying the final text and
//! the cost accounting for the call.

mod client;
mod stream;

pub use client::AgentClient;
pub(crate) use client::is_authentication_message;
pub(crate) use stream::{AgentMessage, AssistantPayload, ContentBlock};
