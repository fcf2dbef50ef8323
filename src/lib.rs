//! # cctr - Claude-powered CLI translation
//!
//! `cctr` is a command-line tool that translates text by delegating both
//! language detection and translation to the Claude Code CLI (`claude`),
//! spawned as a subprocess in streaming-JSON mode.
//!
//! ## Features
//!
//! - **Auto direction**: detects the source language and translates to your
//!   native language, or to English when the text already is in it
//! - **Live progress**: a spinner with streamed preview text while the
//!   agent works
//! - **Pipe friendly**: only the translation goes to stdout; all status
//!   output goes to stderr
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate from stdin (auto direction)
//! echo "Hello, world!" | cctr
//!
//! # Translate a command-line argument
//! cctr "こんにちは、世界！"
//!
//! # Explicit target language and model
//! cctr --to ja --model sonnet "Hello, world!"
//!
//! # Configure the native language
//! cctr --set-native-lang ja
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/cctr/config.yaml`:
//!
//! ```yaml
//! native_language: ja
//! default_model: haiku
//! ```

/// Claude CLI subprocess client and stream-JSON event parsing.
pub mod agent;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Typed error kinds and exit-code mapping.
pub mod error;

/// Input reading from the positional argument or stdin.
pub mod input;

/// Global output configuration (quiet/debug modes, stderr routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation planning, prompts, and the session event stream.
pub mod translation;

/// Terminal UI components (spinner, progress renderer, colors).
pub mod ui;
