//! Progress renderer for an in-flight translation call.
//!
//! A small explicit state machine over the spinner:
//! `Idle -> Animating -> Stopped(Success) | Stopped(Failure)`.
//!
//! While animating, the spinner glyph advances on indicatif's steady tick
//! and the status text tracks the latest observed session event. In quiet
//! mode no spinner is created and the success line is suppressed; stdout
//! is never touched here.

use std::time::{Duration, Instant};

use crate::output;
use crate::translation::SessionEvent;
use crate::ui::{Spinner, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Animating,
    StoppedSuccess,
    StoppedFailure,
}

pub struct ProgressRenderer {
    state: RenderState,
    spinner: Option<Spinner>,
    started_at: Option<Instant>,
}

impl ProgressRenderer {
    pub const fn new() -> Self {
        Self {
            state: RenderState::Idle,
            spinner: None,
            started_at: None,
        }
    }

    pub const fn state(&self) -> RenderState {
        self.state
    }

    /// `Idle -> Animating`. Called when the session starts.
    pub fn start(&mut self) {
        if self.state != RenderState::Idle {
            return;
        }
        self.state = RenderState::Animating;
        self.started_at = Some(Instant::now());
        if !output::is_quiet() {
            self.spinner = Some(Spinner::new("Translating..."));
        }
    }

    /// Feeds one session event through the state machine.
    pub fn observe(&mut self, event: &SessionEvent) {
        if self.state != RenderState::Animating {
            return;
        }

        match event {
            SessionEvent::PartialText(preview) => {
                if let Some(spinner) = &self.spinner {
                    spinner.update(&format!("Translating: {preview}"));
                }
            }
            SessionEvent::ToolUse(name) => {
                if let Some(spinner) = &self.spinner {
                    spinner.update(&format!("Using tool: {name}"));
                }
            }
            SessionEvent::Completed { cost_usd, .. } => {
                self.finish_success(*cost_usd);
            }
            SessionEvent::Failed(_) => {
                self.finish_failure();
            }
        }
    }

    /// `Animating -> Stopped(Success)`: clears the spinner and prints the
    /// elapsed/cost summary line to stderr.
    fn finish_success(&mut self, cost_usd: Option<f64>) {
        self.clear_spinner();
        self.state = RenderState::StoppedSuccess;

        let elapsed = self.started_at.map_or(Duration::ZERO, |t| t.elapsed());
        let summary = match cost_usd.filter(|c| *c > 0.0) {
            Some(cost) => format!(
                "Translation complete ({:.1}s, ${cost:.6})",
                elapsed.as_secs_f64()
            ),
            None => format!("Translation complete ({:.1}s)", elapsed.as_secs_f64()),
        };
        crate::status!("{} {}", Style::success("✓"), summary);
    }

    /// `Animating -> Stopped(Failure)`: clears the spinner. The error
    /// line itself is printed once by the entry point.
    fn finish_failure(&mut self) {
        self.clear_spinner();
        self.state = RenderState::StoppedFailure;
    }

    /// Interrupt path: clears the line so the terminal is left clean.
    /// Must run before the process exits, since `process::exit` skips
    /// destructors.
    pub fn cancel(&mut self) {
        if self.state == RenderState::Animating {
            self.finish_failure();
        }
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop();
        }
    }
}

impl Default for ProgressRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// Dropping while animating (Ctrl-C path) clears the line via the
// spinner's own Drop impl; nothing extra to do here.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslateError;

    // Quiet mode is forced on for renderer tests so no spinner thread or
    // terminal output is involved; the state machine is what matters.
    fn quiet_renderer() -> ProgressRenderer {
        crate::output::init(crate::output::OutputConfig {
            quiet: true,
            debug: false,
        });
        ProgressRenderer::new()
    }

    #[test]
    fn test_initial_state_is_idle() {
        let renderer = quiet_renderer();
        assert_eq!(renderer.state(), RenderState::Idle);
    }

    #[test]
    fn test_start_transitions_to_animating() {
        let mut renderer = quiet_renderer();
        renderer.start();
        assert_eq!(renderer.state(), RenderState::Animating);
    }

    #[test]
    fn test_intermediate_events_keep_animating() {
        let mut renderer = quiet_renderer();
        renderer.start();

        renderer.observe(&SessionEvent::PartialText("preview".to_string()));
        renderer.observe(&SessionEvent::ToolUse("WebSearch".to_string()));

        assert_eq!(renderer.state(), RenderState::Animating);
    }

    #[test]
    fn test_completed_stops_with_success() {
        let mut renderer = quiet_renderer();
        renderer.start();

        renderer.observe(&SessionEvent::Completed {
            text: "done".to_string(),
            cost_usd: Some(0.01),
        });

        assert_eq!(renderer.state(), RenderState::StoppedSuccess);
    }

    #[test]
    fn test_failed_stops_with_failure() {
        let mut renderer = quiet_renderer();
        renderer.start();

        renderer.observe(&SessionEvent::Failed(TranslateError::EmptyInput));

        assert_eq!(renderer.state(), RenderState::StoppedFailure);
    }

    #[test]
    fn test_events_after_stop_are_ignored() {
        let mut renderer = quiet_renderer();
        renderer.start();
        renderer.observe(&SessionEvent::Failed(TranslateError::EmptyInput));

        renderer.observe(&SessionEvent::Completed {
            text: "late".to_string(),
            cost_usd: None,
        });

        assert_eq!(renderer.state(), RenderState::StoppedFailure);
    }

    #[test]
    fn test_events_before_start_are_ignored() {
        let mut renderer = quiet_renderer();
        renderer.observe(&SessionEvent::PartialText("early".to_string()));
        assert_eq!(renderer.state(), RenderState::Idle);
    }
}
