//! Countdown engine implementation.
//!
//! The engine is a tick-driven state machine. It does not own a thread or a
//! clock -- a scheduler is responsible for calling `tick()` once per
//! interval.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Finished
//! ```
//!
//! `Finished` is terminal; no command transitions out of it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::new(CountdownConfig::default());
//! engine.start(); // Some(Event::CountdownStarted { remaining: 10, .. })
//! engine.tick();  // Some(Event::CountdownTick { remaining: 9, .. })
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::display::DisplayStyle;
use crate::config::CountdownConfig;
use crate::events::Event;

/// Terminal message rendered exactly once when the counter reaches zero.
pub const FINISHED_MESSAGE: &str = "Time's up! \u{1f389}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Idle,
    Running,
    Finished,
}

/// Core countdown state machine.
///
/// Owns a single integer counter. Constructed per invocation; the caller
/// (or a [`Scheduler`](super::Scheduler)) drives it by calling `tick()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownEngine {
    state: CountdownState,
    remaining: u32,
    start_value: u32,
    warning_threshold: u32,
}

impl CountdownEngine {
    pub fn new(config: CountdownConfig) -> Self {
        Self {
            state: CountdownState::Idle,
            remaining: config.start,
            start_value: config.start,
            warning_threshold: config.warning_threshold,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Style the current value renders in.
    ///
    /// `Warning` applies iff the countdown is running and
    /// `0 < remaining <= warning_threshold`.
    pub fn style(&self) -> DisplayStyle {
        match self.state {
            CountdownState::Finished => DisplayStyle::Finished,
            _ if self.remaining > 0 && self.remaining <= self.warning_threshold => {
                DisplayStyle::Warning
            }
            _ => DisplayStyle::Normal,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the countdown. Returns the event carrying the value to render
    /// immediately, or `None` if the engine is not idle.
    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            CountdownState::Idle => {
                self.state = CountdownState::Running;
                Some(Event::CountdownStarted {
                    remaining: self.remaining,
                    at: Utc::now(),
                })
            }
            // Already running, or terminal.
            CountdownState::Running | CountdownState::Finished => None,
        }
    }

    /// One tick: decrement and report what to render.
    ///
    /// Returns `Event::CountdownFinished` on the tick that reaches zero and
    /// `None` on every call after that -- the terminal state is idempotent.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != CountdownState::Running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = CountdownState::Finished;
            return Some(Event::CountdownFinished {
                message: FINISHED_MESSAGE.to_string(),
                at: Utc::now(),
            });
        }
        Some(Event::CountdownTick {
            remaining: self.remaining,
            style: self.style(),
            at: Utc::now(),
        })
    }

    /// Back to idle with a full counter.
    pub fn reset(&mut self) -> Option<Event> {
        self.state = CountdownState::Idle;
        self.remaining = self.start_value;
        Some(Event::CountdownReset { at: Utc::now() })
    }
}
