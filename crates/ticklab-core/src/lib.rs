//! # Ticklab Core Library
//!
//! Core logic for the Ticklab interactive playground. The playground is a
//! small page of demo panels (age checker, price calculator, string
//! formatter, multiplication table, dynamic list) built around one stateful
//! component: a countdown timer. All operations are available via the
//! standalone CLI binary; any front-end is a thin rendering layer over this
//! library.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: a caller-driven state machine. It owns no thread
//!   and no clock; a [`Scheduler`] invokes `tick()` once per interval.
//! - **Scheduler**: `schedule_repeating(interval, action) -> CancelHandle`
//!   with a tokio-backed implementation for real runs and a manual one for
//!   deterministic tests.
//! - **Display surface**: the output target the countdown renders into,
//!   behind a trait so tests can record frames instead of printing them.
//! - **Panels / Page**: stateless demo operations plus the mutable page
//!   state they act on.
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: countdown state machine
//! - [`run_countdown`]: wires an engine, a scheduler, and a display surface
//! - [`PageState`]: the playground's mutable page
//! - [`Config`]: TOML configuration

pub mod config;
pub mod countdown;
pub mod error;
pub mod events;
pub mod page;
pub mod panels;

pub use config::{Config, CountdownConfig, PageConfig};
pub use countdown::{
    run_countdown, CancelHandle, ConsoleDisplay, CountdownEngine, CountdownState, DisplayStyle,
    DisplaySurface, ManualScheduler, MemoryDisplay, Scheduler, TokioScheduler,
};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use page::PageState;
pub use panels::{AgeGroup, AgeReport, MultiplicationTable, Receipt};
