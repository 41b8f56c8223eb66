//! The countdown timer component.
//!
//! Split into an engine (pure state machine), a scheduler abstraction (who
//! calls `tick()` and when), a display surface (where renders go), and the
//! run loop that wires the three together.

pub mod display;
pub mod engine;
pub mod run;
pub mod scheduler;

pub use display::{ConsoleDisplay, DisplayStyle, DisplaySurface, Frame, MemoryDisplay};
pub use engine::{CountdownEngine, CountdownState, FINISHED_MESSAGE};
pub use run::run_countdown;
pub use scheduler::{CancelHandle, ManualScheduler, Scheduler, TokioScheduler};
