//! Run loop: wires an engine, a scheduler, and a display surface.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::display::{DisplayStyle, DisplaySurface};
use super::engine::CountdownEngine;
use super::scheduler::{CancelHandle, Scheduler};
use crate::events::Event;

/// Start `engine` and drive it to completion on `scheduler`.
///
/// The initial value is rendered immediately; each tick renders the
/// decremented value in its style. The tick that reaches zero renders the
/// value and the terminal message, then releases the registration -- the
/// handle is never fired again.
///
/// The returned [`CancelHandle`] allows an external caller to stop the
/// countdown early; normal completion needs no call on it.
pub fn run_countdown(
    mut engine: CountdownEngine,
    scheduler: &impl Scheduler,
    display: Arc<Mutex<dyn DisplaySurface + Send>>,
    interval: Duration,
) -> CancelHandle {
    if let Some(Event::CountdownStarted { remaining, .. }) = engine.start() {
        display
            .lock()
            .unwrap()
            .render(&remaining.to_string(), engine.style());
    }
    scheduler.schedule_repeating(
        interval,
        Box::new(move || match engine.tick() {
            Some(Event::CountdownTick {
                remaining, style, ..
            }) => {
                display
                    .lock()
                    .unwrap()
                    .render(&remaining.to_string(), style);
                ControlFlow::Continue(())
            }
            Some(Event::CountdownFinished { message, .. }) => {
                let mut surface = display.lock().unwrap();
                surface.render("0", DisplayStyle::Normal);
                surface.render(&message, DisplayStyle::Finished);
                ControlFlow::Break(())
            }
            // Engine already terminal (or not started): nothing to drive.
            _ => ControlFlow::Break(()),
        }),
    )
}
