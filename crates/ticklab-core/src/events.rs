use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::DisplayStyle;

/// Every state change in the system produces an Event.
/// The CLI prints them as JSON; a front-end polls for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A countdown was started; `remaining` is the value rendered
    /// immediately, before the first tick.
    CountdownStarted {
        remaining: u32,
        at: DateTime<Utc>,
    },
    /// One tick elapsed and the decremented value was rendered.
    CountdownTick {
        remaining: u32,
        style: DisplayStyle,
        at: DateTime<Utc>,
    },
    /// The counter reached zero; the terminal message is rendered exactly
    /// once and the repeating schedule is released.
    CountdownFinished {
        message: String,
        at: DateTime<Utc>,
    },
    CountdownReset {
        at: DateTime<Utc>,
    },
    /// The page banner was given a new color from the palette.
    BannerRecolored {
        color: String,
        at: DateTime<Utc>,
    },
    VisibilityToggled {
        hidden: bool,
        at: DateTime<Utc>,
    },
    /// An item was appended to the dynamic list.
    ItemAdded {
        label: String,
        position: usize,
        at: DateTime<Utc>,
    },
    /// Every panel was restored to its initial state.
    PageReset {
        at: DateTime<Utc>,
    },
}
