//! Display surfaces -- the output target the countdown renders into.

use serde::{Deserialize, Serialize};

/// Visual state attached to a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    Normal,
    /// Applied while `0 < remaining <= warning_threshold`.
    Warning,
    /// Applied to the terminal message only.
    Finished,
}

impl DisplayStyle {
    /// Hex color the page uses for this style.
    pub fn color(self) -> &'static str {
        match self {
            DisplayStyle::Normal => "#1a202c",
            DisplayStyle::Warning => "#e53e3e",
            DisplayStyle::Finished => "#38a169",
        }
    }
}

/// External output target accepting a text value and a style attribute.
pub trait DisplaySurface {
    fn render(&mut self, text: &str, style: DisplayStyle);
}

/// ANSI-colored stdout renderer used by the CLI.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn render(&mut self, text: &str, style: DisplayStyle) {
        match style {
            DisplayStyle::Normal => println!("{text}"),
            DisplayStyle::Warning => println!("\x1b[31m{text}\x1b[0m"),
            DisplayStyle::Finished => println!("\x1b[32m{text}\x1b[0m"),
        }
    }
}

/// One recorded render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub text: String,
    pub style: DisplayStyle,
}

/// Frame-recording surface for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    frames: Vec<Frame>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl DisplaySurface for MemoryDisplay {
    fn render(&mut self, text: &str, style: DisplayStyle) {
        self.frames.push(Frame {
            text: text.to_string(),
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_display_records_frames_in_order() {
        let mut display = MemoryDisplay::new();
        display.render("10", DisplayStyle::Normal);
        display.render("3", DisplayStyle::Warning);
        assert_eq!(display.frames().len(), 2);
        assert_eq!(display.last().unwrap().text, "3");
        assert_eq!(display.last().unwrap().style, DisplayStyle::Warning);
    }

    #[test]
    fn style_colors_match_page_palette() {
        assert_eq!(DisplayStyle::Warning.color(), "#e53e3e");
        assert_eq!(DisplayStyle::Finished.color(), "#38a169");
    }
}
