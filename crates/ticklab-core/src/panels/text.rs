//! String formatter panel.

/// Prompt shown when there is nothing to format.
pub const EMPTY_PROMPT: &str = "Please provide some text!";

/// Capitalize the first character, lowercase the rest, add excitement.
///
/// Empty input yields the prompt message instead.
pub fn format_string(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => EMPTY_PROMPT.to_string(),
        Some(first) => {
            let rest: String = chars.as_str().to_lowercase();
            format!("{}{}!!!", first.to_uppercase(), rest)
        }
    }
}
