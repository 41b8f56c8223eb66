use serde_json::json;
use ticklab_core::panels::text;

pub fn run(input: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let input = input.unwrap_or("");
    let output = text::format_string(input);
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "input": input,
            "output": output,
        }))?
    );
    Ok(())
}
