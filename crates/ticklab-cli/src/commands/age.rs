use ticklab_core::panels::age;

pub fn run(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let report = age::classify(value)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
