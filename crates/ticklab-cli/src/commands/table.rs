use ticklab_core::panels::table::MultiplicationTable;

pub fn run(size: u32, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = MultiplicationTable::new(size);
    if json {
        println!("{}", serde_json::to_string_pretty(&table.grid())?);
    } else {
        println!("{}", table.render_text());
    }
    Ok(())
}
