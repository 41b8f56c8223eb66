use clap::Subcommand;
use ticklab_core::{Config, Event, PageState};

#[derive(Subcommand)]
pub enum PageAction {
    /// Recolor the banner with a random palette color
    ChangeText {
        /// RNG seed for a deterministic pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Toggle the content block's visibility
    Toggle,
    /// Append random numbered items to the list
    AddItem {
        #[arg(long, default_value = "1")]
        count: u32,
        /// RNG seed for deterministic labels
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Restore every panel to its initial state
    Reset,
    /// Run a scripted sequence exercising the whole page
    Demo {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn page(seed: Option<u64>) -> Result<PageState, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    Ok(match seed {
        Some(seed) => PageState::with_seed(&config.page, seed),
        None => PageState::new(&config.page),
    })
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

pub fn run(action: PageAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PageAction::ChangeText { seed } => {
            let mut page = page(seed)?;
            print_event(&page.change_text())?;
        }
        PageAction::Toggle => {
            let mut page = page(None)?;
            print_event(&page.toggle_visibility())?;
        }
        PageAction::AddItem { count, seed } => {
            let mut page = page(seed)?;
            for _ in 0..count {
                print_event(&page.add_item())?;
            }
        }
        PageAction::Reset => {
            let mut page = page(None)?;
            print_event(&page.reset_all())?;
            println!("{}", serde_json::to_string_pretty(&page.snapshot())?);
        }
        PageAction::Demo { seed } => {
            let mut page = page(seed)?;
            print_event(&page.change_text())?;
            print_event(&page.toggle_visibility())?;
            for _ in 0..3 {
                print_event(&page.add_item())?;
            }
            print_event(&page.reset_all())?;
            println!("{}", serde_json::to_string_pretty(&page.snapshot())?);
        }
    }
    Ok(())
}
