use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ticklab-cli", version, about = "Ticklab CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Countdown timer
    Countdown {
        #[command(subcommand)]
        action: commands::countdown::CountdownAction,
    },
    /// Age checker panel
    Age {
        /// Age to classify
        value: String,
    },
    /// Price calculator panel
    Price {
        /// Base price
        price: String,
        /// Quantity of items
        #[arg(long, default_value = "1")]
        quantity: String,
        /// Override the 8% default tax rate (e.g. 0.2 for 20%)
        #[arg(long)]
        tax_rate: Option<f64>,
    },
    /// String formatter panel
    Format {
        /// Text to format
        text: Option<String>,
    },
    /// Multiplication table panel
    Table {
        /// Grid size
        #[arg(long, default_value = "5")]
        size: u32,
        /// Print the grid as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Page state operations
    Page {
        #[command(subcommand)]
        action: commands::page::PageAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Countdown { action } => commands::countdown::run(action),
        Commands::Age { value } => commands::age::run(&value),
        Commands::Price {
            price,
            quantity,
            tax_rate,
        } => commands::price::run(&price, &quantity, tax_rate),
        Commands::Format { text } => commands::format::run(text.as_deref()),
        Commands::Table { size, json } => commands::table::run(size, json),
        Commands::Page { action } => commands::page::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
