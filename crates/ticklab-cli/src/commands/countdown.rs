use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Subcommand;
use ticklab_core::countdown::{
    run_countdown, ConsoleDisplay, CountdownEngine, DisplaySurface, ManualScheduler,
    MemoryDisplay, TokioScheduler,
};
use ticklab_core::Config;

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Run the countdown in real time, one rendered line per tick
    Run {
        /// Initial counter value (default from config, 10)
        #[arg(long)]
        from: Option<u32>,
        /// Tick interval in milliseconds (default from config, 1000)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Print the complete frame sequence as JSON without waiting
    Preview {
        /// Initial counter value
        #[arg(long)]
        from: Option<u32>,
    },
}

pub fn run(action: CountdownAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        CountdownAction::Run { from, interval_ms } => {
            let mut countdown = config.countdown;
            if let Some(from) = from {
                countdown.start = from;
            }
            let interval = Duration::from_millis(interval_ms.unwrap_or(countdown.interval_ms));
            let engine = CountdownEngine::new(countdown);

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                let scheduler = TokioScheduler::new();
                let display: Arc<Mutex<dyn DisplaySurface + Send>> =
                    Arc::new(Mutex::new(ConsoleDisplay::new()));
                let handle = run_countdown(engine, &scheduler, display, interval);
                scheduler.wait(handle).await;
            });
        }
        CountdownAction::Preview { from } => {
            let mut countdown = config.countdown;
            if let Some(from) = from {
                countdown.start = from;
            }
            let engine = CountdownEngine::new(countdown);

            let scheduler = ManualScheduler::new();
            let display = Arc::new(Mutex::new(MemoryDisplay::new()));
            let surface: Arc<Mutex<dyn DisplaySurface + Send>> = display.clone();
            run_countdown(engine, &scheduler, surface, Duration::ZERO);
            while scheduler.pending() > 0 {
                scheduler.fire_all();
            }
            let display = display.lock().unwrap();
            println!("{}", serde_json::to_string_pretty(display.frames())?);
        }
    }

    Ok(())
}
