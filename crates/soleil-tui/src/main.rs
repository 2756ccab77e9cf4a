mod headless;
mod render;
mod runtime;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use soleil_core::tracing_setup::{init_tracing, Fallback};
use soleil_core::{FeedConfig, FeedRuntime, SystemRandom};

use crate::runtime::run_app;
use ui::App;

/// Live terrace sunshine request dashboard
#[derive(Debug, Parser)]
#[command(name = "soleil", version, about)]
struct Args {
    /// Seed for the randomness source (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON snapshots to stdout instead of drawing the dashboard
    #[arg(long)]
    headless: bool,

    /// Milliseconds between headless snapshots
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    /// Stop after this many headless snapshots
    #[arg(long)]
    count: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let fallback = if args.headless {
        Fallback::Stderr
    } else {
        Fallback::Discard
    };
    init_tracing(fallback)?;

    let rng = match args.seed {
        Some(seed) => SystemRandom::seeded(seed),
        None => SystemRandom::new(),
    };
    let mut feed = FeedRuntime::new(FeedConfig::default(), rng)?;
    feed.start()?;

    if args.headless {
        let result =
            headless::run_headless(&feed, Duration::from_millis(args.interval_ms), args.count).await;
        feed.stop();
        return result;
    }

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let mut terminal = ui::init_terminal()?;
    let mut app = App::new(feed.snapshot());
    let result = run_app(&mut terminal, &mut app, &feed).await;

    feed.stop();
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
