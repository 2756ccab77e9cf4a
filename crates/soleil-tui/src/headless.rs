use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use soleil_core::FeedRuntime;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

/// Write one JSON snapshot per line at a fixed cadence until `count`
/// snapshots are written or Ctrl+C is received.
pub(crate) async fn run_headless(
    feed: &FeedRuntime,
    every: Duration,
    count: Option<u64>,
) -> Result<()> {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut written: u64 = 0;
    let stdout = std::io::stdout();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
            _ = ticker.tick() => {
                let snapshot = feed.snapshot();
                let mut out = stdout.lock();
                serde_json::to_writer(&mut out, &snapshot.report())?;
                writeln!(out)?;
                out.flush()?;

                written += 1;
                if count.is_some_and(|limit| written >= limit) {
                    break;
                }
            }
        }
    }
    Ok(())
}
