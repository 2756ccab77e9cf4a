use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::FeedConfig;
use crate::engine::FeedState;
use crate::error::FeedError;
use crate::random::RandomSource;
use crate::snapshot::Snapshot;

type SharedFeedState = Arc<Mutex<FeedState>>;

/// Owns a feed and the single task that drives its timers.
///
/// `start` spawns the driver on the current tokio runtime, `stop` tears it
/// down, and `snapshot` can be called at any time. Dropping the runtime
/// stops it.
pub struct FeedRuntime {
    state: SharedFeedState,
    stop_tx: watch::Sender<bool>,
    driver: Option<JoinHandle<()>>,
}

impl FeedRuntime {
    pub fn new(config: FeedConfig, rng: impl RandomSource) -> Result<Self, FeedError> {
        let state = FeedState::new(config, rng, Instant::now(), Local::now())?;
        let (stop_tx, _) = watch::channel(false);
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            stop_tx,
            driver: None,
        })
    }

    pub fn start(&mut self) -> Result<(), FeedError> {
        if self.driver.is_some() {
            return Err(FeedError::AlreadyRunning);
        }
        if self.state.lock().is_halted() {
            return Err(FeedError::AlreadyStopped);
        }
        let handle = tokio::runtime::Handle::try_current()?;

        self.state.lock().set_running(true);
        let driver = drive(self.state.clone(), self.stop_tx.subscribe());
        self.driver = Some(handle.spawn(driver));
        info!("feed started");
        Ok(())
    }

    /// Cancel every pending timer. Safe to call any number of times.
    pub fn stop(&mut self) {
        {
            let mut state = self.state.lock();
            if state.is_halted() {
                return;
            }
            state.halt();
        }
        let _ = self.stop_tx.send(true);
        if let Some(driver) = self.driver.take() {
            driver.abort();
            info!("feed stopped");
        }
    }

    /// Current view of the feed. Freshness is settled against the current
    /// time first, so highlights still lapse after `stop`.
    pub fn snapshot(&self) -> Snapshot {
        let mut state = self.state.lock();
        state.expire_fresh(Instant::now());
        state.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_some() && !self.state.lock().is_halted()
    }
}

impl Drop for FeedRuntime {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer loop. Every mutation happens here, one branch at a time.
async fn drive(state: SharedFeedState, mut stop_rx: watch::Receiver<bool>) {
    let started = Instant::now();
    let (clock_period, rate_period) = {
        let state = state.lock();
        (state.config().clock_period, state.config().rate_period)
    };

    let mut clock_tick = interval_at(started + clock_period, clock_period);
    clock_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut rate_tick = interval_at(started + rate_period, rate_period);
    rate_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut fire_at = started + state.lock().next_delay();

    loop {
        let fresh_deadline = state.lock().next_fresh_expiry();

        tokio::select! {
            biased;

            _ = stop_rx.changed() => break,

            _ = sleep_until(fire_at) => {
                let now = Instant::now();
                let mut guard = state.lock();
                // Halted feeds refuse to fire; that doubles as the re-arm check
                if guard.fire(now).is_none() {
                    break;
                }
                let delay = guard.next_delay();
                debug!(delay_ms = delay.as_millis() as u64, "next arrival scheduled");
                fire_at = now + delay;
            }

            _ = sleep_until(fresh_deadline.unwrap_or(fire_at)), if fresh_deadline.is_some() => {
                state.lock().expire_fresh(Instant::now());
            }

            _ = rate_tick.tick() => {
                state.lock().recompute_rate(Instant::now());
            }

            _ = clock_tick.tick() => {
                state.lock().tick_clock(Instant::now(), Local::now());
            }
        }
    }
}
