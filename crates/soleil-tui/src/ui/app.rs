use soleil_core::Snapshot;

use crate::ui::services::AnimationClock;

/// Renderer state. Holds the latest feed snapshot and nothing the feed owns.
pub struct App {
    pub running: bool,
    /// First Ctrl+C arms this, the second one quits
    pub pending_quit: bool,
    pub snapshot: Snapshot,
    /// Index of the first feed row shown
    pub scroll_offset: usize,
    animation_clock: AnimationClock,
}

impl App {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            running: true,
            pending_quit: false,
            snapshot,
            scroll_offset: 0,
            animation_clock: AnimationClock::new(),
        }
    }

    pub fn tick(&mut self) {
        self.animation_clock.tick();
    }

    pub fn refresh(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.clamp_scroll();
    }

    pub fn live_indicator(&self) -> &'static str {
        self.animation_clock.live_indicator()
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
        self.clamp_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    fn clamp_scroll(&mut self) {
        let max = self.snapshot.active().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
