/// Frame counter behind the "live" pulse in the footer.
pub struct AnimationClock {
    /// Advances once per UI tick (~100ms)
    frame_counter: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self { frame_counter: 0 }
    }

    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// On for 7 frames, off for 7 (a ~1.4s cycle at 10fps)
    pub fn live_pulse(&self) -> bool {
        self.frame_counter % 14 < 7
    }

    pub fn live_indicator(&self) -> &'static str {
        if self.live_pulse() {
            "●"
        } else {
            "○"
        }
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_pulse_cycle() {
        let mut clock = AnimationClock::new();
        for _ in 0..7 {
            assert!(clock.live_pulse());
            clock.tick();
        }
        for _ in 0..7 {
            assert!(!clock.live_pulse());
            clock.tick();
        }
        assert!(clock.live_pulse());
    }

    #[test]
    fn test_live_indicator() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.live_indicator(), "●");
        for _ in 0..7 {
            clock.tick();
        }
        assert_eq!(clock.live_indicator(), "○");
    }
}
