/// Converts host frame timestamps into a whole number of engine ticks.
///
/// Hosts rarely render at exactly the rate the marquee's speed was configured for. The clock
/// accumulates elapsed wall time and hands out one tick per `1000 / tick_rate` milliseconds,
/// carrying the remainder to the next frame. A long stall (e.g. a backgrounded window) is capped
/// at `max_ticks_per_frame` so that no single frame moves the strip by more than a few ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    tick_rate: f64,
    max_ticks_per_frame: u32,
    last_ms: Option<u64>,
    carry_ms: f64,
}

impl FrameClock {
    pub const DEFAULT_MAX_TICKS_PER_FRAME: u32 = 4;

    pub fn new(tick_rate: f64) -> Self {
        Self {
            tick_rate,
            max_ticks_per_frame: Self::DEFAULT_MAX_TICKS_PER_FRAME,
            last_ms: None,
            carry_ms: 0.0,
        }
    }

    pub fn with_max_ticks_per_frame(mut self, max_ticks_per_frame: u32) -> Self {
        self.max_ticks_per_frame = max_ticks_per_frame;
        self
    }

    pub fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    pub fn set_tick_rate(&mut self, tick_rate: f64) {
        self.tick_rate = tick_rate;
        self.carry_ms = 0.0;
    }

    pub fn max_ticks_per_frame(&self) -> u32 {
        self.max_ticks_per_frame
    }

    /// Milliseconds per tick, or `None` when the tick rate cannot drive anything.
    pub fn tick_interval_ms(&self) -> Option<f64> {
        if self.tick_rate > 0.0 && self.tick_rate.is_finite() {
            Some(1000.0 / self.tick_rate)
        } else {
            None
        }
    }

    /// Records a frame at `now_ms` and returns how many ticks are due.
    ///
    /// The first call after construction or [`FrameClock::reset`] only anchors the clock.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0;
        };
        let Some(interval) = self.tick_interval_ms() else {
            return 0;
        };

        let elapsed = now_ms.saturating_sub(last) as f64 + self.carry_ms;
        let due = (elapsed / interval) as u64;
        self.carry_ms = elapsed - due as f64 * interval;

        let max = u64::from(self.max_ticks_per_frame);
        if due > max {
            awarn!(due, max, "dropping frame backlog");
            self.carry_ms = 0.0;
            return self.max_ticks_per_frame;
        }
        due as u32
    }

    /// Forgets the last timestamp and any carried remainder.
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.carry_ms = 0.0;
    }
}
