use crate::window::{Fill, VisibleWindow, non_negative};
use crate::{DataSource, ScrollDirection};

/// Outcome of one processed tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Signed displacement applied to every visible item.
    pub delta: f64,
    /// Logical index evicted to its reuse pool, if any.
    pub evicted: Option<usize>,
    /// Logical index newly placed, if any.
    pub filled: Option<usize>,
}

/// Converts a speed into a per-tick displacement and drives the window once per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollEngine {
    speed: f64,
    tick_rate: f64,
    step: f64,
    running: bool,
}

impl ScrollEngine {
    pub(crate) fn new(speed: f64, tick_rate: f64) -> Self {
        let mut engine = Self {
            speed: non_negative(speed),
            tick_rate,
            step: 0.0,
            running: false,
        };
        engine.recompute();
        engine
    }

    /// Distance per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Ticks per second.
    pub fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Signed per-tick displacement for `direction`.
    pub fn per_tick_delta(&self, direction: ScrollDirection) -> f64 {
        match direction {
            ScrollDirection::Forward => -self.step,
            ScrollDirection::Backward => self.step,
        }
    }

    pub(crate) fn set_speed(&mut self, speed: f64) {
        if !speed.is_finite() || speed < 0.0 {
            mwarn!(speed, "treating a negative or non-finite scroll speed as zero");
        }
        self.speed = non_negative(speed);
        self.recompute();
    }

    pub(crate) fn set_tick_rate(&mut self, tick_rate: f64) {
        self.tick_rate = tick_rate;
        self.recompute();
    }

    fn recompute(&mut self) {
        if self.tick_rate > 0.0 && self.tick_rate.is_finite() {
            self.step = self.speed / self.tick_rate;
        } else {
            mwarn!(
                tick_rate = self.tick_rate,
                "non-positive tick rate; scrolling is frozen"
            );
            self.step = 0.0;
        }
        mtrace!(
            speed = self.speed,
            tick_rate = self.tick_rate,
            step = self.step,
            "ScrollEngine::recompute"
        );
    }

    /// Returns `true` if the engine was stopped.
    pub(crate) fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        mdebug!("ScrollEngine::start");
        self.running = true;
        true
    }

    /// Returns `true` if the engine was running.
    pub(crate) fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        mdebug!("ScrollEngine::stop");
        self.running = false;
        true
    }

    /// Translates the window by one tick's displacement, then evicts/fills its edges.
    pub(crate) fn tick<I, D: DataSource<I> + ?Sized>(
        &self,
        window: &mut VisibleWindow<I>,
        fill: &mut Fill<'_, I, D>,
        direction: ScrollDirection,
    ) -> TickReport {
        let delta = self.per_tick_delta(direction);
        window.translate(delta);
        let maintenance = window.maintain(fill, direction);
        TickReport {
            delta,
            evicted: maintenance.evicted,
            filled: maintenance.filled,
        }
    }
}
