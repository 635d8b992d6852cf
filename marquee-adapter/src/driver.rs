use marquee::{DataSource, Marquee, Size};

use crate::FrameClock;

/// A framework-neutral driver that owns a [`Marquee`] and pumps it from host frames.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport` when the host's layout pass reports the marquee's size
/// - `on_frame(now_ms, ..)` from the host's frame callback
///
/// and then draw `marquee().visible_items()`.
pub struct Driver<I> {
    marquee: Marquee<I>,
    clock: FrameClock,
}

impl<I> Driver<I> {
    /// Wraps `marquee` with a clock running at its configured tick rate.
    pub fn new(marquee: Marquee<I>) -> Self {
        let clock = FrameClock::new(marquee.options().tick_rate);
        Self { marquee, clock }
    }

    pub fn with_clock(marquee: Marquee<I>, clock: FrameClock) -> Self {
        Self { marquee, clock }
    }

    pub fn marquee(&self) -> &Marquee<I> {
        &self.marquee
    }

    pub fn marquee_mut(&mut self) -> &mut Marquee<I> {
        &mut self.marquee
    }

    pub fn into_marquee(self) -> Marquee<I> {
        self.marquee
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Forwards a bounds notification; returns whether the marquee reloaded.
    pub fn on_viewport<D: DataSource<I> + ?Sized>(
        &mut self,
        viewport: Size,
        source: &mut D,
    ) -> bool {
        let reloaded = self.marquee.set_viewport(viewport, source);
        if reloaded {
            self.clock.reset();
        }
        reloaded
    }

    pub fn reload_data<D: DataSource<I> + ?Sized>(&mut self, source: &mut D) {
        self.marquee.reload_data(source);
        self.clock.reset();
    }

    /// Runs every tick due at `now_ms` and returns how many were processed.
    ///
    /// While the marquee is not running the clock is kept reset, so resuming never replays the
    /// time spent stopped.
    pub fn on_frame<D: DataSource<I> + ?Sized>(&mut self, now_ms: u64, source: &mut D) -> u32 {
        if !self.marquee.is_running() {
            self.clock.reset();
            return 0;
        }
        let tick_rate = self.marquee.options().tick_rate;
        if self.clock.tick_rate() != tick_rate {
            adebug!(tick_rate, "tick rate changed");
            self.clock.set_tick_rate(tick_rate);
        }

        let due = self.clock.advance(now_ms);
        let mut ran = 0;
        for _ in 0..due {
            if self.marquee.tick(source).is_none() {
                break;
            }
            ran += 1;
        }
        ran
    }
}

impl<I> core::fmt::Debug for Driver<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Driver")
            .field("marquee", &self.marquee)
            .field("clock", &self.clock)
            .finish()
    }
}
