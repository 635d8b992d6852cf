// Example: driving a marquee from an uneven host frame loop.
use marquee::{DataSource, Dequeuer, Marquee, MarqueeOptions, ReusableItem, Size};
use marquee_adapter::{Driver, FrameClock};

struct Chip;

struct Chips;

impl DataSource<Chip> for Chips {
    fn item_count(&mut self) -> usize {
        12
    }

    fn item_for_index(
        &mut self,
        _index: usize,
        items: &mut Dequeuer<'_, Chip>,
    ) -> ReusableItem<Chip> {
        items.dequeue("chip")
    }

    fn size_for_index(&mut self, index: usize) -> Size {
        Size::new(40.0 + index as f64 * 5.0, 24.0)
    }
}

fn main() {
    let mut m = Marquee::new(MarqueeOptions::default().with_speed(90.0).with_tick_rate(60.0));
    m.register("chip", || Chip);

    let clock = FrameClock::new(60.0).with_max_ticks_per_frame(3);
    let mut driver = Driver::with_clock(m, clock);
    let mut chips = Chips;
    driver.on_viewport(Size::new(320.0, 24.0), &mut chips);

    // Simulate a host that mostly renders at ~60fps, with one long stall.
    let mut now_ms = 0u64;
    for frame in 0..240u64 {
        now_ms += if frame == 120 { 500 } else { 16 + frame % 3 };
        let ticks = driver.on_frame(now_ms, &mut chips);
        if frame % 40 == 0 || frame == 120 {
            let snap = driver.marquee().snapshot();
            println!(
                "t={now_ms}ms ticks={ticks} first={:?} last={:?} lead={:?}",
                snap.first_index, snap.last_index, snap.leading_edge
            );
        }
    }
}
