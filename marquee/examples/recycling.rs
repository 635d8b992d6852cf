// Example: how few instances a long-running marquee actually builds.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use marquee::{DataSource, Dequeuer, Marquee, MarqueeOptions, ReusableItem, ScrollDirection, Size};

struct Row;

struct Rows {
    count: usize,
}

impl DataSource<Row> for Rows {
    fn item_count(&mut self) -> usize {
        self.count
    }

    fn item_for_index(
        &mut self,
        _index: usize,
        items: &mut Dequeuer<'_, Row>,
    ) -> ReusableItem<Row> {
        items.dequeue("row")
    }

    fn size_for_index(&mut self, index: usize) -> Size {
        Size::new(200.0, 18.0 + (index % 4) as f64 * 6.0)
    }
}

fn main() {
    let built = Arc::new(AtomicUsize::new(0));
    let mut m = Marquee::new(
        MarqueeOptions::new(marquee::Axis::Vertical)
            .with_direction(ScrollDirection::Backward)
            .with_speed(120.0),
    );
    m.register("row", {
        let built = Arc::clone(&built);
        move || {
            built.fetch_add(1, Ordering::Relaxed);
            Row
        }
    });

    let mut rows = Rows { count: 10_000 };
    m.set_viewport(Size::new(200.0, 300.0), &mut rows);

    let mut fills = 0usize;
    for _ in 0..60 * 60 {
        if let Some(report) = m.tick(&mut rows) {
            fills += usize::from(report.filled.is_some());
        }
    }
    println!(
        "fills={fills} built={} visible={} pooled={}",
        built.load(Ordering::Relaxed),
        m.visible_len(),
        m.pooled_total()
    );
}
