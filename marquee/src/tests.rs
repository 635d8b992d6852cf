use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, PartialEq, Eq)]
struct Cell {
    serial: usize,
    index: Option<usize>,
}

fn kind_for(index: usize) -> &'static str {
    if index % 3 == 2 { "image" } else { "text" }
}

/// A data source over fixed per-index extents that records how often it is queried.
struct Strip {
    extents: Vec<f64>,
    axis: Axis,
    cross: f64,
    size_queries: usize,
    count_reads: usize,
}

impl Strip {
    fn new(extents: &[f64]) -> Self {
        Self {
            extents: extents.to_vec(),
            axis: Axis::Horizontal,
            cross: 20.0,
            size_queries: 0,
            count_reads: 0,
        }
    }

    fn uniform(count: usize, extent: f64) -> Self {
        Self::new(&vec![extent; count])
    }

    fn vertical(mut self) -> Self {
        self.axis = Axis::Vertical;
        self
    }
}

impl DataSource<Cell> for Strip {
    fn item_count(&mut self) -> usize {
        self.count_reads += 1;
        self.extents.len()
    }

    fn item_for_index(
        &mut self,
        index: usize,
        items: &mut Dequeuer<'_, Cell>,
    ) -> ReusableItem<Cell> {
        let mut item = items.dequeue(kind_for(index));
        item.index = Some(index);
        item
    }

    fn size_for_index(&mut self, index: usize) -> Size {
        self.size_queries += 1;
        let extent = self.extents[index];
        match self.axis {
            Axis::Horizontal => Size::new(extent, self.cross),
            Axis::Vertical => Size::new(self.cross, extent),
        }
    }
}

fn new_marquee(options: MarqueeOptions) -> Marquee<Cell> {
    let serial = Arc::new(AtomicUsize::new(0));
    let mut m = Marquee::new(options);
    for kind in ["text", "image"] {
        let serial = Arc::clone(&serial);
        m.register(kind, move || Cell {
            serial: serial.fetch_add(1, Ordering::Relaxed),
            index: None,
        });
    }
    m
}

fn options(viewport: f64, spacing: f64, margin: f64) -> MarqueeOptions {
    MarqueeOptions::default()
        .with_viewport(Size::new(viewport, 20.0))
        .with_spacing(spacing)
        .with_margin(margin)
        .with_speed(60.0)
        .with_tick_rate(60.0)
}

/// `(index, start, end)` for every placed item, in spatial order.
fn spans(m: &Marquee<Cell>) -> Vec<(usize, f64, f64)> {
    m.visible_items().map(|v| (v.index, v.start(), v.end())).collect()
}

fn serials(m: &Marquee<Cell>) -> Vec<usize> {
    m.visible_items().map(|v| v.item.serial).collect()
}

fn approx(a: f64, b: f64) -> bool {
    let d = a - b;
    d < 1e-6 && d > -1e-6
}

fn assert_gap_free(m: &Marquee<Cell>, spacing: f64) {
    let s = spans(m);
    for pair in s.windows(2) {
        let (_, _, prev_end) = pair[0];
        let (_, next_start, _) = pair[1];
        assert!(
            approx(next_start, prev_end + spacing),
            "gap between items: {pair:?}"
        );
    }
}

fn assert_indices_consecutive(m: &Marquee<Cell>, count: usize) {
    let s = spans(m);
    for pair in s.windows(2) {
        assert_eq!((pair[0].0 + 1) % count, pair[1].0, "out of order: {s:?}");
    }
}

fn assert_disjoint_ownership(m: &Marquee<Cell>) {
    let visible = serials(m);
    for kind in ["text", "image"] {
        if let Some(pool) = m.pool(kind) {
            for item in pool {
                assert!(
                    !visible.contains(&item.serial),
                    "instance {} both pooled and visible",
                    item.serial
                );
            }
        }
    }
}

#[test]
fn single_item_repeats_to_cover_both_margins() {
    let mut strip = Strip::uniform(1, 40.0);
    let mut m = new_marquee(options(100.0, 10.0, 50.0));
    m.reload_data(&mut strip);

    let s = spans(&m);
    assert_eq!(s.len(), 4);
    assert!(s.iter().all(|&(i, _, _)| i == 0));
    let starts: Vec<f64> = s.iter().map(|&(_, start, _)| start).collect();
    assert_eq!(starts, vec![-50.0, 0.0, 50.0, 100.0]);
    assert!(m.snapshot().leading_edge.unwrap() <= -50.0);
    assert!(m.snapshot().trailing_edge.unwrap() + 10.0 >= 150.0);
    assert_eq!(m.current_index(), 0);
}

#[test]
fn forward_pass_stops_once_viewport_is_covered() {
    let mut strip = Strip::new(&[20.0, 30.0, 40.0]);
    let mut m = new_marquee(options(50.0, 0.0, 0.0));
    m.reload_data(&mut strip);

    let s = spans(&m);
    assert_eq!(s, vec![(0, 0.0, 20.0), (1, 20.0, 50.0)]);
    // The cursor names the tail, so the next forward fill continues with index 2.
    assert_eq!(m.current_index(), 1);

    let report = m.tick(&mut strip).unwrap();
    assert_eq!(report.delta, -1.0);
    assert_eq!(report.evicted, None);
    assert_eq!(report.filled, Some(2));
    assert_eq!(m.current_index(), 2);
    assert_eq!(spans(&m).last().copied(), Some((2, 49.0, 89.0)));
}

#[test]
fn backward_pass_prepends_wrapping_indices() {
    let mut strip = Strip::new(&[10.0, 20.0, 30.0, 40.0]);
    let mut m = new_marquee(options(40.0, 5.0, 25.0));
    m.reload_data(&mut strip);

    let s = spans(&m);
    let indices: Vec<usize> = s.iter().map(|&(i, _, _)| i).collect();
    assert_eq!(indices, vec![3, 0, 1, 2]);
    assert_eq!(s[0].1, -45.0);
    assert_eq!(m.current_index(), 2);
    assert_gap_free(&m, 5.0);

    let mut back = new_marquee(
        options(40.0, 5.0, 25.0).with_direction(ScrollDirection::Backward),
    );
    back.reload_data(&mut strip);
    assert_eq!(back.current_index(), 3);
    assert_eq!(spans(&back), s);
}

#[test]
fn evicted_head_lands_in_its_pool_exactly_once() {
    let mut strip = Strip::uniform(5, 40.0);
    let mut m = new_marquee(options(100.0, 10.0, 20.0));
    m.reload_data(&mut strip);

    let indices: Vec<usize> = spans(&m).iter().map(|&(i, _, _)| i).collect();
    assert_eq!(indices, vec![4, 0, 1, 2]);
    let head_serial = serials(&m)[0];
    assert_eq!(m.pooled_total(), 0);

    let report = m.tick(&mut strip).unwrap();
    assert_eq!(report.evicted, Some(4));
    assert_eq!(report.filled, None);
    assert_eq!(m.pooled_count(kind_for(4)), 1);
    assert_eq!(m.pool(kind_for(4)).unwrap().front().unwrap().serial, head_serial);
    assert!(!serials(&m).contains(&head_serial));
    assert_disjoint_ownership(&m);

    let mut evictions = vec![(1usize, 4usize)];
    for t in 2..=100usize {
        let report = m.tick(&mut strip).unwrap();
        if let Some(index) = report.evicted {
            evictions.push((t, index));
        }
        assert_disjoint_ownership(&m);
    }
    assert_eq!(evictions, vec![(1, 4), (41, 0), (91, 1)]);
}

#[test]
fn evicted_instances_are_handed_out_again() {
    let mut strip = Strip::uniform(4, 40.0);
    let mut m = new_marquee(options(100.0, 10.0, 0.0));
    m.reload_data(&mut strip);

    let mut fills = 0;
    for _ in 0..2000 {
        fills += usize::from(m.tick(&mut strip).unwrap().filled.is_some());
    }
    assert!(fills >= 30, "only {fills} fills");

    // Every constructed instance is either placed or pooled, and few were ever built.
    let mut all: Vec<usize> = serials(&m);
    for kind in ["text", "image"] {
        if let Some(pool) = m.pool(kind) {
            all.extend(pool.iter().map(|c| c.serial));
        }
    }
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.last().copied(), Some(all.len() - 1));
    assert!(all.len() <= 6, "instances not reused: {all:?}");
}

#[test]
fn forward_steady_state_keeps_coverage_and_spacing() {
    let extents = [15.0, 25.0, 35.0, 45.0, 20.0];
    let (viewport, spacing, margin) = (120.0, 5.0, 30.0);
    let mut strip = Strip::new(&extents);
    let mut m = new_marquee(options(viewport, spacing, margin).with_speed(120.0));
    m.reload_data(&mut strip);
    assert_eq!(m.engine().per_tick_delta(ScrollDirection::Forward), -2.0);

    let mut fills = Vec::new();
    for t in 0..3000usize {
        let report = m.tick(&mut strip).unwrap();
        fills.extend(report.filled);

        assert_gap_free(&m, spacing);
        assert_indices_consecutive(&m, extents.len());
        let snap = m.snapshot();
        assert!(snap.trailing_edge.unwrap() + spacing + 2.0 >= viewport + margin - 1e-9);
        if t >= 10 {
            let gone = spans(&m).iter().filter(|&&(_, _, end)| end < 0.0).count();
            assert!(gone <= 1, "stale items at tick {t}: {:?}", spans(&m));
        }
    }

    for pair in fills.windows(2) {
        assert_eq!((pair[0] + 1) % extents.len(), pair[1]);
    }
    let cycles = 4;
    let mut counts = [0usize; 5];
    for &index in &fills[..cycles * extents.len()] {
        counts[index] += 1;
    }
    assert_eq!(counts, [cycles; 5]);
}

#[test]
fn backward_steady_state_mirrors_forward() {
    let extents = [15.0, 25.0, 35.0, 45.0, 20.0];
    let (viewport, spacing, margin) = (120.0, 5.0, 30.0);
    let mut strip = Strip::new(&extents);
    let mut m = new_marquee(
        options(viewport, spacing, margin)
            .with_speed(120.0)
            .with_direction(ScrollDirection::Backward),
    );
    m.reload_data(&mut strip);
    assert_eq!(m.current_index(), 3);

    let first = m.tick(&mut strip).unwrap();
    assert_eq!(first.delta, 2.0);
    assert_eq!(first.evicted, Some(4));

    let mut fills = Vec::new();
    for t in 1..3000usize {
        let report = m.tick(&mut strip).unwrap();
        fills.extend(report.filled);

        assert_gap_free(&m, spacing);
        assert_indices_consecutive(&m, extents.len());
        let snap = m.snapshot();
        assert!(snap.leading_edge.unwrap() - spacing - 2.0 <= -margin + 1e-9);
        if t >= 10 {
            let gone = spans(&m)
                .iter()
                .filter(|&&(_, start, _)| start > viewport)
                .count();
            assert!(gone <= 1, "stale items at tick {t}: {:?}", spans(&m));
        }
        assert_disjoint_ownership(&m);
    }

    assert_eq!(fills[0], 2);
    for pair in fills.windows(2) {
        assert_eq!((pair[1] + 1) % extents.len(), pair[0]);
    }
}

#[test]
fn size_is_queried_once_per_index_per_generation() {
    let mut strip = Strip::new(&[15.0, 25.0, 35.0]);
    let mut m = new_marquee(options(100.0, 5.0, 20.0));
    m.reload_data(&mut strip);
    for _ in 0..1000 {
        m.tick(&mut strip);
    }
    assert_eq!(strip.size_queries, 3);
    assert_eq!(m.size_cache_len(), 3);

    m.reload_data(&mut strip);
    assert_eq!(strip.size_queries, 6);
}

#[test]
fn size_cache_memoizes_until_cleared() {
    let mut cache = SizeCache::new();
    let mut calls = 0;
    let a = cache.size_of(7, |_| {
        calls += 1;
        Size::new(3.0, 4.0)
    });
    let b = cache.size_of(7, |_| {
        calls += 1;
        Size::new(9.0, 9.0)
    });
    assert_eq!(a, b);
    assert_eq!(calls, 1);
    assert_eq!(cache.get(7), Some(Size::new(3.0, 4.0)));

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.get(7), None);
}

#[test]
fn reload_rebuilds_the_same_window_with_empty_pools() {
    let mut strip = Strip::new(&[15.0, 25.0, 35.0, 45.0]);
    let opts = options(100.0, 5.0, 20.0);
    let mut m = new_marquee(opts);
    m.reload_data(&mut strip);
    let mut pooled = false;
    for _ in 0..500 {
        let report = m.tick(&mut strip).unwrap();
        if report.evicted.is_some() && report.filled.is_none() {
            pooled = true;
            break;
        }
    }
    assert!(pooled);
    assert!(m.pooled_total() > 0);

    m.reload_data(&mut strip);
    assert_eq!(m.pooled_total(), 0);
    assert_eq!(m.phase(), Phase::Active);
    assert!(m.is_running());

    let mut fresh = new_marquee(opts);
    fresh.reload_data(&mut Strip::new(&[15.0, 25.0, 35.0, 45.0]));
    assert_eq!(spans(&m), spans(&fresh));
    assert_eq!(m.snapshot(), fresh.snapshot());
    assert_eq!(m.size_cache_len(), fresh.size_cache_len());
}

#[test]
fn empty_source_leaves_marquee_idle_until_items_arrive() {
    let mut empty = Strip::new(&[]);
    let mut m = new_marquee(options(100.0, 10.0, 20.0));
    m.reload_data(&mut empty);

    assert_eq!(m.phase(), Phase::Empty);
    assert!(!m.is_running());
    assert_eq!(m.visible_len(), 0);
    assert_eq!(m.size_cache_len(), 0);
    assert_eq!(m.tick(&mut empty), None);
    assert!(!m.start());

    let mut strip = Strip::uniform(3, 30.0);
    m.reload_data(&mut strip);
    assert_eq!(m.phase(), Phase::Active);
    assert!(m.tick(&mut strip).is_some());

    m.reload_data(&mut empty);
    assert_eq!(m.phase(), Phase::Empty);
    assert_eq!(m.visible_len(), 0);
    assert_eq!(m.tick(&mut empty), None);
}

#[test]
fn start_and_stop_are_idempotent() {
    let mut strip = Strip::uniform(3, 30.0);
    let mut m = new_marquee(options(100.0, 10.0, 20.0));
    m.reload_data(&mut strip);

    assert!(!m.start());
    assert!(m.stop());
    assert!(!m.stop());
    let before = spans(&m);
    assert_eq!(m.tick(&mut strip), None);
    assert_eq!(spans(&m), before);

    assert!(m.start());
    assert!(!m.start());
    assert!(m.tick(&mut strip).is_some());
}

#[test]
fn terminate_stops_all_processing() {
    let mut strip = Strip::uniform(3, 30.0);
    let mut m = new_marquee(options(100.0, 10.0, 20.0));
    m.reload_data(&mut strip);
    for _ in 0..200 {
        m.tick(&mut strip);
    }

    m.terminate();
    assert_eq!(m.phase(), Phase::Terminated);
    assert!(!m.is_running());
    assert_eq!(m.visible_len(), 0);
    assert_eq!(m.pooled_total(), 0);
    assert_eq!(m.tick(&mut strip), None);
    assert!(!m.start());

    let reads = strip.count_reads;
    m.reload_data(&mut strip);
    assert_eq!(strip.count_reads, reads);
    assert_eq!(m.phase(), Phase::Terminated);

    assert!(!m.set_viewport(Size::new(240.0, 20.0), &mut strip));
    assert_eq!(strip.count_reads, reads);
    assert_eq!(m.phase(), Phase::Terminated);
}

#[test]
fn viewport_notification_reloads_only_on_change() {
    let mut strip = Strip::uniform(3, 30.0);
    let mut m = new_marquee(options(0.0, 10.0, 20.0));

    assert!(m.set_viewport(Size::new(100.0, 20.0), &mut strip));
    assert_eq!(strip.count_reads, 1);
    assert!(!m.set_viewport(Size::new(100.0, 20.0), &mut strip));
    assert_eq!(strip.count_reads, 1);

    assert!(m.set_viewport(Size::new(160.0, 20.0), &mut strip));
    assert_eq!(strip.count_reads, 2);
    assert_eq!(m.viewport(), Size::new(160.0, 20.0));
    assert!(m.snapshot().trailing_edge.unwrap() + 10.0 >= 180.0);
}

#[test]
fn dequeue_prefers_pool_then_factory() {
    let mut m = new_marquee(MarqueeOptions::default());
    let a = m.dequeue("text");
    let b = m.dequeue("text");
    assert_ne!(a.serial, b.serial);
    assert_eq!(a.kind().as_str(), "text");
    assert_eq!(m.pooled_count("text"), 0);

    let mut pool = ReuseQueue::new();
    let serial = a.serial;
    pool.enqueue(a);
    assert_eq!(pool.dequeue().map(|c| c.serial), Some(serial));
    assert!(pool.dequeue().is_none());
}

#[test]
fn dequeue_of_unregistered_kind_is_an_error() {
    let mut m = new_marquee(MarqueeOptions::default());
    assert!(!m.is_registered("video"));
    let err = m.try_dequeue("video").unwrap_err();
    assert_eq!(err, MarqueeError::UnregisteredKind(ItemKind::new("video")));
    assert_eq!(
        std::format!("{err}"),
        "no item factory registered for kind `video`"
    );
}

#[test]
#[should_panic(expected = "no item factory registered for kind `video`")]
fn dequeue_of_unregistered_kind_panics() {
    let mut m = new_marquee(MarqueeOptions::default());
    let _ = m.dequeue("video");
}

#[test]
fn registering_a_kind_again_replaces_its_factory() {
    let mut m = new_marquee(MarqueeOptions::default());
    m.register("text", || Cell {
        serial: 1000,
        index: None,
    });
    assert_eq!(m.dequeue("text").serial, 1000);
}

#[test]
fn reuse_queue_is_fifo_and_reuses_slots() {
    let mut q = ReuseQueue::new();
    assert!(q.is_empty());
    assert_eq!(q.dequeue(), None::<u32>);

    q.enqueue(1);
    q.enqueue(2);
    q.enqueue(3);
    assert_eq!(q.len(), 3);
    assert_eq!(q.front(), Some(&1));
    assert_eq!(q.rear(), Some(&3));
    assert_eq!(q.dequeue(), Some(1));

    q.enqueue(4);
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(q.iter().len(), 3);
    assert_eq!(q.dequeue(), Some(2));
    assert_eq!(q.dequeue(), Some(3));
    assert_eq!(q.dequeue(), Some(4));
    assert!(q.is_empty());
    assert_eq!(q.rear(), None);

    for i in 0..100 {
        q.enqueue(i);
        q.enqueue(i + 1000);
        assert_eq!(q.dequeue(), Some(i));
        assert_eq!(q.dequeue(), Some(i + 1000));
    }
    assert!(q.is_empty());

    q.enqueue(7);
    q.enqueue(8);
    q.clear();
    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
    assert_eq!(q.front(), None);
}

#[test]
fn single_item_loops_in_both_directions() {
    for direction in [ScrollDirection::Forward, ScrollDirection::Backward] {
        let mut strip = Strip::uniform(1, 40.0);
        let mut m = new_marquee(options(100.0, 10.0, 50.0).with_direction(direction));
        m.reload_data(&mut strip);
        for _ in 0..1000 {
            let report = m.tick(&mut strip).unwrap();
            if let Some(index) = report.filled {
                assert_eq!(index, 0);
            }
            assert_gap_free(&m, 10.0);
        }
        assert!((3..=6).contains(&m.visible_len()));
        assert!(m.pooled_total() + m.visible_len() <= 7);
    }
}

#[test]
fn zero_extent_items_still_consume_spacing() {
    let mut strip = Strip::new(&[0.0, 0.0]);
    let mut m = new_marquee(options(30.0, 10.0, 0.0));
    m.reload_data(&mut strip);
    assert_eq!(
        spans(&m),
        vec![(0, 0.0, 0.0), (1, 10.0, 10.0), (0, 20.0, 20.0)]
    );
}

#[test]
fn non_advancing_fill_terminates() {
    let mut strip = Strip::new(&[0.0]);
    let mut m = new_marquee(options(100.0, 0.0, 10.0));
    m.reload_data(&mut strip);
    assert_eq!(m.visible_len(), 1);
    for _ in 0..50 {
        m.tick(&mut strip);
        assert!(m.visible_len() <= 2);
    }
}

#[test]
fn nan_and_negative_extents_are_zero_length() {
    let mut strip = Strip::new(&[f64::NAN, 10.0, -5.0]);
    let mut m = new_marquee(options(20.0, 5.0, 0.0));
    m.reload_data(&mut strip);
    let s = spans(&m);
    assert_eq!(s[0], (0, 0.0, 0.0));
    assert_eq!(s[1], (1, 5.0, 15.0));
    assert_eq!(s.len(), 2);
}

#[test]
fn zero_viewport_and_margin_yield_an_empty_running_window() {
    let mut strip = Strip::uniform(3, 30.0);
    let mut m = new_marquee(options(0.0, 10.0, 0.0));
    m.reload_data(&mut strip);
    assert_eq!(m.phase(), Phase::Active);
    assert_eq!(m.visible_len(), 0);
    let report = m.tick(&mut strip).unwrap();
    assert_eq!(report.filled, None);
    assert_eq!(report.evicted, None);
}

#[test]
fn infinite_viewport_is_laid_out_as_zero() {
    let mut strip = Strip::uniform(1, 40.0);
    let mut m = new_marquee(options(0.0, 10.0, 20.0));
    assert!(m.set_viewport(Size::new(f64::INFINITY, 20.0), &mut strip));
    assert_eq!(m.phase(), Phase::Active);
    assert_eq!(spans(&m), vec![(0, -50.0, -10.0), (0, 0.0, 40.0)]);
    assert!(m.tick(&mut strip).is_some());
}

#[test]
fn infinite_margin_is_laid_out_as_zero() {
    let mut strip = Strip::uniform(1, 40.0);
    let mut m = new_marquee(options(100.0, 10.0, f64::INFINITY));
    m.reload_data(&mut strip);
    assert_eq!(m.phase(), Phase::Active);
    assert_eq!(spans(&m), vec![(0, 0.0, 40.0), (0, 50.0, 90.0)]);
    assert!(m.tick(&mut strip).is_some());
}

#[test]
fn infinite_speed_is_treated_as_zero() {
    let mut m = new_marquee(options(100.0, 10.0, 20.0));
    m.set_speed(f64::INFINITY);
    assert_eq!(m.engine().speed(), 0.0);
    assert_eq!(m.engine().per_tick_delta(ScrollDirection::Forward), 0.0);
}

#[test]
fn vertical_axis_places_along_y() {
    let mut strip = Strip::uniform(3, 30.0).vertical();
    let mut m = new_marquee(
        MarqueeOptions::new(Axis::Vertical)
            .with_viewport(Size::new(80.0, 100.0))
            .with_spacing(10.0)
            .with_margin(0.0)
            .with_speed(60.0)
            .with_tick_rate(60.0),
    );
    m.reload_data(&mut strip);

    let frames: Vec<Frame> = m.visible_items().map(|v| v.frame).collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(
        frames[1],
        Frame {
            x: 0.0,
            y: 40.0,
            width: 20.0,
            height: 30.0,
        }
    );

    m.tick(&mut strip);
    let mut moved = Vec::new();
    m.for_each_visible(|v| moved.push((v.translation, v.current_frame())));
    assert_eq!(moved[1].0, -1.0);
    assert_eq!(moved[1].1.y, 39.0);
    assert_eq!(moved[1].1.x, 0.0);
}

#[test]
fn axis_change_applies_at_next_reload() {
    let mut strip = Strip::uniform(3, 30.0);
    let mut m = new_marquee(options(100.0, 10.0, 0.0));
    m.reload_data(&mut strip);
    m.set_axis(Axis::Vertical);
    assert_eq!(m.visible_items().next().unwrap().axis, Axis::Horizontal);

    let mut strip = strip.vertical();
    m.update_options(|o| o.viewport = Size::new(20.0, 100.0));
    m.reload_data(&mut strip);
    let first = m.visible_items().next().unwrap();
    assert_eq!(first.axis, Axis::Vertical);
    assert_eq!(first.frame.y, 0.0);
}

#[test]
fn direction_change_continues_from_the_head() {
    let extents = [15.0, 25.0, 35.0, 45.0, 20.0];
    let mut strip = Strip::new(&extents);
    let mut m = new_marquee(options(120.0, 5.0, 30.0));
    m.reload_data(&mut strip);
    for _ in 0..57 {
        m.tick(&mut strip);
    }

    m.set_direction(ScrollDirection::Backward);
    let head = m.snapshot().first_index.unwrap();
    assert_eq!(m.current_index(), head);

    let filled = loop {
        if let Some(index) = m.tick(&mut strip).unwrap().filled {
            break index;
        }
    };
    assert_eq!(filled, (head + extents.len() - 1) % extents.len());
    assert_gap_free(&m, 5.0);
    assert_indices_consecutive(&m, extents.len());

    m.set_direction(ScrollDirection::Forward);
    assert_eq!(m.current_index(), m.snapshot().last_index.unwrap());
}

#[test]
fn speed_and_tick_rate_drive_the_delta() {
    let mut m = new_marquee(MarqueeOptions::default().with_speed(120.0));
    assert_eq!(m.engine().per_tick_delta(ScrollDirection::Forward), -2.0);
    assert_eq!(m.engine().per_tick_delta(ScrollDirection::Backward), 2.0);

    m.set_tick_rate(120.0);
    assert_eq!(m.engine().per_tick_delta(ScrollDirection::Backward), 1.0);

    m.set_speed(-30.0);
    assert_eq!(m.engine().speed(), 0.0);

    m.update_options(|o| {
        o.speed = 240.0;
        o.tick_rate = 0.0;
    });
    assert_eq!(m.engine().per_tick_delta(ScrollDirection::Forward), 0.0);
    assert_eq!(m.options().speed, 240.0);
}

#[test]
fn snapshot_reports_window_edges() {
    let mut strip = Strip::uniform(5, 40.0);
    let mut m = new_marquee(options(100.0, 10.0, 20.0));
    m.reload_data(&mut strip);
    let snap = m.snapshot();
    assert_eq!(
        snap,
        WindowSnapshot {
            phase: Phase::Active,
            running: true,
            item_count: 5,
            current_index: 2,
            len: 4,
            first_index: Some(4),
            last_index: Some(2),
            leading_edge: Some(-50.0),
            trailing_edge: Some(140.0),
        }
    );
}
