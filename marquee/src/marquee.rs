use alloc::sync::Arc;

use crate::engine::{ScrollEngine, TickReport};
use crate::pool::ReuseQueue;
use crate::registry::Registry;
use crate::window::{Fill, Layout, VisibleItem, VisibleWindow, non_negative};
use crate::{
    Axis, DataSource, ItemKind, MarqueeError, MarqueeOptions, Phase, ReusableItem,
    ScrollDirection, Size, SizeCache, WindowSnapshot,
};

/// A headless, endlessly looping ticker.
///
/// The marquee owns the placed item instances, their reuse pools and a size cache. It does not
/// render anything and does not schedule anything:
/// - the host calls [`Marquee::tick`] once per display tick while [`Marquee::is_running`],
/// - the host reports viewport changes via [`Marquee::set_viewport`],
/// - the host reads placed items back with [`Marquee::for_each_visible`] or
///   [`Marquee::visible_items`] and draws them.
///
/// The data source is lent to each call that may materialize items instead of being stored,
/// so no ownership cycle exists between the marquee and the object feeding it.
pub struct Marquee<I> {
    options: MarqueeOptions,
    /// Axis the current window was laid out along.
    layout_axis: Axis,
    registry: Registry<I>,
    sizes: SizeCache,
    window: VisibleWindow<I>,
    engine: ScrollEngine,
    phase: Phase,
    item_count: usize,
    /// Viewport recorded by the last bounds notification.
    laid_out_viewport: Option<Size>,
}

impl<I> Marquee<I> {
    pub fn new(options: MarqueeOptions) -> Self {
        mdebug!(
            axis = ?options.axis,
            direction = ?options.direction,
            speed = options.speed,
            tick_rate = options.tick_rate,
            "Marquee::new"
        );
        Self {
            layout_axis: options.axis,
            registry: Registry::new(),
            sizes: SizeCache::new(),
            window: VisibleWindow::new(),
            engine: ScrollEngine::new(options.speed, options.tick_rate),
            phase: Phase::Empty,
            item_count: 0,
            laid_out_viewport: None,
            options,
        }
    }

    pub fn options(&self) -> &MarqueeOptions {
        &self.options
    }

    /// Registers the constructor used when `kind`'s pool is empty.
    ///
    /// Registering a kind again replaces its factory; pooled instances are kept.
    pub fn register(
        &mut self,
        kind: impl Into<ItemKind>,
        factory: impl Fn() -> I + Send + Sync + 'static,
    ) {
        self.registry.register(kind.into(), Arc::new(factory));
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.registry.is_registered(kind)
    }

    /// Pops a pooled instance of `kind`, or constructs one with the registered factory.
    ///
    /// # Panics
    ///
    /// Panics if `kind` was never registered and its pool is empty.
    pub fn dequeue(&mut self, kind: &str) -> ReusableItem<I> {
        self.registry.dequeue(kind)
    }

    pub fn try_dequeue(&mut self, kind: &str) -> Result<ReusableItem<I>, MarqueeError> {
        self.registry.try_dequeue(kind)
    }

    /// Rebuilds the window from scratch.
    ///
    /// Stops the engine, drops every placed instance (they are not pooled), clears the size
    /// cache and all reuse pools, and re-reads the item count. With items to show, lays out a
    /// fresh window and restarts the engine; otherwise stays [`Phase::Empty`].
    pub fn reload_data<D: DataSource<I> + ?Sized>(&mut self, source: &mut D) {
        if self.phase == Phase::Terminated {
            mwarn!("reload_data after terminate; ignored");
            return;
        }
        self.phase = Phase::Reloading;
        self.engine.stop();
        self.window.discard();
        self.sizes.clear();
        self.registry.clear_pools();
        self.layout_axis = self.options.axis;

        self.item_count = source.item_count();
        if self.item_count == 0 {
            mdebug!("reload_data: no items");
            self.phase = Phase::Empty;
            return;
        }

        let viewport = self.layout_axis.main(self.options.viewport);
        if !viewport.is_finite() || !self.options.margin.is_finite() {
            mwarn!(
                viewport,
                margin = self.options.margin,
                "non-finite viewport or margin laid out as zero"
            );
        }
        let layout = self.layout();
        let mut fill = Fill {
            registry: &mut self.registry,
            sizes: &mut self.sizes,
            source,
            layout,
        };
        self.window.fill_initial(&mut fill, self.options.direction);
        self.engine.start();
        self.phase = Phase::Active;
        mdebug!(
            item_count = self.item_count,
            visible = self.window.len(),
            current_index = self.window.cursor(),
            "reload_data"
        );
    }

    /// Bounds-change notification from the host.
    ///
    /// Reloads only when `viewport` differs from the one recorded by the previous
    /// notification. Returns whether a reload happened.
    pub fn set_viewport<D: DataSource<I> + ?Sized>(
        &mut self,
        viewport: Size,
        source: &mut D,
    ) -> bool {
        if self.phase == Phase::Terminated || self.laid_out_viewport == Some(viewport) {
            return false;
        }
        mdebug!(
            width = viewport.width,
            height = viewport.height,
            "viewport changed"
        );
        self.laid_out_viewport = Some(viewport);
        self.options.viewport = viewport;
        self.reload_data(source);
        true
    }

    pub fn viewport(&self) -> Size {
        self.options.viewport
    }

    /// Advances the strip by one tick.
    ///
    /// Returns `None` when the engine is not running (no data, stopped, or terminated).
    pub fn tick<D: DataSource<I> + ?Sized>(&mut self, source: &mut D) -> Option<TickReport> {
        if self.phase == Phase::Terminated {
            mwarn!("tick after terminate; ignored");
            return None;
        }
        if !self.engine.is_running() {
            return None;
        }
        let layout = self.layout();
        let mut fill = Fill {
            registry: &mut self.registry,
            sizes: &mut self.sizes,
            source,
            layout,
        };
        let report = self
            .engine
            .tick(&mut self.window, &mut fill, self.options.direction);
        mtrace!(
            delta = report.delta,
            evicted = ?report.evicted,
            filled = ?report.filled,
            "tick"
        );
        Some(report)
    }

    /// Resumes ticking. No-op unless the marquee has a laid-out window.
    ///
    /// Returns `true` if the engine transitioned from stopped to running.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.engine.start()
    }

    /// Pauses ticking without touching the window.
    ///
    /// Returns `true` if the engine transitioned from running to stopped.
    pub fn stop(&mut self) -> bool {
        self.engine.stop()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Tears the marquee down: stops the engine and releases every instance.
    ///
    /// Further ticks and reloads are ignored.
    pub fn terminate(&mut self) {
        if self.phase == Phase::Terminated {
            return;
        }
        mdebug!("Marquee::terminate");
        self.engine.stop();
        self.window.discard();
        self.registry.clear_pools();
        self.sizes.clear();
        self.phase = Phase::Terminated;
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.options.axis = axis;
    }

    /// Changes the direction of travel, starting with the next tick.
    pub fn set_direction(&mut self, direction: ScrollDirection) {
        if self.options.direction == direction {
            return;
        }
        self.options.direction = direction;
        self.window.resolve_cursor(direction);
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.options.speed = speed;
        self.engine.set_speed(speed);
    }

    pub fn set_tick_rate(&mut self, tick_rate: f64) {
        self.options.tick_rate = tick_rate;
        self.engine.set_tick_rate(tick_rate);
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        self.options.spacing = spacing;
    }

    pub fn set_margin(&mut self, margin: f64) {
        self.options.margin = margin;
    }

    /// Clones the current options, applies `f`, then routes each changed field through its
    /// setter. A changed viewport is recorded but does not reload; use [`Marquee::set_viewport`]
    /// for that.
    pub fn update_options(&mut self, f: impl FnOnce(&mut MarqueeOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_axis(next.axis);
        self.set_direction(next.direction);
        if next.speed != self.options.speed {
            self.set_speed(next.speed);
        }
        if next.tick_rate != self.options.tick_rate {
            self.set_tick_rate(next.tick_rate);
        }
        self.set_spacing(next.spacing);
        self.set_margin(next.margin);
        self.options.viewport = next.viewport;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Logical index most recently placed on the edge the current direction fills.
    pub fn current_index(&self) -> usize {
        self.window.cursor()
    }

    pub fn engine(&self) -> &ScrollEngine {
        &self.engine
    }

    pub fn visible_len(&self) -> usize {
        self.window.len()
    }

    /// Iterates placed items in spatial order along the scroll axis.
    pub fn visible_items(&self) -> impl Iterator<Item = VisibleItem<'_, I>> + '_ {
        self.window.iter(self.layout_axis)
    }

    pub fn for_each_visible(&self, mut f: impl FnMut(VisibleItem<'_, I>)) {
        for item in self.window.iter(self.layout_axis) {
            f(item);
        }
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            phase: self.phase,
            running: self.engine.is_running(),
            item_count: self.item_count,
            current_index: self.window.cursor(),
            len: self.window.len(),
            first_index: self.window.first_index(),
            last_index: self.window.last_index(),
            leading_edge: self.window.leading_edge(),
            trailing_edge: self.window.trailing_edge(),
        }
    }

    /// Number of memoized item sizes.
    pub fn size_cache_len(&self) -> usize {
        self.sizes.len()
    }

    pub fn pool(&self, kind: &str) -> Option<&ReuseQueue<ReusableItem<I>>> {
        self.registry.pool(kind)
    }

    pub fn pooled_count(&self, kind: &str) -> usize {
        self.registry.pooled_count(kind)
    }

    /// Instances held across all reuse pools.
    pub fn pooled_total(&self) -> usize {
        self.registry.pooled_total()
    }

    fn layout(&self) -> Layout {
        Layout {
            axis: self.layout_axis,
            count: self.item_count,
            viewport: non_negative(self.layout_axis.main(self.options.viewport)),
            spacing: non_negative(self.options.spacing),
            margin: non_negative(self.options.margin),
        }
    }
}

impl<I> Drop for Marquee<I> {
    fn drop(&mut self) {
        self.terminate();
    }
}

impl<I> core::fmt::Debug for Marquee<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Marquee")
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("item_count", &self.item_count)
            .field("visible", &self.window.len())
            .field("current_index", &self.window.cursor())
            .field("running", &self.engine.is_running())
            .finish_non_exhaustive()
    }
}
