use alloc::collections::VecDeque;

use crate::registry::{Dequeuer, Registry};
use crate::{Axis, DataSource, Frame, ReusableItem, ScrollDirection, Size, SizeCache};

/// Geometry the window is laid out against, resolved by the controller before each pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Layout {
    pub(crate) axis: Axis,
    pub(crate) count: usize,
    pub(crate) viewport: f64,
    pub(crate) spacing: f64,
    pub(crate) margin: f64,
}

impl Layout {
    /// Trailing boundary of the region that must stay populated.
    fn covered_end(&self) -> f64 {
        self.viewport + self.margin
    }
}

/// Clamps a length to a finite non-negative value; NaN and infinities become zero.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn advances(step: f64) -> bool {
    step > 0.0
}

/// Everything a fill pass needs besides the window itself.
pub(crate) struct Fill<'a, I, D: ?Sized> {
    pub(crate) registry: &'a mut Registry<I>,
    pub(crate) sizes: &'a mut SizeCache,
    pub(crate) source: &'a mut D,
    pub(crate) layout: Layout,
}

impl<I, D: DataSource<I> + ?Sized> Fill<'_, I, D> {
    fn size_of(&mut self, index: usize) -> Size {
        let source = &mut *self.source;
        self.sizes.size_of(index, |i| source.size_for_index(i))
    }

    fn extent_of(&mut self, index: usize) -> f64 {
        let size = self.size_of(index);
        non_negative(self.layout.axis.main(size))
    }

    fn place(&mut self, index: usize, position: f64) -> Placed<I> {
        let size = self.size_of(index);
        let mut items = Dequeuer::new(&mut *self.registry);
        let item = self.source.item_for_index(index, &mut items);
        mtrace!(index, position, kind = item.kind().as_str(), "place item");
        Placed {
            index,
            item,
            frame: self.layout.axis.frame_at(position, size),
            origin: position,
            extent: non_negative(self.layout.axis.main(size)),
            translation: 0.0,
        }
    }
}

pub(crate) struct Placed<I> {
    index: usize,
    item: ReusableItem<I>,
    frame: Frame,
    origin: f64,
    extent: f64,
    translation: f64,
}

impl<I> Placed<I> {
    fn start(&self) -> f64 {
        self.origin + self.translation
    }

    fn end(&self) -> f64 {
        self.start() + self.extent
    }
}

/// What a single maintenance step changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Maintenance {
    pub(crate) evicted: Option<usize>,
    pub(crate) filled: Option<usize>,
}

/// A placed item as seen by the host.
#[derive(Debug)]
pub struct VisibleItem<'a, I> {
    pub index: usize,
    pub axis: Axis,
    /// The rectangle assigned when the item was placed.
    pub frame: Frame,
    /// Distance travelled along `axis` since placement.
    pub translation: f64,
    pub item: &'a ReusableItem<I>,
}

impl<I> VisibleItem<'_, I> {
    /// The placement frame moved by the accumulated translation.
    pub fn current_frame(&self) -> Frame {
        self.frame.translated(self.axis, self.translation)
    }

    /// Leading edge along the scroll axis.
    pub fn start(&self) -> f64 {
        self.position_of_frame() + self.translation
    }

    pub fn extent(&self) -> f64 {
        non_negative(self.axis.main(self.frame.size()))
    }

    pub fn end(&self) -> f64 {
        self.start() + self.extent()
    }

    fn position_of_frame(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => self.frame.x,
            Axis::Vertical => self.frame.y,
        }
    }
}

/// The ordered run of placed items covering the viewport plus margins.
///
/// Entries are kept in spatial order along the scroll axis (head = lowest position). `cursor` is
/// the logical index most recently placed on the edge the current direction fills.
pub(crate) struct VisibleWindow<I> {
    entries: VecDeque<Placed<I>>,
    cursor: usize,
}

impl<I> VisibleWindow<I> {
    pub(crate) fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn leading_edge(&self) -> Option<f64> {
        self.entries.front().map(Placed::start)
    }

    pub(crate) fn trailing_edge(&self) -> Option<f64> {
        self.entries.back().map(Placed::end)
    }

    pub(crate) fn first_index(&self) -> Option<usize> {
        self.entries.front().map(|e| e.index)
    }

    pub(crate) fn last_index(&self) -> Option<usize> {
        self.entries.back().map(|e| e.index)
    }

    pub(crate) fn iter(&self, axis: Axis) -> impl Iterator<Item = VisibleItem<'_, I>> + '_ {
        self.entries.iter().map(move |e| VisibleItem {
            index: e.index,
            axis,
            frame: e.frame,
            translation: e.translation,
            item: &e.item,
        })
    }

    /// Drops every placed instance without pooling it.
    pub(crate) fn discard(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Lays out a fresh window around position zero.
    ///
    /// Items `0, 1, ..` are placed forward from zero until the covered region's trailing
    /// boundary is reached, then items `count-1, count-2, ..` are placed backward from zero until
    /// the leading margin is covered.
    pub(crate) fn fill_initial<D: DataSource<I> + ?Sized>(
        &mut self,
        fill: &mut Fill<'_, I, D>,
        direction: ScrollDirection,
    ) {
        debug_assert!(self.entries.is_empty(), "initial fill over a populated window");
        let layout = fill.layout;
        let count = layout.count;
        if count == 0 {
            return;
        }

        let mut position = 0.0;
        let mut next = 0usize;
        while position < layout.covered_end() {
            let placed = fill.place(next, position);
            let step = placed.extent + layout.spacing;
            self.entries.push_back(placed);
            next = (next + 1) % count;
            if !advances(step) {
                mwarn!(index = next, "forward fill stalled on a zero-length step");
                break;
            }
            position += step;
        }

        let mut position = 0.0;
        let mut prev = count - 1;
        while position > -layout.margin {
            let step = fill.extent_of(prev) + layout.spacing;
            if !advances(step) {
                mwarn!(index = prev, "backward fill stalled on a zero-length step");
                break;
            }
            position -= step;
            let placed = fill.place(prev, position);
            self.entries.push_front(placed);
            prev = if prev > 0 { prev - 1 } else { count - 1 };
        }

        self.cursor = match direction {
            ScrollDirection::Forward => (next + count - 1) % count,
            ScrollDirection::Backward => (prev + 1) % count,
        };
        mdebug!(
            len = self.entries.len(),
            cursor = self.cursor,
            "VisibleWindow::fill_initial"
        );
    }

    /// Points the cursor at the edge item the given direction fills from.
    pub(crate) fn resolve_cursor(&mut self, direction: ScrollDirection) {
        let edge = match direction {
            ScrollDirection::Forward => self.last_index(),
            ScrollDirection::Backward => self.first_index(),
        };
        if let Some(index) = edge {
            self.cursor = index;
        }
    }

    pub(crate) fn translate(&mut self, delta: f64) {
        for entry in self.entries.iter_mut() {
            entry.translation += delta;
        }
    }

    /// Evicts at most one item that left the leading side and fills at most one item on the
    /// trailing side, for the given direction of travel.
    pub(crate) fn maintain<D: DataSource<I> + ?Sized>(
        &mut self,
        fill: &mut Fill<'_, I, D>,
        direction: ScrollDirection,
    ) -> Maintenance {
        let layout = fill.layout;
        let count = layout.count;
        let mut out = Maintenance::default();
        if count == 0 {
            return out;
        }

        match direction {
            ScrollDirection::Forward => {
                let Some(tail_end) = self.trailing_edge() else {
                    return out;
                };
                if self.entries.front().is_some_and(|head| head.end() < 0.0) {
                    if let Some(head) = self.entries.pop_front() {
                        mtrace!(index = head.index, "evict head");
                        out.evicted = Some(head.index);
                        fill.registry.recycle(head.item);
                    }
                }
                if tail_end <= layout.covered_end() {
                    self.cursor = (self.cursor + 1) % count;
                    let placed = fill.place(self.cursor, tail_end + layout.spacing);
                    out.filled = Some(self.cursor);
                    self.entries.push_back(placed);
                }
            }
            ScrollDirection::Backward => {
                let Some(head_start) = self.leading_edge() else {
                    return out;
                };
                if self
                    .entries
                    .back()
                    .is_some_and(|tail| tail.start() > layout.viewport)
                {
                    if let Some(tail) = self.entries.pop_back() {
                        mtrace!(index = tail.index, "evict tail");
                        out.evicted = Some(tail.index);
                        fill.registry.recycle(tail.item);
                    }
                }
                if head_start >= -layout.margin {
                    self.cursor = if self.cursor > 0 {
                        self.cursor - 1
                    } else {
                        count - 1
                    };
                    let extent = fill.extent_of(self.cursor);
                    let placed = fill.place(self.cursor, head_start - layout.spacing - extent);
                    out.filled = Some(self.cursor);
                    self.entries.push_front(placed);
                }
            }
        }
        out
    }
}
