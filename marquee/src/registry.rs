use alloc::sync::Arc;

use crate::key::KindMap;
use crate::pool::ReuseQueue;
use crate::{ItemKind, MarqueeError, ReusableItem};

/// Constructs a fresh item instance for one kind.
pub type ItemFactory<I> = Arc<dyn Fn() -> I + Send + Sync>;

/// Factories and reuse pools, both keyed by [`ItemKind`].
pub(crate) struct Registry<I> {
    factories: KindMap<ItemFactory<I>>,
    pools: KindMap<ReuseQueue<ReusableItem<I>>>,
}

impl<I> Registry<I> {
    pub(crate) fn new() -> Self {
        Self {
            factories: KindMap::new(),
            pools: KindMap::new(),
        }
    }

    pub(crate) fn register(&mut self, kind: ItemKind, factory: ItemFactory<I>) {
        mdebug!(kind = kind.as_str(), "register item factory");
        self.factories.insert(kind, factory);
    }

    pub(crate) fn is_registered(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    pub(crate) fn try_dequeue(&mut self, kind: &str) -> Result<ReusableItem<I>, MarqueeError> {
        if let Some(item) = self.pools.get_mut(kind).and_then(ReuseQueue::dequeue) {
            return Ok(item);
        }
        let Some((kind, factory)) = self.factories.get_key_value(kind) else {
            return Err(MarqueeError::UnregisteredKind(ItemKind::new(kind)));
        };
        mtrace!(kind = kind.as_str(), "construct item");
        Ok(ReusableItem::new(kind.clone(), factory()))
    }

    pub(crate) fn dequeue(&mut self, kind: &str) -> ReusableItem<I> {
        match self.try_dequeue(kind) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns an evicted item to the pool named by its tag.
    pub(crate) fn recycle(&mut self, item: ReusableItem<I>) {
        match self.pools.get_mut(item.kind().as_str()) {
            Some(pool) => pool.enqueue(item),
            None => {
                let kind = item.kind().clone();
                let mut pool = ReuseQueue::new();
                pool.enqueue(item);
                self.pools.insert(kind, pool);
            }
        }
    }

    pub(crate) fn pool(&self, kind: &str) -> Option<&ReuseQueue<ReusableItem<I>>> {
        self.pools.get(kind)
    }

    pub(crate) fn pooled_count(&self, kind: &str) -> usize {
        self.pool(kind).map_or(0, ReuseQueue::len)
    }

    pub(crate) fn pooled_total(&self) -> usize {
        self.pools.values().map(ReuseQueue::len).sum()
    }

    pub(crate) fn clear_pools(&mut self) {
        self.pools.clear();
    }
}

/// The controller's dequeue entry point, lent to a [`crate::DataSource`] while it builds items.
///
/// Holding only this handle, a data source can pull instances from the reuse pools but cannot
/// reload or tick the marquee that called it.
pub struct Dequeuer<'a, I> {
    registry: &'a mut Registry<I>,
}

impl<'a, I> Dequeuer<'a, I> {
    pub(crate) fn new(registry: &'a mut Registry<I>) -> Self {
        Self { registry }
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

    pub fn is_registered(&self, kind: &str) -> bool {
        self.registry.is_registered(kind)
    }
}

impl<I> core::fmt::Debug for Dequeuer<'_, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dequeuer")
            .field("pooled", &self.registry.pooled_total())
            .finish_non_exhaustive()
    }
}
