use crate::{Dequeuer, ReusableItem, Size};

/// The embedding application's view of the data being scrolled.
///
/// Implementations must be deterministic per generation: `size_for_index` is memoized until the
/// next reload, and `item_count` is only re-read on reload.
pub trait DataSource<I> {
    fn item_count(&mut self) -> usize;

    /// Builds (or reuses) the item for `index`.
    ///
    /// Typically calls [`Dequeuer::dequeue`] with the kind appropriate for the index and then
    /// configures the returned instance.
    fn item_for_index(&mut self, index: usize, items: &mut Dequeuer<'_, I>) -> ReusableItem<I>;

    fn size_for_index(&mut self, index: usize) -> Size;
}

impl<I, D: DataSource<I> + ?Sized> DataSource<I> for &mut D {
    fn item_count(&mut self) -> usize {
        (**self).item_count()
    }

    fn item_for_index(&mut self, index: usize, items: &mut Dequeuer<'_, I>) -> ReusableItem<I> {
        (**self).item_for_index(index, items)
    }

    fn size_for_index(&mut self, index: usize) -> Size {
        (**self).size_for_index(index)
    }
}
