use crate::Size;
use crate::key::IndexMap;

/// Memoized per-index item sizes.
///
/// Entries stay valid until [`SizeCache::clear`]; the data source is only asked once per index
/// per generation.
#[derive(Clone, Debug, Default)]
pub struct SizeCache {
    sizes: IndexMap<Size>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached size for `index`, calling `query` on a miss.
    pub fn size_of(&mut self, index: usize, query: impl FnOnce(usize) -> Size) -> Size {
        if let Some(&size) = self.sizes.get(&index) {
            return size;
        }
        let size = query(index);
        mtrace!(index, width = size.width, height = size.height, "SizeCache miss");
        self.sizes.insert(index, size);
        size
    }

    pub fn get(&self, index: usize) -> Option<Size> {
        self.sizes.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn clear(&mut self) {
        self.sizes.clear();
    }
}
