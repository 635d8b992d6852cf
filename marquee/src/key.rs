#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ItemKind;

#[cfg(feature = "std")]
pub(crate) type KindMap<V> = HashMap<ItemKind, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KindMap<V> = BTreeMap<ItemKind, V>;

#[cfg(feature = "std")]
pub(crate) type IndexMap<V> = HashMap<usize, V>;
#[cfg(not(feature = "std"))]
pub(crate) type IndexMap<V> = BTreeMap<usize, V>;
