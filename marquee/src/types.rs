use alloc::sync::Arc;
use core::fmt;

/// The axis items travel along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Length of `size` along this axis.
    pub fn main(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Length of `size` across this axis.
    pub fn cross(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Builds a frame whose main-axis origin is `position` and whose cross-axis origin is zero.
    pub fn frame_at(self, position: f64, size: Size) -> Frame {
        match self {
            Self::Horizontal => Frame {
                x: position,
                y: 0.0,
                width: size.width,
                height: size.height,
            },
            Self::Vertical => Frame {
                x: 0.0,
                y: position,
                width: size.width,
                height: size.height,
            },
        }
    }
}

/// Which way the strip moves.
///
/// `Forward` moves items toward decreasing positions (right-to-left for a horizontal strip,
/// bottom-to-top for a vertical one); `Backward` moves them the other way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle in the marquee's coordinate space (origin at the viewport's top-left corner).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns this frame moved by `distance` along `axis`.
    pub fn translated(self, axis: Axis, distance: f64) -> Self {
        match axis {
            Axis::Horizontal => Self {
                x: self.x + distance,
                ..self
            },
            Axis::Vertical => Self {
                y: self.y + distance,
                ..self
            },
        }
    }
}

/// Reuse identifier selecting a factory and a reuse pool.
///
/// Cheap to clone; compares by string contents.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKind(Arc<str>);

impl ItemKind {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemKind").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An item instance tagged with the kind it was constructed for.
///
/// The tag is assigned by the factory that built the instance and cannot change afterwards;
/// evicted items go back to the pool named by their tag.
pub struct ReusableItem<I> {
    kind: ItemKind,
    item: I,
}

impl<I> ReusableItem<I> {
    pub(crate) fn new(kind: ItemKind, item: I) -> Self {
        Self { kind, item }
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn get(&self) -> &I {
        &self.item
    }

    pub fn get_mut(&mut self) -> &mut I {
        &mut self.item
    }
}

impl<I> core::ops::Deref for ReusableItem<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.item
    }
}

impl<I> core::ops::DerefMut for ReusableItem<I> {
    fn deref_mut(&mut self) -> &mut I {
        &mut self.item
    }
}

impl<I: fmt::Debug> fmt::Debug for ReusableItem<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusableItem")
            .field("kind", &self.kind)
            .field("item", &self.item)
            .finish()
    }
}

impl core::borrow::Borrow<str> for ItemKind {
    fn borrow(&self) -> &str {
        &self.0
    }
}
