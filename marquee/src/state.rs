/// Lifecycle phase of a [`crate::Marquee`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No data laid out; the engine is stopped.
    #[default]
    Empty,
    /// Window filled; ticks move the strip (unless explicitly stopped).
    Active,
    /// A reload is in progress.
    Reloading,
    /// Torn down; ticks and reloads are ignored.
    Terminated,
}

/// A lightweight, serializable snapshot of the visible window.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    pub phase: Phase,
    pub running: bool,
    pub item_count: usize,
    pub current_index: usize,
    pub len: usize,
    pub first_index: Option<usize>,
    pub last_index: Option<usize>,
    /// Leading edge of the head item along the scroll axis.
    pub leading_edge: Option<f64>,
    /// Trailing edge of the tail item along the scroll axis.
    pub trailing_edge: Option<f64>,
}
