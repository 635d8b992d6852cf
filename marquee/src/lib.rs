//! A headless, recycling ticker (marquee) engine.
//!
//! For host-side helpers (frame clock, driver), see the `marquee-adapter` crate.
//!
//! The engine scrolls an endless, cyclic sequence of items at constant speed along one axis
//! while keeping only a handful of item instances alive: items that leave the viewport go back
//! to a per-kind reuse pool and are handed out again for the next logical index that enters.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`DataSource`] (item count, per-index size, per-index item construction)
//! - item factories, registered per [`ItemKind`]
//! - viewport size changes and a periodic tick
//!
//! and to draw whatever [`Marquee::visible_items`] reports after each tick.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod key;
mod marquee;
mod options;
mod pool;
mod registry;
mod size_cache;
mod source;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use engine::{ScrollEngine, TickReport};
pub use error::MarqueeError;
pub use marquee::Marquee;
pub use options::MarqueeOptions;
pub use pool::{Iter as ReuseQueueIter, ReuseQueue};
pub use registry::{Dequeuer, ItemFactory};
pub use size_cache::SizeCache;
pub use source::DataSource;
pub use state::{Phase, WindowSnapshot};
pub use types::{Axis, Frame, ItemKind, ReusableItem, ScrollDirection, Size};
pub use window::VisibleItem;
