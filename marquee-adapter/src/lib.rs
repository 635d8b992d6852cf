//! Host-side helpers for the `marquee` crate.
//!
//! The `marquee` crate is UI-agnostic and only advances when told to. This crate provides
//! small, framework-neutral helpers commonly needed to embed it:
//!
//! - A frame clock that turns host frame timestamps into a whole number of engine ticks
//! - A driver that owns a marquee and pumps it once per host frame
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod clock;
mod driver;


pub use clock::FrameClock;
pub use driver::Driver;
