use crate::{Axis, ScrollDirection, Size};

/// Configuration for [`crate::Marquee`].
///
/// Every field has a matching `set_*` on the controller; `axis` only takes effect at the next
/// reload since it changes how every item is measured.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarqueeOptions {
    pub axis: Axis,
    pub direction: ScrollDirection,
    /// Distance travelled per second.
    pub speed: f64,
    /// Space between consecutive items along the scroll axis.
    pub spacing: f64,
    /// How far past each viewport edge the window keeps items placed.
    pub margin: f64,
    /// Host ticks per second (e.g. the display refresh rate).
    pub tick_rate: f64,
    /// Initial viewport size.
    pub viewport: Size,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            direction: ScrollDirection::Forward,
            speed: 50.0,
            spacing: 30.0,
            margin: 100.0,
            tick_rate: 60.0,
            viewport: Size::ZERO,
        }
    }
}

impl MarqueeOptions {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }
}
