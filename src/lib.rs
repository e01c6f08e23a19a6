//! Polled LED widget for `embedded-hal` output pins.
//!
//! One [`LedWidget`] per physical LED: set or invert its state directly, or
//! configure an on/off blink cycle and call [`LedWidget::animate`] from the
//! main loop to advance it. Time comes from a board-supplied
//! [`MonotonicClock`]; no interrupts, no allocation, no blocking.

#![cfg_attr(not(test), no_std)]

pub mod pin;
pub mod prelude;
pub mod time;
pub mod widget;

#[cfg(test)]
pub(crate) mod mock;

pub use embedded_hal;
pub use fugit;

pub use pin::ActiveLow;
pub use time::{Instant, MonotonicClock};
pub use widget::LedWidget;
