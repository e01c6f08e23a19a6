//! Fake pin and clock for the unit tests.

use crate::time::{Instant, MonotonicClock};
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Output pin that records every level written to it. Clones share the log,
/// so tests keep one handle while the widget owns the other.
#[derive(Clone, Default)]
pub struct MockPin {
    writes: Rc<RefCell<Vec<bool>>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<bool> {
        self.writes.borrow().clone()
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.writes.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.writes.borrow_mut().push(true);
        Ok(())
    }
}

/// Manually advanced clock. Clones share the same time base.
#[derive(Clone, Default)]
pub struct MockClock {
    now_us: Rc<Cell<u64>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1_000);
    }
}

impl MonotonicClock for MockClock {
    fn now(&self) -> Instant {
        Instant::from_ticks(self.now_us.get())
    }
}
