//! Clock seam between the widget and the board layer.

/// Microsecond timestamp, 1 MHz tick. 64-bit so it never wraps within a
/// process lifetime.
pub type Instant = fugit::TimerInstantU64<1_000_000>;

/// A monotonic microsecond clock supplied by the board-support layer,
/// typically backed by a free-running hardware counter.
pub trait MonotonicClock {
    fn now(&self) -> Instant;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &mut C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
