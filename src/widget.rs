use crate::time::{Instant, MonotonicClock};
use embedded_hal::digital::{OutputPin, PinState};
use fugit::MicrosDurationU64;

/// A single logical LED driven from a cooperative polling loop.
///
/// The widget owns its output pin and a clock source. `set`/`invert` write
/// the pin directly; `blink` configures an on/off cycle that `animate`
/// advances on each poll. All pin errors are propagated to the caller.
///
/// Pin configuration (direction, clock enable) is the board layer's job and
/// must happen before the pin is handed over here; on active-low boards wrap
/// the pin in [`ActiveLow`](crate::pin::ActiveLow) first.
pub struct LedWidget<P, C> {
    pin: P,
    clock: C,
    last_change: Instant,
    blink_on: MicrosDurationU64,
    blink_off: MicrosDurationU64,
    state: bool,
}

impl<P: OutputPin, C: MonotonicClock> LedWidget<P, C> {
    /// Binds the widget to a configured output pin. Blinking starts
    /// disabled and the pin is driven to the off state.
    pub fn new(pin: P, clock: C) -> Result<Self, P::Error> {
        let last_change = clock.now();
        let mut widget = Self {
            pin,
            clock,
            last_change,
            blink_on: MicrosDurationU64::from_ticks(0),
            blink_off: MicrosDurationU64::from_ticks(0),
            state: false,
        };
        widget.do_set(false)?;
        Ok(widget)
    }

    /// Last value written to the pin.
    pub fn state(&self) -> bool {
        self.state
    }

    /// Writes `state` to the pin unconditionally.
    ///
    /// Blink configuration is left untouched: if a blink cycle is active,
    /// the next `animate` may override this. Call `blink_on_off(0, 0)`
    /// first to truly pin the state.
    pub fn set(&mut self, state: bool) -> Result<(), P::Error> {
        self.do_set(state)
    }

    /// Flips the stored state and writes the complement to the pin.
    pub fn invert(&mut self) -> Result<(), P::Error> {
        let state = !self.state;
        self.do_set(state)
    }

    /// Symmetric blink: on and off phases both last `rate_ms`.
    pub fn blink(&mut self, rate_ms: u32) -> Result<(), P::Error> {
        self.blink_on_off(rate_ms, rate_ms)
    }

    /// Configures the blink cycle and restarts it from the on phase.
    ///
    /// `(0, 0)` disables blinking and leaves the pin where it is; any other
    /// combination turns the LED on now and lets `animate` take over.
    pub fn blink_on_off(&mut self, on_ms: u32, off_ms: u32) -> Result<(), P::Error> {
        self.blink_on = MicrosDurationU64::millis(on_ms as u64);
        self.blink_off = MicrosDurationU64::millis(off_ms as u64);
        self.last_change = self.clock.now();
        #[cfg(feature = "defmt")]
        defmt::trace!("led blink on={=u32}ms off={=u32}ms", on_ms, off_ms);
        if !self.is_static() {
            self.do_set(true)?;
        }
        Ok(())
    }

    /// Poll tick: toggles the LED once its current phase has elapsed.
    ///
    /// `last_change` advances by the owed phase duration rather than
    /// snapping to `now`, so a late poll does not shift every later
    /// transition. At most one toggle per call.
    pub fn animate(&mut self) -> Result<(), P::Error> {
        if self.is_static() {
            return Ok(());
        }
        let now = self.clock.now();
        let phase = if self.state {
            self.blink_on
        } else {
            self.blink_off
        };
        if let Some(elapsed) = now.checked_duration_since(self.last_change) {
            if elapsed >= phase {
                let state = !self.state;
                self.do_set(state)?;
                self.last_change += phase;
            }
        }
        Ok(())
    }

    /// Consumes the widget, handing back the pin and the clock.
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }

    fn is_static(&self) -> bool {
        self.blink_on.ticks() == 0 && self.blink_off.ticks() == 0
    }

    fn do_set(&mut self, state: bool) -> Result<(), P::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("led set {}", state);
        self.pin.set_state(PinState::from(state))?;
        self.state = state;
        Ok(())
    }
}
