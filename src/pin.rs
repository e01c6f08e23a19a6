//! Pin polarity adapter.

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// Inverts the electrical polarity of an output pin.
///
/// Boards that sink the LED (pin low = LED lit, e.g. an open-drain output
/// pulled high at rest) wrap the pin in this so the widget's logical "on"
/// lights the LED.
pub struct ActiveLow<P>(P);

impl<P> ActiveLow<P> {
    pub fn new(pin: P) -> Self {
        Self(pin)
    }

    pub fn release(self) -> P {
        self.0
    }
}

impl<P: ErrorType> ErrorType for ActiveLow<P> {
    type Error = P::Error;
}

impl<P: OutputPin> OutputPin for ActiveLow<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_low()
    }
}

impl<P: StatefulOutputPin> StatefulOutputPin for ActiveLow<P> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.0.is_set_low()
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.0.is_set_high()
    }
}
