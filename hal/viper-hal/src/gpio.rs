//! GPIO pin abstractions
//!
//! Digital inputs (buttons) and outputs (display control lines) as seen
//! by the drivers. Implementations live in the chip HAL.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Input wired active-low with a pull-up (idle high, pressed low)
///
/// Wraps any [`InputPin`] so callers can ask "is it pressed" instead of
/// reasoning about levels.
pub struct ActiveLow<P> {
    pin: P,
}

impl<P: InputPin> ActiveLow<P> {
    /// Wrap a pulled-up input
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Whether the input is asserted (line pulled low)
    pub fn is_asserted(&self) -> bool {
        self.pin.is_low()
    }

    /// Borrow the underlying pin
    pub fn inner(&self) -> &P {
        &self.pin
    }

    /// Mutably borrow the underlying pin (e.g. to await an edge)
    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}
