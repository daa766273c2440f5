use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PinError {
    #[error("PIN must be exactly {} digits", Pin::WIDTH)]
    Width,

    #[error("PIN out of range: {0}")]
    OutOfRange(u16),
}

/// Fixed-width numeric secret, so `0123` and `123` are different inputs
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pin(u16);

impl Pin {
    pub const WIDTH: usize = 4;
    const MAX: u16 = 9999;

    pub fn new(value: u16) -> Result<Self, PinError> {
        if value > Self::MAX {
            return Err(PinError::OutOfRange(value));
        }

        return Ok(Self(value));
    }

    pub fn parse(string: &str) -> Result<Self, PinError> {
        if string.len() != Self::WIDTH || !string.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PinError::Width);
        }

        let value = string.parse().map_err(|_| PinError::Width)?;

        return Self::new(value);
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Pin(****)");
    }
}
