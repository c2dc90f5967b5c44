/*
    Exceptions
*/

use super::*;

impl Exceptions {
    /// Sets the `overflow` field.
    pub fn with_overflow(mut self, raised: bool) -> Self {
        self.overflow = raised;
        self
    }

    /// Sets the `underflow` field.
    pub fn with_underflow(mut self, raised: bool) -> Self {
        self.underflow = raised;
        self
    }

    /// Sets the `inexact` field.
    pub fn with_inexact(mut self, raised: bool) -> Self {
        self.inexact = raised;
        self
    }

    /// Returns true if the `overflow` flag was raised.
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// Returns true if the `underflow` flag was raised.
    pub fn underflow(&self) -> bool {
        self.underflow
    }

    /// Returns true if the `inexact` flag was raised.
    pub fn inexact(&self) -> bool {
        self.inexact
    }
}
