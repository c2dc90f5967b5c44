/*
    Traits relevant to rounding
*/

use crate::ieee754::Exceptions;

/// Rounding an exact value into a finite representation.
///
/// Any conversion from an exact (real) value into a computer number
/// system is a "fit-to-representation" operation `R -> R`. Rounding never
/// fails: values outside the representable range saturate or overflow, and
/// the exception flags of the result describe what happened.
pub trait Round<T> {
    /// Rounds to the nearest representable `T`, breaking ties to even.
    fn round(&self) -> Rounded<T>;
}

/// The outcome of a rounding operation: the rounded value and the
/// exceptions raised while producing it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rounded<T> {
    value: T,
    flags: Exceptions,
}

impl<T> Rounded<T> {
    /// Pairs a rounded value with its exception flags.
    pub fn new(value: T, flags: Exceptions) -> Self {
        Self { value, flags }
    }

    /// Returns the rounded value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes this result, returning the rounded value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the exceptions raised during rounding.
    pub fn flags(&self) -> Exceptions {
        self.flags
    }

    /// Returns true if rounding did not change the value.
    pub fn is_exact(&self) -> bool {
        !self.flags.inexact()
    }
}
