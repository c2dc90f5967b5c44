/*
    Top-level
*/

//! Exact conversion between binary64 floating-point values and decimal strings.
//!
//! [`stringify`] writes out every digit of the exact value an `f64` denotes,
//! and [`parse`] accepts only decimal literals that some `f64` denotes
//! exactly, rejecting everything else instead of rounding.

mod convert;
mod decimal;
mod error;
mod round;
mod value;

pub mod config;
pub mod ieee754;

pub use config::Config;
pub use convert::*;
pub use decimal::ExactDecimal;
pub use error::*;
pub use round::*;
pub use value::*;
