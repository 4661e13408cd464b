//! The expectation sum type.
//!
//! An expectation is either a finite number or explicitly undefined (no
//! history yet, or a window where every value was missing). Arithmetic on
//! `Undefined` yields `Undefined`, so a missing estimate flows through
//! derived features instead of being coerced to zero.
//!
//! # Examples
//!
//! ```
//! use expectancy_core::Expectation;
//!
//! let e = Expectation::Defined(4.0) + Expectation::Defined(2.0);
//! assert_eq!(e, Expectation::Defined(6.0));
//! assert!((Expectation::Undefined * 2.0).is_undefined());
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A running estimate, or the explicit absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Expectation {
    Defined(f64),
    #[default]
    Undefined,
}

impl Expectation {
    /// Build from a raw float. Non-finite values become `Undefined`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self::Defined(value)
        } else {
            Self::Undefined
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(v),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }

    pub fn is_undefined(self) -> bool {
        !self.is_defined()
    }

    /// Apply `f` to a defined value.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Defined(v) => Self::new(f(v)),
            Self::Undefined => Self::Undefined,
        }
    }

    /// Combine two expectations; undefined if either side is.
    pub fn zip_with(self, other: Self, f: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self, other) {
            (Self::Defined(a), Self::Defined(b)) => Self::new(f(a, b)),
            _ => Self::Undefined,
        }
    }

    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }

    /// The defined value, or `default`.
    pub fn unwrap_or(self, default: f64) -> f64 {
        self.value().unwrap_or(default)
    }
}

impl From<f64> for Expectation {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Option<f64>> for Expectation {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Undefined, Self::new)
    }
}

impl From<Expectation> for Option<f64> {
    fn from(value: Expectation) -> Self {
        value.value()
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(v) => write!(f, "{v}"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

impl Add for Expectation {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Expectation {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for Expectation {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Div for Expectation {
    type Output = Self;
    /// Division by zero is undefined rather than infinite.
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl Mul<f64> for Expectation {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.map(|v| v * rhs)
    }
}

impl Div<f64> for Expectation {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.map(|v| v / rhs)
    }
}

// Serialized as a nullable number so tabular consumers see an empty cell.
impl Serialize for Expectation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Expectation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.into())
    }
}
