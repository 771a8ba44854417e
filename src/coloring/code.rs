// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color codes for the vertex coloring.
//!
//! The four colors are the elements of the rank-2 binary vector space under
//! componentwise exclusive-or (the Klein four-group). Representing them as
//! 2-bit codes makes the propagation rule a single XOR, and makes the key
//! property visible: the three masks used across a triangle's edges are
//! exactly the three non-identity elements, so no two propagation steps can
//! cancel into an identity transition between adjacent vertices.
//!
//! The display bijection is fixed: c00 "red", c01 "blue", c10 "green",
//! c11 "black".

use std::fmt;
use std::ops::BitXor;

/// A vertex color: an element of the 2-bit XOR group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCode(u8);

impl ColorCode {
    /// The identity element, displayed as "red".
    pub const C00: ColorCode = ColorCode(0b00);
    /// Displayed as "blue".
    pub const C01: ColorCode = ColorCode(0b01);
    /// Displayed as "green".
    pub const C10: ColorCode = ColorCode(0b10);
    /// Displayed as "black". Seeds the propagation.
    pub const C11: ColorCode = ColorCode(0b11);

    /// Create a color code, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= 4`.
    pub fn new(value: u8) -> Self {
        assert!(value < 4, "Color code out of range: {}", value);
        Self(value)
    }

    /// Try to create a color code, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if value < 4 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying 2-bit code.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The display name under the fixed bijection.
    pub fn name(self) -> &'static str {
        match self.0 {
            0b00 => "red",
            0b01 => "blue",
            0b10 => "green",
            _ => "black",
        }
    }
}

impl BitXor for ColorCode {
    type Output = ColorCode;

    fn bitxor(self, rhs: ColorCode) -> ColorCode {
        ColorCode(self.0 ^ rhs.0)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
