// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! A module containing boiler-plate implementations of standard traits such as Default, From etc etc

use super::Color;
use crate::TurtleError;
use std::{fmt, str::FromStr};

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = TurtleError;

    /// Accepts `#AARRGGBB`, `#RRGGBB` (opaque), `0xAARRGGBB` or a decimal ARGB value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || TurtleError::InvalidParameter(format!("Could not parse color: \"{s}\""));

        // from_str_radix() would also accept a leading '+'
        let parse = |digits: &str, radix: u32| {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return Err(invalid());
            }
            u32::from_str_radix(digits, radix).map_err(|_| invalid())
        };

        if let Some(hex) = s.strip_prefix('#') {
            let value = parse(hex, 16)?;
            return match hex.len() {
                6 => Ok(Color(0xFF00_0000 | value)),
                8 => Ok(Color(value)),
                _ => Err(invalid()),
            };
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return parse(hex, 16).map(Color);
        }
        parse(s, 10).map(Color)
    }
}
