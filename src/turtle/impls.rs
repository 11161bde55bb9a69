// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! A module containing boiler-plate implementations of standard traits such as Default, From etc etc

use super::{DEFAULT_PEN_SIZE, PenLine, Turtle};
use crate::{TurtleError, surface::Color};
use glam::DVec3;
use std::{fmt, str::FromStr};

impl Default for Turtle {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            spin: 0.0,
            pen_width: DEFAULT_PEN_SIZE,
            pen_height: DEFAULT_PEN_SIZE,
            pen_down: true,
            pen_color: Color::WHITE,
            pen_line: PenLine::Box,
            child: None,
            parent: None,
        }
    }
}

impl fmt::Display for PenLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenLine::Line => write!(f, "line"),
            PenLine::Box => write!(f, "box"),
        }
    }
}

impl FromStr for PenLine {
    type Err = TurtleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(PenLine::Line),
            "box" => Ok(PenLine::Box),
            _ => Err(TurtleError::InvalidParameter(format!(
                "Unknown pen line mode: \"{s}\""
            ))),
        }
    }
}
