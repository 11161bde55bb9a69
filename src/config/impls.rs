// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! A module containing boiler-plate implementations of standard traits such as Default, From etc etc

use super::{ConfigType, Options, TurtleOptions};
use crate::{
    TurtleError,
    surface::Color,
    turtle::{DEFAULT_PEN_SIZE, PenLine},
};
use glam::DVec3;

impl Default for TurtleOptions {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            pen_width: DEFAULT_PEN_SIZE,
            pen_height: DEFAULT_PEN_SIZE,
            pen_color: Color::WHITE,
            pen_line: PenLine::Box,
            pen_down: true,
        }
    }
}

/// Parse the value of `key`, naming both in the error
fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, TurtleError> {
    value.parse().map_err(|_| {
        TurtleError::InvalidParameter(format!("Invalid value for \"{key}\": \"{value}\""))
    })
}

impl Options for ConfigType {
    fn get_mandatory_parsed_option<T: std::str::FromStr>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, TurtleError> {
        match (self.get(key), default) {
            (Some(value), _) => parse_value(key, value),
            (None, Some(default)) => Ok(default),
            (None, None) => Err(TurtleError::MissingParameter(format!(
                "The mandatory parameter \"{key}\" was missing"
            ))),
        }
    }

    fn get_parsed_option<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>, TurtleError> {
        self.get(key)
            .map(|value| parse_value(key, value))
            .transpose()
    }
}
