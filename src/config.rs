// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! Turtle configuration from plain string key/value maps.

mod impls;

use crate::{
    TurtleError,
    surface::Color,
    turtle::{PenLine, Turtle, validate_pen_size, validate_position},
};
use glam::DVec3;
use std::collections::HashMap;

pub type ConfigType = HashMap<String, String>;

pub const X_TAG: &str = "x";
pub const Y_TAG: &str = "y";
pub const Z_TAG: &str = "z";
pub const PEN_SIZE_TAG: &str = "pen_size";
pub const PEN_WIDTH_TAG: &str = "pen_width";
pub const PEN_HEIGHT_TAG: &str = "pen_height";
pub const PEN_COLOR_TAG: &str = "pen_color";
pub const PEN_LINE_TAG: &str = "pen_line";
pub const PEN_DOWN_TAG: &str = "pen_down";

/// Typed lookups in a string key/value map
pub trait Options {
    /// The value of `key` parsed as a `T`. A missing key falls back to `default`, and is an
    /// error if there is none.
    fn get_mandatory_parsed_option<T: std::str::FromStr>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, TurtleError>;

    /// The value of `key` parsed as a `T`, `None` if the key is missing. A value that does not
    /// parse is an error.
    fn get_parsed_option<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>, TurtleError>;
}

/// The initial state of a root turtle
#[derive(Debug, Clone, PartialEq)]
pub struct TurtleOptions {
    pub position: DVec3,
    pub pen_width: f64,
    pub pen_height: f64,
    pub pen_color: Color,
    pub pen_line: PenLine,
    pub pen_down: bool,
}

impl TurtleOptions {
    /// Read the options from `config`, missing keys keep their default value.
    ///
    /// `pen_size` sets both width and height, `pen_width` and `pen_height` take precedence over it.
    pub fn from_config(config: &ConfigType) -> Result<Self, TurtleError> {
        let defaults = Self::default();
        let pen_size = config
            .get_parsed_option::<f64>(PEN_SIZE_TAG)?
            .map(validate_pen_size)
            .transpose()?;
        let options = Self {
            position: DVec3::new(
                config.get_mandatory_parsed_option(X_TAG, Some(defaults.position.x))?,
                config.get_mandatory_parsed_option(Y_TAG, Some(defaults.position.y))?,
                config.get_mandatory_parsed_option(Z_TAG, Some(defaults.position.z))?,
            ),
            pen_width: config
                .get_parsed_option(PEN_WIDTH_TAG)?
                .or(pen_size)
                .unwrap_or(defaults.pen_width),
            pen_height: config
                .get_parsed_option(PEN_HEIGHT_TAG)?
                .or(pen_size)
                .unwrap_or(defaults.pen_height),
            pen_color: config
                .get_parsed_option(PEN_COLOR_TAG)?
                .unwrap_or(defaults.pen_color),
            pen_line: config
                .get_parsed_option(PEN_LINE_TAG)?
                .unwrap_or(defaults.pen_line),
            pen_down: config
                .get_parsed_option(PEN_DOWN_TAG)?
                .unwrap_or(defaults.pen_down),
        };
        options.validate()?;
        Ok(options)
    }

    /// Check the values with the same rules the turtle setters use
    pub fn validate(&self) -> Result<(), TurtleError> {
        let _ = validate_position(self.position)?;
        let _ = validate_pen_size(self.pen_width)?;
        let _ = validate_pen_size(self.pen_height)?;
        Ok(())
    }

    /// A new root turtle in this state
    pub fn build(&self) -> Result<Turtle, TurtleError> {
        let mut turtle = Turtle::at(self.position)?;
        let _ = turtle
            .set_pen_width(self.pen_width)?
            .set_pen_height(self.pen_height)?
            .set_pen_color(self.pen_color)
            .set_pen_line(self.pen_line)
            .set_pen_down(self.pen_down);
        Ok(turtle)
    }
}
