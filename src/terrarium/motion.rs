// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! Turtle operations that may draw on the surface.
//!
//! Every drawing operation validates its input first, then pushes the surface transform, draws
//! and pops. Nothing is pushed when the pen is up.

use super::{Terrarium, TurtleId, chain::replay};
use crate::{
    TurtleError,
    surface::{Color, DrawingSurface},
    transform::FrameOp,
    turtle::{Frame, PenLine, Turtle, validate_coordinate, validate_pen_size, validate_position},
};
use glam::DVec3;
use std::f64::consts::FRAC_PI_2;

/// Radius of `dot_default()` and `mark_default()`, relative to the pen width
const DEFAULT_RADIUS_FACTOR: f64 = 1.5;

/// The pen attributes needed to draw a forward step
#[derive(Debug, Clone, Copy)]
struct Stroke {
    line: PenLine,
    color: Color,
    width: f64,
    height: f64,
}

impl From<&Turtle> for Stroke {
    fn from(turtle: &Turtle) -> Self {
        Self {
            line: turtle.pen_line(),
            color: turtle.pen_color(),
            width: turtle.pen_width(),
            height: turtle.pen_height(),
        }
    }
}

impl<S: DrawingSurface> Terrarium<S> {
    /// Draw a step of length `distance` along local +Z, inside the frame given by `ops`
    fn draw_stroke(&mut self, ops: &[FrameOp], stroke: Stroke, distance: f64) {
        self.surface.scoped(|surface| {
            replay(surface, ops);
            match stroke.line {
                PenLine::Box => {
                    surface.set_fill_color(stroke.color);
                    // boxes are drawn around their center
                    surface.translate(0.0, 0.0, distance / 2.0);
                    surface.scale(stroke.width, stroke.height, distance);
                    surface.draw_box(1.0, 1.0, 1.0);
                }
                PenLine::Line => {
                    surface.set_stroke_color(stroke.color);
                    surface.set_stroke_weight(stroke.width);
                    surface.draw_line(DVec3::ZERO, DVec3::new(0.0, 0.0, distance));
                }
            }
        });
    }

    /// Move `distance` along the current direction, drawing if the pen is down.
    pub fn forward(&mut self, id: TurtleId, distance: f64) -> Result<(), TurtleError> {
        let distance = validate_coordinate(distance)?;
        let turtle = self.turtle(id)?;
        let destination = validate_position(turtle.position() + turtle.direction() * distance)?;
        self.forward_project(id, distance)?;
        let _ = self.turtle_mut(id)?.set_position(destination)?;
        Ok(())
    }

    /// Draw as if moving forward by `distance`, but stay in place.
    pub fn forward_project(&mut self, id: TurtleId, distance: f64) -> Result<(), TurtleError> {
        let distance = validate_coordinate(distance)?;
        let turtle = self.turtle(id)?;
        if !turtle.is_pen_down() {
            return Ok(());
        }
        let stroke = Stroke::from(turtle);
        let ops = self.chain_ops(id, turtle, Frame::Full)?;
        log::trace!("turtle {id:?} draws a {} of length {distance}", stroke.line);
        self.draw_stroke(&ops, stroke, distance);
        Ok(())
    }

    /// Move straight to `target`, drawing if the pen is down.
    ///
    /// The turtle only faces `target` while drawing, its orientation is not changed. The final
    /// position is exactly `target`.
    pub fn move_to(&mut self, id: TurtleId, target: DVec3) -> Result<(), TurtleError> {
        let target = validate_position(target)?;
        let turtle = self.turtle(id)?;
        let distance = validate_coordinate(turtle.position().distance(target))?;
        if turtle.is_pen_down() {
            let mut facing = turtle.detached_copy();
            let _ = facing.face(target)?;
            let stroke = Stroke::from(turtle);
            let ops = self.chain_ops(id, &facing, Frame::Full)?;
            log::trace!("turtle {id:?} draws a {} to {target}", stroke.line);
            self.draw_stroke(&ops, stroke, distance);
        }
        let _ = self.turtle_mut(id)?.set_position(target)?;
        Ok(())
    }

    /// Like [`Self::move_to`], keeping the current z coordinate
    pub fn move_to_xy(&mut self, id: TurtleId, x: f64, y: f64) -> Result<(), TurtleError> {
        let z = self.turtle(id)?.z();
        self.move_to(id, DVec3::new(x, y, z))
    }

    /// Turn turtle `id` towards `target`, see [`Turtle::face`]
    pub fn face(&mut self, id: TurtleId, target: DVec3) -> Result<(), TurtleError> {
        let _ = self.turtle_mut(id)?.face(target)?;
        Ok(())
    }

    /// Like [`Self::face`], keeping the current z coordinate
    pub fn face_xy(&mut self, id: TurtleId, x: f64, y: f64) -> Result<(), TurtleError> {
        let turtle = self.turtle_mut(id)?;
        let z = turtle.z();
        let _ = turtle.face(DVec3::new(x, y, z))?;
        Ok(())
    }

    pub fn set_direction(&mut self, id: TurtleId, direction: DVec3) -> Result<(), TurtleError> {
        let _ = self.turtle_mut(id)?.set_direction(direction)?;
        Ok(())
    }

    pub fn add_directions(
        &mut self,
        id: TurtleId,
        directions: &[DVec3],
    ) -> Result<(), TurtleError> {
        let _ = self.turtle_mut(id)?.add_directions(directions)?;
        Ok(())
    }

    /// Draw a sphere at the turtle's position, if the pen is down
    pub fn dot(&mut self, id: TurtleId, radius: f64) -> Result<(), TurtleError> {
        let radius = validate_pen_size(radius)?;
        let turtle = self.turtle(id)?;
        if !turtle.is_pen_down() {
            return Ok(());
        }
        let color = turtle.pen_color();
        let ops = self.chain_ops(id, turtle, Frame::Full)?;
        log::trace!("turtle {id:?} draws a dot of radius {radius}");
        self.surface.scoped(|surface| {
            replay(surface, &ops);
            surface.set_fill_color(color);
            surface.draw_sphere(radius);
        });
        Ok(())
    }

    /// A dot three times as wide as the pen
    pub fn dot_default(&mut self, id: TurtleId) -> Result<(), TurtleError> {
        let radius = DEFAULT_RADIUS_FACTOR * self.turtle(id)?.pen_width();
        self.dot(id, radius)
    }

    /// Draw an orientation marker at the turtle's position: a red circle in the yaw plane with
    /// a radius pointing along the yaw, and a green circle in the pitch plane with a white radius
    /// pointing along the pitch.
    ///
    /// The marker is an overlay and is drawn regardless of the pen state.
    pub fn mark(&mut self, id: TurtleId, radius: f64) -> Result<(), TurtleError> {
        let radius = validate_pen_size(radius)?;
        let turtle = self.turtle(id)?;
        let (yaw, pitch) = (turtle.yaw(), turtle.pitch());
        let ops = self.chain_ops(id, turtle, Frame::TranslationOnly)?;
        let tip = DVec3::new(0.0, radius, 0.0);
        log::trace!("turtle {id:?} draws a mark of radius {radius}");
        self.surface.scoped(|surface| {
            replay(surface, &ops);
            surface.no_fill();
            surface.set_stroke_weight(2.0);

            // yaw plane
            surface.rotate_y(yaw);
            surface.rotate_x(FRAC_PI_2);
            surface.set_stroke_color(Color::RED.with_alpha(127));
            surface.draw_circle(2.0 * radius);
            surface.set_stroke_color(Color::RED);
            surface.draw_line(DVec3::ZERO, tip);

            // pitch plane
            surface.rotate_y(FRAC_PI_2);
            surface.set_stroke_color(Color::GREEN.with_alpha(127));
            surface.draw_circle(2.0 * radius);
            surface.rotate_z(pitch);
            surface.set_stroke_color(Color::WHITE);
            surface.draw_line(DVec3::ZERO, tip);
        });
        Ok(())
    }

    /// A mark three times as wide as the pen
    pub fn mark_default(&mut self, id: TurtleId) -> Result<(), TurtleError> {
        let radius = DEFAULT_RADIUS_FACTOR * self.turtle(id)?.pen_width();
        self.mark(id, radius)
    }

    /// Add a new root turtle with the position, orientation and pen of `id`, but no links.
    pub fn clone_turtle(&mut self, id: TurtleId) -> Result<TurtleId, TurtleError> {
        let copy = self.turtle(id)?.detached_copy();
        let copy_id = self.turtles.insert(copy);
        log::debug!("cloned turtle {id:?} into {copy_id:?}");
        Ok(copy_id)
    }

    /// Move `id` to the position of `reference` (drawing if the pen is down) and copy its yaw
    /// and pitch. Coordinates are copied as is, without any context conversion.
    pub fn imitate(&mut self, id: TurtleId, reference: TurtleId) -> Result<(), TurtleError> {
        let reference = self.turtle(reference)?;
        let (position, yaw, pitch) = (reference.position(), reference.yaw(), reference.pitch());
        // fail before drawing if `id` is unknown
        let _ = self.turtle(id)?;
        self.move_to(id, position)?;
        let _ = self.turtle_mut(id)?.set_yaw(yaw)?.set_pitch(pitch)?;
        Ok(())
    }
}
