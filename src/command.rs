// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! Turtle actions as data, for driving a turtle from a token stream such as an expanded
//! L-system string.


use crate::{
    TurtleError,
    surface::DrawingSurface,
    terrarium::{Terrarium, TurtleId},
};
use glam::DVec3;

/// All angles are increments, in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurtleCommand {
    Nop,
    Forward(f64),
    /// Draw as if moving forward, without moving
    ForwardProject(f64),
    Yaw(f64),
    Pitch(f64),
    Spin(f64),
    /// yaw, pitch, spin
    Rotate(f64, f64, f64),
    PenUp,
    PenDown,
    TogglePen,
    MoveTo(DVec3),
    Face(DVec3),
    /// A dot of the given radius, or of the default radius
    Dot(Option<f64>),
    /// An orientation marker of the given radius, or of the default radius
    Mark(Option<f64>),
}

impl<S: DrawingSurface> Terrarium<S> {
    /// Apply a turtle command
    pub fn apply(&mut self, id: TurtleId, command: &TurtleCommand) -> Result<(), TurtleError> {
        match *command {
            TurtleCommand::Nop => {
                let _ = self.turtle(id)?;
            }
            TurtleCommand::Forward(distance) => self.forward(id, distance)?,
            TurtleCommand::ForwardProject(distance) => self.forward_project(id, distance)?,
            TurtleCommand::Yaw(angle) => {
                let _ = self.turtle_mut(id)?.yaw_by(angle)?;
            }
            TurtleCommand::Pitch(angle) => {
                let _ = self.turtle_mut(id)?.pitch_by(angle)?;
            }
            TurtleCommand::Spin(angle) => {
                let _ = self.turtle_mut(id)?.spin_by(angle)?;
            }
            TurtleCommand::Rotate(yaw, pitch, spin) => {
                let _ = self.turtle_mut(id)?.rotate_by(yaw, pitch, spin)?;
            }
            TurtleCommand::PenUp => {
                let _ = self.turtle_mut(id)?.set_pen_down(false);
            }
            TurtleCommand::PenDown => {
                let _ = self.turtle_mut(id)?.set_pen_down(true);
            }
            TurtleCommand::TogglePen => {
                let _ = self.turtle_mut(id)?.toggle_pen();
            }
            TurtleCommand::MoveTo(target) => self.move_to(id, target)?,
            TurtleCommand::Face(target) => self.face(id, target)?,
            TurtleCommand::Dot(Some(radius)) => self.dot(id, radius)?,
            TurtleCommand::Dot(None) => self.dot_default(id)?,
            TurtleCommand::Mark(Some(radius)) => self.mark(id, radius)?,
            TurtleCommand::Mark(None) => self.mark_default(id)?,
        };
        Ok(())
    }

    /// Apply the commands in order. The first failing command stops the sequence, the commands
    /// before it stay applied.
    pub fn apply_all<'a, I>(&mut self, id: TurtleId, commands: I) -> Result<usize, TurtleError>
    where
        I: IntoIterator<Item = &'a TurtleCommand>,
    {
        let mut applied = 0_usize;
        for command in commands {
            self.apply(id, command).inspect_err(|err| {
                log::debug!("turtle {id:?} stopped at command #{applied} {command:?}: {err}");
            })?;
            applied += 1;
        }
        Ok(applied)
    }
}
