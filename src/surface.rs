// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! The drawing surface a turtle renders onto.
//!
//! The turtle does not rasterize anything itself, it only sets up the surface transform and asks
//! for primitives. [`RecordingSurface`] is a surface that keeps a real transform stack and
//! records everything it is asked to do, which makes it useful for exporting the drawn geometry
//! as line segments and for inspecting what a turtle emitted.

mod impls;

use crate::transform::Transform;
use glam::DVec3;

/// A packed 32 bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// An opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The same color with another alpha value
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.0 & 0x00FF_FFFF | (a as u32) << 24)
    }
}

/// The capabilities a turtle needs from whatever it draws on.
///
/// Transform calls are post-multiplied onto the active transform, like the
/// `push()/translate()/rotate()/pop()` API of most immediate mode 3D canvases. Angles are in
/// radians.
pub trait DrawingSurface {
    /// Save the active transform
    fn push_transform(&mut self);
    /// Restore the most recently saved transform
    fn pop_transform(&mut self);

    fn translate(&mut self, x: f64, y: f64, z: f64);
    fn rotate_y(&mut self, rad: f64);
    fn rotate_x(&mut self, rad: f64);
    fn rotate_z(&mut self, rad: f64);
    fn scale(&mut self, sx: f64, sy: f64, sz: f64);

    fn set_fill_color(&mut self, color: Color);
    /// Disable filling of subsequent primitives
    fn no_fill(&mut self);
    fn set_stroke_color(&mut self, color: Color);
    fn set_stroke_weight(&mut self, width: f64);

    /// A box centered on the local origin
    fn draw_box(&mut self, w: f64, h: f64, d: f64);
    fn draw_sphere(&mut self, radius: f64);
    fn draw_line(&mut self, from: DVec3, to: DVec3);
    /// A circle in the local XY plane, centered on the origin
    fn draw_circle(&mut self, diameter: f64);

    /// Run `f` between a push and a pop of the active transform.
    fn scoped<F: FnOnce(&mut Self)>(&mut self, f: F)
    where
        Self: Sized,
    {
        self.push_transform();
        f(self);
        self.pop_transform();
    }
}

/// Everything a [`RecordingSurface`] was asked to do, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    PushTransform,
    PopTransform,
    Translate(DVec3),
    RotateY(f64),
    RotateX(f64),
    RotateZ(f64),
    Scale(DVec3),
    FillColor(Color),
    NoFill,
    StrokeColor(Color),
    StrokeWeight(f64),
    Box(DVec3),
    Sphere(f64),
    Line(DVec3, DVec3),
    Circle(f64),
}

impl SurfaceCall {
    /// Returns true if this call emits a primitive
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            SurfaceCall::Box(_) | SurfaceCall::Sphere(_) | SurfaceCall::Line(..) | SurfaceCall::Circle(_)
        )
    }
}

/// A surface that tracks its transform stack and keeps a log of every call.
///
/// Lines, and the center axis of every box, are also collected as world space segments. Spheres
/// are collected as world space (center, radius) pairs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    current: Transform,
    stack: Vec<Transform>,
    segments: Vec<[DVec3; 2]>,
    spheres: Vec<(DVec3, f64)>,
    unbalanced_pops: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// World space line segments emitted so far
    pub fn segments(&self) -> &[[DVec3; 2]] {
        &self.segments
    }

    /// World space sphere centers and radii emitted so far
    pub fn spheres(&self) -> &[(DVec3, f64)] {
        &self.spheres
    }

    /// The transform that would apply to a primitive drawn right now
    pub fn current_transform(&self) -> &Transform {
        &self.current
    }

    /// Number of currently open pushes
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True when every push has been matched by exactly one pop
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.unbalanced_pops == 0
    }

    pub fn draw_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_draw()).count()
    }

    /// Forget all recorded calls and geometry. The transform stack is left as is.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.segments.clear();
        self.spheres.clear();
    }

    fn push_segment(&mut self, from: DVec3, to: DVec3) {
        self.segments.push([
            self.current.apply_to_point(from),
            self.current.apply_to_point(to),
        ]);
    }
}

impl DrawingSurface for RecordingSurface {
    fn push_transform(&mut self) {
        self.calls.push(SurfaceCall::PushTransform);
        self.stack.push(self.current);
    }

    fn pop_transform(&mut self) {
        self.calls.push(SurfaceCall::PopTransform);
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
        } else {
            log::warn!("pop_transform() called on an empty transform stack");
            self.unbalanced_pops += 1;
        }
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) {
        let v = DVec3::new(x, y, z);
        self.calls.push(SurfaceCall::Translate(v));
        let _ = self.current.translate(v);
    }

    fn rotate_y(&mut self, rad: f64) {
        self.calls.push(SurfaceCall::RotateY(rad));
        let _ = self.current.rotate_y(rad);
    }

    fn rotate_x(&mut self, rad: f64) {
        self.calls.push(SurfaceCall::RotateX(rad));
        let _ = self.current.rotate_x(rad);
    }

    fn rotate_z(&mut self, rad: f64) {
        self.calls.push(SurfaceCall::RotateZ(rad));
        let _ = self.current.rotate_z(rad);
    }

    fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.calls.push(SurfaceCall::Scale(DVec3::new(sx, sy, sz)));
        let _ = self.current.scale(sx, sy, sz);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(SurfaceCall::FillColor(color));
    }

    fn no_fill(&mut self) {
        self.calls.push(SurfaceCall::NoFill);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(SurfaceCall::StrokeColor(color));
    }

    fn set_stroke_weight(&mut self, width: f64) {
        self.calls.push(SurfaceCall::StrokeWeight(width));
    }

    fn draw_box(&mut self, w: f64, h: f64, d: f64) {
        self.calls.push(SurfaceCall::Box(DVec3::new(w, h, d)));
        self.push_segment(DVec3::new(0.0, 0.0, -0.5 * d), DVec3::new(0.0, 0.0, 0.5 * d));
    }

    fn draw_sphere(&mut self, radius: f64) {
        self.calls.push(SurfaceCall::Sphere(radius));
        self.spheres
            .push((self.current.apply_to_point(DVec3::ZERO), radius));
    }

    fn draw_line(&mut self, from: DVec3, to: DVec3) {
        self.calls.push(SurfaceCall::Line(from, to));
        self.push_segment(from, to);
    }

    fn draw_circle(&mut self, diameter: f64) {
        self.calls.push(SurfaceCall::Circle(diameter));
    }
}
