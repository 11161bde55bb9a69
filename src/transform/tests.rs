// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

use super::{FrameOp, Transform};
use crate::test_util::{EPSILON, assert_approx_eq};
use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn test_identity() {
    let t = Transform::identity();
    let p = DVec3::new(1.0, -2.0, 3.5);
    assert_eq!(t.apply_to_point(p), p);
    assert_eq!(t.apply_to_direction(p), p);
    assert_eq!(Transform::default(), t);
}

#[test]
fn test_post_multiplied_order() {
    // translate first, then rotate inside the translated frame
    let mut t = Transform::identity();
    let _ = t.translate(DVec3::X).rotate_y(FRAC_PI_2);
    assert_approx_eq(
        t.apply_to_point(DVec3::Z),
        DVec3::new(2.0, 0.0, 0.0),
        EPSILON,
    );

    // rotate first, then translate along the rotated axis
    let mut t = Transform::identity();
    let _ = t.rotate_y(FRAC_PI_2).translate(DVec3::Z);
    assert_approx_eq(t.apply_to_point(DVec3::ZERO), DVec3::X, EPSILON);
}

#[test]
fn test_rotations_follow_turtle_convention() {
    // yaw, then pitch, applied to +Z gives the turtle direction formula
    let (yaw, pitch) = (0.7_f64, -0.3_f64);
    let mut t = Transform::identity();
    let _ = t.rotate_y(yaw).rotate_x(pitch);
    let expected = DVec3::new(
        yaw.sin() * pitch.cos(),
        -pitch.sin(),
        yaw.cos() * pitch.cos(),
    );
    assert_approx_eq(t.apply_to_direction(DVec3::Z), expected, EPSILON);

    let mut t = Transform::identity();
    let _ = t.rotate_z(FRAC_PI_2);
    assert_approx_eq(t.apply_to_direction(DVec3::X), DVec3::Y, EPSILON);
}

#[test]
fn test_direction_ignores_translation() {
    let mut t = Transform::identity();
    let _ = t.translate(DVec3::new(10.0, 20.0, 30.0));
    assert_eq!(t.apply_to_direction(DVec3::Y), DVec3::Y);
    assert_eq!(t.translation(), DVec3::new(10.0, 20.0, 30.0));
}

#[test]
fn test_rigid_inverse_matches_generic_inverse() {
    let mut t = Transform::identity();
    let _ = t
        .translate(DVec3::new(3.0, -1.0, 2.0))
        .rotate_y(1.1)
        .rotate_x(0.4)
        .rotate_z(PI / 3.0);

    let rigid = t.rigid_inverse();
    let generic = t.inverse().unwrap();
    assert!(rigid.abs_diff_eq(&generic, EPSILON), "{rigid:?} != {generic:?}");

    let p = DVec3::new(-4.0, 5.0, 0.25);
    assert_approx_eq(rigid.apply_to_point(t.apply_to_point(p)), p, EPSILON);
    assert!(t.compose(&rigid).abs_diff_eq(&Transform::IDENTITY, EPSILON));
}

#[test]
fn test_singular_inverse() {
    let mut t = Transform::identity();
    let _ = t.scale(1.0, 0.0, 1.0);
    assert!(t.inverse().is_none());

    let mut t = Transform::identity();
    let _ = t.scale(f64::MAX, f64::MAX, 0.0);
    assert!(t.inverse().is_none());

    // a tiny but regular scale is invertible
    let mut t = Transform::identity();
    let _ = t.scale(1e-6, 1e-6, 1e-6).translate(DVec3::ONE);
    let inverse = t.inverse().unwrap();
    assert_approx_eq(inverse.apply_to_point(t.apply_to_point(DVec3::X)), DVec3::X, 1e-9);

    let mut t = Transform::identity();
    let _ = t.scale(2.0, 4.0, 0.5);
    let inverse = t.inverse().unwrap();
    assert_approx_eq(
        inverse.apply_to_point(DVec3::new(2.0, 4.0, 0.5)),
        DVec3::ONE,
        EPSILON,
    );
}

#[test]
fn test_collect_from_frame_ops() {
    let ops = [
        FrameOp::Translate(DVec3::new(0.0, 1.0, 0.0)),
        FrameOp::RotateY(0.5),
        FrameOp::RotateX(0.25),
        FrameOp::RotateZ(0.125),
    ];
    let collected: Transform = ops.iter().collect();

    let mut chained = Transform::identity();
    let _ = chained
        .translate(DVec3::new(0.0, 1.0, 0.0))
        .rotate_y(0.5)
        .rotate_x(0.25)
        .rotate_z(0.125);
    assert!(collected.abs_diff_eq(&chained, EPSILON));

    let outer = Transform::from(ops[0]);
    let inner: Transform = ops[1..].iter().collect();
    assert!((outer * inner).abs_diff_eq(&chained, EPSILON));
}

#[test]
fn test_reset() {
    let mut t = Transform::identity();
    let _ = t.translate(DVec3::ONE).rotate_x(1.0);
    assert_ne!(t, Transform::IDENTITY);
    let _ = t.reset();
    assert_eq!(t, Transform::IDENTITY);
    assert_eq!(t.to_mat4(), glam::DMat4::IDENTITY);
}
