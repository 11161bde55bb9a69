// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

use super::{Frame, PenLine, Turtle, normalize_angle};
use crate::{
    TurtleError,
    surface::Color,
    test_util::{EPSILON, assert_approx_eq},
    transform::FrameOp,
};
use glam::DVec3;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn test_normalize_angle() {
    let mut rng: StdRng = SeedableRng::from_seed([42; 32]);
    for _i in 0..1000 {
        let a = rng.random_range(-100_f64..100.0);
        let k = rng.random_range(-100_f64..100.0);
        let n = normalize_angle(a + k);
        assert!((0.0..TAU).contains(&n), "{n} not in [0, 2π)");
        assert_eq!(normalize_angle(n), n);
    }
    assert_eq!(normalize_angle(TAU), 0.0);
    assert_approx_eq(normalize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2, EPSILON);
    assert_eq!(normalize_angle(-1e-20), 0.0);
    assert!(normalize_angle(-0.0).is_sign_positive());
}

#[test]
fn test_default_turtle() {
    let turtle = Turtle::new();
    assert_eq!(turtle.position(), DVec3::ZERO);
    assert_eq!((turtle.yaw(), turtle.pitch(), turtle.spin()), (0.0, 0.0, 0.0));
    assert!(turtle.is_pen_down());
    assert_eq!(turtle.pen_line(), PenLine::Box);
    assert_eq!(turtle.pen_color(), Color::WHITE);
    assert_eq!((turtle.pen_width(), turtle.pen_height()), (1.0, 1.0));
    assert!(turtle.parent().is_none());
    assert!(turtle.child().is_none());
    assert_approx_eq(turtle.direction(), DVec3::Z, EPSILON);
}

#[test]
fn test_invalid_values_leave_state_unchanged() -> Result<(), TurtleError> {
    let mut turtle = Turtle::at(DVec3::new(1.0, 2.0, 3.0))?;
    let _ = turtle.set_yaw(1.0)?.set_pen_size(4.0)?;

    assert!(matches!(
        turtle.set_yaw(f64::NAN),
        Err(TurtleError::InvalidAngle(_))
    ));
    assert!(matches!(
        turtle.pitch_by(f64::INFINITY),
        Err(TurtleError::InvalidAngle(_))
    ));
    assert!(matches!(
        turtle.set_x(f64::NEG_INFINITY),
        Err(TurtleError::InvalidCoordinate(_))
    ));
    assert!(matches!(
        turtle.set_position(DVec3::new(0.0, f64::NAN, 0.0)),
        Err(TurtleError::InvalidCoordinate(_))
    ));
    assert!(matches!(
        turtle.set_pen_size(-1.0),
        Err(TurtleError::InvalidPenSize(_))
    ));
    assert!(turtle.set_pen_height(f64::INFINITY).is_err());
    assert!(turtle.rotate_by(0.5, f64::NAN, 0.5).is_err());

    assert_eq!(turtle.yaw(), 1.0);
    assert_eq!(turtle.pitch(), 0.0);
    assert_eq!(turtle.spin(), 0.0);
    assert_eq!(turtle.position(), DVec3::new(1.0, 2.0, 3.0));
    assert_eq!((turtle.pen_width(), turtle.pen_height()), (4.0, 4.0));
    assert!(Turtle::at(DVec3::INFINITY).is_err());
    Ok(())
}

#[test]
fn test_angle_setters_normalize() -> Result<(), TurtleError> {
    let mut turtle = Turtle::new();
    let _ = turtle.set_yaw(-FRAC_PI_2)?.pitch_by(3.0 * TAU + 1.0)?.spin_by(-TAU)?;
    assert_approx_eq(turtle.yaw(), 3.0 * FRAC_PI_2, EPSILON);
    assert_approx_eq(turtle.pitch(), 1.0, EPSILON);
    assert_eq!(turtle.spin(), 0.0);

    let _ = turtle.rotate_by(PI, PI, PI)?;
    assert_approx_eq(turtle.yaw(), FRAC_PI_2, EPSILON);
    assert_approx_eq(turtle.pitch(), 1.0 + PI, EPSILON);
    assert_approx_eq(turtle.spin(), PI, EPSILON);
    Ok(())
}

#[test]
fn test_direction_is_unit() -> Result<(), TurtleError> {
    let mut rng: StdRng = SeedableRng::from_seed([7; 32]);
    let mut turtle = Turtle::new();
    for _i in 0..1000 {
        let _ = turtle
            .set_yaw(rng.random_range(-10_f64..10.0))?
            .set_pitch(rng.random_range(-10_f64..10.0))?;
        assert_approx_eq(turtle.direction().length(), 1.0, EPSILON);
    }
    Ok(())
}

#[test]
fn test_face_along_x() -> Result<(), TurtleError> {
    let mut turtle = Turtle::new();
    let _ = turtle.face(DVec3::new(1.0, 0.0, 0.0))?;
    assert_approx_eq(turtle.yaw(), FRAC_PI_2, EPSILON);
    assert_approx_eq(turtle.pitch(), 0.0, EPSILON);
    assert_approx_eq(turtle.direction(), DVec3::X, EPSILON);
    Ok(())
}

#[test]
fn test_face_random_targets() -> Result<(), TurtleError> {
    let mut rng: StdRng = SeedableRng::from_seed([3; 32]);
    let mut turtle = Turtle::at(DVec3::new(5.0, -2.0, 1.0))?;
    for _i in 0..1000 {
        let target = DVec3::new(
            rng.random_range(-50_f64..50.0),
            rng.random_range(-50_f64..50.0),
            rng.random_range(-50_f64..50.0),
        );
        let _ = turtle.face(target)?;
        let expected = (target - turtle.position()).normalize();
        assert_approx_eq(turtle.direction().dot(expected), 1.0, 1e-9);
    }

    // straight up and straight down have no horizontal component
    let _ = turtle.face(turtle.position() - DVec3::Y)?;
    assert_approx_eq(turtle.direction(), -DVec3::Y, EPSILON);
    let _ = turtle.face(turtle.position() + DVec3::Y)?;
    assert_approx_eq(turtle.direction(), DVec3::Y, EPSILON);
    Ok(())
}

#[test]
fn test_face_own_position() -> Result<(), TurtleError> {
    let mut turtle = Turtle::at(DVec3::new(1.0, 1.0, 1.0))?;
    let _ = turtle.set_yaw(0.3)?.set_pitch(0.2)?;
    let _ = turtle.face(DVec3::new(1.0, 1.0, 1.0))?;
    assert_eq!((turtle.yaw(), turtle.pitch()), (0.3, 0.2));

    let _ = turtle.set_direction(DVec3::ZERO)?;
    assert_eq!((turtle.yaw(), turtle.pitch()), (0.3, 0.2));

    assert!(matches!(
        turtle.face(DVec3::new(f64::NAN, 0.0, 0.0)),
        Err(TurtleError::InvalidCoordinate(_))
    ));
    assert_eq!((turtle.yaw(), turtle.pitch()), (0.3, 0.2));
    Ok(())
}

#[test]
fn test_set_direction_far_from_origin() -> Result<(), TurtleError> {
    let mut turtle = Turtle::at(DVec3::new(1e17, 0.0, 0.0))?;
    let _ = turtle.set_direction(DVec3::X)?;
    assert_approx_eq(turtle.yaw(), FRAC_PI_2, EPSILON);
    assert_approx_eq(turtle.direction(), DVec3::X, EPSILON);

    let _ = turtle.set_direction(DVec3::new(0.0, 0.0, 1e-9))?;
    assert_approx_eq(turtle.direction(), DVec3::Z, EPSILON);

    let _ = turtle.add_directions(&[DVec3::X * 2.0])?;
    assert_approx_eq(
        turtle.direction(),
        DVec3::new(2.0, 0.0, 1.0).normalize(),
        EPSILON,
    );
    Ok(())
}

#[test]
fn test_add_directions() -> Result<(), TurtleError> {
    let mut turtle = Turtle::new();
    let _ = turtle.add_directions(&[DVec3::X])?;
    assert_approx_eq(
        turtle.direction(),
        DVec3::new(1.0, 0.0, 1.0).normalize(),
        EPSILON,
    );

    let _ = turtle.set_direction(DVec3::new(0.0, 0.0, 3.0))?;
    assert_approx_eq(turtle.direction(), DVec3::Z, EPSILON);

    // the direction is cancelled out completely
    let yaw = turtle.yaw();
    assert!(matches!(
        turtle.add_directions(&[-DVec3::Z * 0.5, -DVec3::Z * 0.5]),
        Err(TurtleError::InvalidState(_))
    ));
    assert_eq!(turtle.yaw(), yaw);
    assert_approx_eq(turtle.direction(), DVec3::Z, EPSILON);
    Ok(())
}

#[test]
fn test_local_transform() -> Result<(), TurtleError> {
    let mut turtle = Turtle::at(DVec3::new(1.0, 2.0, 3.0))?;
    let _ = turtle.set_yaw(0.4)?.set_pitch(-0.7)?.set_spin(2.0)?;

    assert_eq!(turtle.frame_ops(Frame::Full).len(), 4);
    assert_eq!(
        turtle.frame_ops(Frame::TranslationOnly).as_slice(),
        &[FrameOp::Translate(DVec3::new(1.0, 2.0, 3.0))]
    );
    assert_eq!(turtle.frame_ops(Frame::RotationOnly).len(), 3);

    let full = turtle.local_transform(Frame::Full);
    assert_approx_eq(full.apply_to_point(DVec3::ZERO), turtle.position(), EPSILON);
    assert_approx_eq(
        full.apply_to_direction(DVec3::Z),
        turtle.direction(),
        EPSILON,
    );
    let rotation = turtle.local_transform(Frame::RotationOnly);
    assert_approx_eq(rotation.apply_to_point(DVec3::ZERO), DVec3::ZERO, EPSILON);
    Ok(())
}

#[test]
fn test_detached_copy() -> Result<(), TurtleError> {
    let mut turtle = Turtle::at(DVec3::ONE)?;
    let _ = turtle
        .set_yaw(1.0)?
        .set_spin(2.0)?
        .set_pen_width(3.0)?
        .set_pen_color(Color::RED)
        .set_pen_line(PenLine::Line)
        .toggle_pen();
    let copy = turtle.detached_copy();
    assert_eq!(copy.position(), DVec3::ONE);
    assert_eq!((copy.yaw(), copy.spin()), (1.0, 2.0));
    assert_eq!(copy.pen_width(), 3.0);
    assert_eq!(copy.pen_color(), Color::RED);
    assert_eq!(copy.pen_line(), PenLine::Line);
    assert!(!copy.is_pen_down());

    let mut other = Turtle::new();
    let _ = other.inherit_style(&turtle);
    assert_eq!(other.pen_width(), 3.0);
    assert_eq!(other.pen_color(), Color::RED);
    assert_eq!(other.pen_line(), PenLine::Box);
    Ok(())
}

#[test]
fn test_pen_line_parse() -> Result<(), TurtleError> {
    assert_eq!("Line".parse::<PenLine>()?, PenLine::Line);
    assert_eq!(" box ".parse::<PenLine>()?, PenLine::Box);
    assert_eq!(PenLine::Line.to_string(), "line");
    assert!("circle".parse::<PenLine>().is_err());
    Ok(())
}
