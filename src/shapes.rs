//! Path-tracing generators: primitives (polygon, triangle, circle,
//! diamond) and the composites built on top of them.
//!
//! Every generator leaves color, speed, visibility and pen modes as it
//! found them. The closed shapes also return to their starting pose; the
//! spiral is the only one expected to drift.

use crate::checks::*;
use crate::color::Color;
use crate::cursor::finish;
use crate::cursor::Cursor;
use crate::cursor::Float;
use crate::cursor::StyleGuard;

use core::f64::consts::PI;

#[allow(unused_imports)]
use num_traits::real::Real;

/// Target length of one circle step.
pub const CIRCLE_STEP_LENGTH: Float = 10.0;

pub const HEXAGON_COLOR: Color = Color::CYAN;
pub const CIRCLE_COLOR: Color = Color::RED;
pub const SPIRAL_COLORS: [Color; 3] = [Color::BLUE, Color::MAGENTA, Color::RED];
pub const ROSETTE_COLORS: [Color; 2] = [Color::BLUE, Color::ORANGE];

/// `n` times: forward `side`, then turn `exterior` degrees (positive = left).
fn trace_regular<C: Cursor + ?Sized>(cursor: &mut C, side: Float, n: u32, exterior: Float) {
    for _ in 0..n {
        cursor.forward(side);
        cursor.left(exterior);
    }
}

/// Clockwise equilateral triangle, as used by [`triangle`] and [`hexagon`].
fn trace_triangle<C: Cursor + ?Sized>(cursor: &mut C, side: Float) {
    trace_regular(cursor, side, 3, -120.0);
}

/// Number of steps used to approximate a circle of this circumference.
pub fn circle_steps(circumference: Float) -> u32 {
    let steps = (circumference / CIRCLE_STEP_LENGTH).floor() as u32;
    match circumference > 0.0 {
        // floor(c / 10) is 0, 1 or 2 for small radii; a closed path needs three sides
        true => steps.max(3),
        false => 0,
    }
}

/// Regular polygon of `n >= 1` sides, turning left.
///
/// The color is left to the caller. For `n >= 2` the path closes and
/// position and heading come back to their initial values; a single side
/// is one forward move followed by a full turn.
pub fn polygon<C: Cursor + ?Sized>(cursor: &mut C, side: Float, n: u32) -> DrawResult<()> {
    check_turtle(cursor)?;
    check_length("side", side)?;
    check_sides(n, 1)?;

    trace_regular(cursor, side, n, 360.0 / (n as Float));
    Ok(())
}

/// Equilateral triangle of side `side` in color `color`.
///
/// Facing west, the triangle points up and the cursor starts and ends at
/// the east end of its base.
pub fn triangle<C: Cursor + ?Sized>(cursor: &mut C, side: Float, color: Color) -> DrawResult<()> {
    check_turtle(cursor)?;
    check_length("side", side)?;
    check_color(color)?;

    {
        let mut pen = StyleGuard::new(cursor);
        pen.set_color(color);
        trace_triangle(&mut *pen, side);
    }

    finish(cursor);
    Ok(())
}

/// Six cyan triangles around the cursor, tiling a hexagon centered on
/// the starting position.
pub fn hexagon<C: Cursor + ?Sized>(cursor: &mut C, side: Float) -> DrawResult<()> {
    check_turtle(cursor)?;
    check_length("side", side)?;

    {
        let mut pen = StyleGuard::new(cursor);
        pen.set_color(HEXAGON_COLOR);
        for _ in 0..6 {
            trace_triangle(&mut *pen, side);
            pen.left(60.0);
        }
    }

    finish(cursor);
    Ok(())
}

/// Red circle of radius `radius`, approximated by a regular polygon
/// whose sides are close to [`CIRCLE_STEP_LENGTH`].
///
/// The cursor travels counter-clockwise, so the circle lies on its left.
/// A zero radius draws nothing.
pub fn circle<C: Cursor + ?Sized>(cursor: &mut C, radius: Float) -> DrawResult<()> {
    check_turtle(cursor)?;
    check_length("radius", radius)?;

    let circumference = 2.0 * PI * radius;
    let steps = circle_steps(circumference);
    if steps > 0 {
        let mut pen = StyleGuard::new(cursor);
        pen.set_color(CIRCLE_COLOR);
        let step_length = circumference / (steps as Float);
        trace_regular(&mut *pen, step_length, steps, 360.0 / (steps as Float));
    }

    finish(cursor);
    Ok(())
}

/// Rhombus with its major axis (`length`) along the heading and its
/// minor axis (`width`) across it. Pose is restored.
pub fn diamond<C: Cursor + ?Sized>(cursor: &mut C, length: Float, width: Float) -> DrawResult<()> {
    check_turtle(cursor)?;
    check_length("length", length)?;
    check_length("width", width)?;

    let (half_l, half_w) = (length * 0.5, width * 0.5);
    let angle = half_w.atan2(half_l).to_degrees();
    let edge = (half_l * half_l + half_w * half_w).sqrt();

    cursor.right(angle);
    cursor.forward(edge);
    cursor.left(2.0 * angle);
    cursor.forward(edge);
    cursor.right(2.0 * angle);
    cursor.backward(edge);
    cursor.left(2.0 * angle);
    cursor.backward(edge);
    cursor.right(angle);
    Ok(())
}

/// `n` segments where segment `i` is `(i + 1) * side` long, turning left
/// by `ang` after each, cycling through [`SPIRAL_COLORS`].
///
/// Position and heading are not restored.
pub fn spiral_helper<C: Cursor + ?Sized>(
    cursor: &mut C,
    side: Float,
    ang: Float,
    n: u32,
    speed: u8,
) -> DrawResult<()> {
    check_turtle(cursor)?;
    check_length("side", side)?;
    check_count("n", n)?;
    check_speed(speed)?;
    check_number("ang", ang)?;

    let mut pen = StyleGuard::new(cursor);
    for i in 0..n {
        pen.set_color(SPIRAL_COLORS[(i % 3) as usize]);
        pen.forward(((i + 1) as Float) * side);
        pen.left(ang);
    }

    Ok(())
}

/// Clears the surface and draws a spiral from the origin, facing south.
pub fn spiral<C: Cursor + ?Sized>(
    cursor: &mut C,
    side: Float,
    ang: Float,
    n: u32,
    speed: u8,
) -> DrawResult<()> {
    check_length("side", side)?;
    check_count("n", n)?;
    check_speed(speed)?;
    check_number("ang", ang)?;
    log::debug!("spiral: side={} ang={} n={} speed={}", side, ang, n, speed);

    cursor.clear();
    cursor.set_heading(270.0);
    cursor.set_speed(speed);
    spiral_helper(cursor, side, ang, n, speed)?;
    cursor.set_visible(false);

    finish(cursor);
    Ok(())
}

/// `k` polygons of `n >= 3` sides sharing the starting point, each
/// rotated `360 / k` degrees from the previous, alternating
/// [`ROSETTE_COLORS`].
pub fn rosette_helper<C: Cursor + ?Sized>(
    cursor: &mut C,
    side: Float,
    k: u32,
    n: u32,
    speed: u8,
) -> DrawResult<()> {
    check_turtle(cursor)?;
    check_length("side", side)?;
    check_speed(speed)?;
    check_count("k", k)?;
    check_sides(n, 3)?;

    let ang = 360.0 / (k as Float);
    let exterior = 360.0 / (n as Float);

    let mut pen = StyleGuard::new(cursor);
    for i in 0..k {
        pen.set_color(ROSETTE_COLORS[(i % 2) as usize]);
        trace_regular(&mut *pen, side, n, exterior);
        pen.left(ang);
    }

    Ok(())
}

/// Clears the surface and draws a rosette from the origin, facing north.
pub fn rosette<C: Cursor + ?Sized>(
    cursor: &mut C,
    side: Float,
    k: u32,
    n: u32,
    speed: u8,
) -> DrawResult<()> {
    check_length("side", side)?;
    check_speed(speed)?;
    check_count("k", k)?;
    check_sides(n, 3)?;
    log::debug!("rosette: side={} k={} n={} speed={}", side, k, n, speed);

    cursor.clear();
    cursor.set_heading(90.0);
    cursor.set_speed(speed);
    rosette_helper(cursor, side, k, n, speed)?;
    cursor.set_visible(false);

    finish(cursor);
    Ok(())
}

/// Clears the surface, then draws a green line 100 units east and a blue
/// line 200 units north.
pub fn two_lines<C: Cursor + ?Sized>(cursor: &mut C, speed: u8) -> DrawResult<()> {
    check_speed(speed)?;

    cursor.clear();
    cursor.set_speed(speed);
    cursor.set_color(Color::GREEN);
    cursor.forward(100.0);
    cursor.left(90.0);
    cursor.set_color(Color::BLUE);
    cursor.forward(200.0);

    cursor.flush();
    Ok(())
}
