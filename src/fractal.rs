//! Recursive generators: triangle subdivision (Sierpinski) and the
//! eight-way edge replacement curve (Minkowski island).
//!
//! Both do `b^d` units of work for a depth `d` (`b = 3` and `b = 8`).
//! Depths above the practical bound only log a warning; depths above the
//! hard bound are rejected.

use crate::checks::*;
use crate::color::Color;
use crate::cursor::finish;
use crate::cursor::Couple;
use crate::cursor::Cursor;
use crate::cursor::Float;
use crate::cursor::StyleGuard;
use crate::cursor::C_ZERO;

#[allow(unused_imports)]
use num_traits::real::Real;

pub const SUBDIVISION_PRACTICAL_DEPTH: u32 = 7;
pub const SUBDIVISION_MAX_DEPTH: u32 = 12;
pub const ISLAND_PRACTICAL_DEPTH: u32 = 4;
pub const ISLAND_MAX_DEPTH: u32 = 7;

pub const SUBDIVISION_COLOR: Color = Color::MAGENTA;
pub const ISLAND_COLOR: Color = Color::GREEN;

fn check_fractal_depth(name: &str, depth: u32, practical: u32, max: u32) -> DrawResult<u32> {
    check_depth(depth, max)?;
    if depth > practical {
        log::warn!("{}: depth {} is above {}, expect a long run", name, depth, practical);
    }
    Ok(depth)
}

/// Fills `vertices` in solid mode, then puts the cursor back where it was.
fn place_fill<C: Cursor + ?Sized>(cursor: &mut C, vertices: &[Couple]) {
    let home = cursor.position();
    cursor.move_to(vertices[0]);
    cursor.set_solid(true);
    cursor.fill_polygon(vertices);
    cursor.set_solid(false);
    cursor.move_to(home);
}

/// Apex-up equilateral triangle whose bounding box is centered on `center`.
pub fn triangle_vertices(center: Couple, side: Float) -> [Couple; 3] {
    let h = side * (0.75 as Float).sqrt();
    let (x, y) = (center.x, center.y);
    [
        Couple::new(x - side / 2.0, y - h / 2.0),
        Couple::new(x + side / 2.0, y - h / 2.0),
        Couple::new(x, y + h / 2.0),
    ]
}

pub fn rect_vertices(center: Couple, width: Float, height: Float) -> [Couple; 4] {
    let (x, y) = (center.x - width / 2.0, center.y - height / 2.0);
    [
        Couple::new(x, y),
        Couple::new(x, y + height),
        Couple::new(x + width, y + height),
        Couple::new(x + width, y),
    ]
}

/// Solid equilateral triangle centered on `center`, apex up.
///
/// Placement is absolute; the cursor ends where it started.
pub fn fill_triangle<C: Cursor + ?Sized>(cursor: &mut C, center: Couple, side: Float) -> DrawResult<()> {
    check_pen(cursor)?;
    check_number("x", center.x)?;
    check_number("y", center.y)?;
    check_length("side", side)?;

    place_fill(cursor, &triangle_vertices(center, side));
    Ok(())
}

/// Solid `width` x `height` rectangle centered on `center`.
pub fn fill_rect<C: Cursor + ?Sized>(
    cursor: &mut C,
    center: Couple,
    width: Float,
    height: Float,
) -> DrawResult<()> {
    check_pen(cursor)?;
    check_number("x", center.x)?;
    check_number("y", center.y)?;
    check_length("width", width)?;
    check_length("height", height)?;

    place_fill(cursor, &rect_vertices(center, width, height));
    Ok(())
}

fn subdivide<C: Cursor + ?Sized>(cursor: &mut C, center: Couple, side: Float, depth: u32) {
    if depth == 0 {
        log::trace!("fill triangle at ({}, {}) side {}", center.x, center.y, side);
        place_fill(cursor, &triangle_vertices(center, side));
        return;
    }

    let half = side / 2.0;
    let height = (0.75 as Float).sqrt() * side;
    let (x, y) = (center.x, center.y);

    subdivide(cursor, Couple::new(x, y), half, depth - 1);
    subdivide(cursor, Couple::new(x + half, y), half, depth - 1);
    subdivide(cursor, Couple::new(x + side / 4.0, y + height / 2.0), half, depth - 1);
}

/// Sierpinski triangle of outer side `side` and recursion depth `depth`,
/// filling exactly `3^depth` triangles of side `side / 2^depth`.
///
/// At depth 0 this is [`fill_triangle`]. Otherwise the three half-size
/// children are anchored at `(x, y)`, `(x + side/2, y)` and
/// `(x + side/4, y + h/2)` with `h = side * sqrt(3) / 2`.
pub fn subdivide_triangle<C: Cursor + ?Sized>(
    cursor: &mut C,
    center: Couple,
    side: Float,
    depth: u32,
) -> DrawResult<()> {
    check_pen(cursor)?;
    check_number("x", center.x)?;
    check_number("y", center.y)?;
    check_length("side", side)?;
    check_fractal_depth("subdivide_triangle", depth, SUBDIVISION_PRACTICAL_DEPTH, SUBDIVISION_MAX_DEPTH)?;

    let mut pen = StyleGuard::new(cursor);
    pen.set_visible(true);
    subdivide(&mut *pen, center, side, depth);
    Ok(())
}

/// Clears the surface and draws a magenta Sierpinski triangle anchored
/// at the origin.
pub fn sierpinski<C: Cursor + ?Sized>(cursor: &mut C, side: Float, depth: u32, speed: u8) -> DrawResult<()> {
    check_length("side", side)?;
    check_speed(speed)?;
    check_fractal_depth("sierpinski", depth, SUBDIVISION_PRACTICAL_DEPTH, SUBDIVISION_MAX_DEPTH)?;
    log::debug!("sierpinski: side={} depth={} speed={}", side, depth, speed);

    cursor.clear();
    cursor.set_speed(speed);
    cursor.set_color(SUBDIVISION_COLOR);
    cursor.set_solid(false);
    subdivide_triangle(cursor, C_ZERO, side, depth)?;

    finish(cursor);
    cursor.set_visible(false);
    Ok(())
}

fn edge<C: Cursor + ?Sized>(cursor: &mut C, side: Float, depth: u32) {
    if depth == 0 {
        cursor.forward(side);
        return;
    }

    let quarter = side / 4.0;
    let depth = depth - 1;
    edge(cursor, quarter, depth);
    cursor.right(90.0);
    edge(cursor, quarter, depth);
    cursor.left(90.0);
    edge(cursor, quarter, depth);
    cursor.left(90.0);
    edge(cursor, quarter, depth);
    edge(cursor, quarter, depth);
    cursor.right(90.0);
    edge(cursor, quarter, depth);
    cursor.right(90.0);
    edge(cursor, quarter, depth);
    cursor.left(90.0);
    edge(cursor, quarter, depth);
}

/// One Minkowski edge: `8^depth` forward moves of `side / 4^depth`.
///
/// The net effect is a displacement of `side` along the heading with the
/// heading unchanged; the path in between is not restored.
pub fn island_edge<C: Cursor + ?Sized>(cursor: &mut C, side: Float, depth: u32) -> DrawResult<()> {
    check_turtle(cursor)?;
    check_length("side", side)?;
    check_fractal_depth("island_edge", depth, ISLAND_PRACTICAL_DEPTH, ISLAND_MAX_DEPTH)?;

    edge(cursor, side, depth);
    Ok(())
}

/// Clears the surface and draws a green Minkowski island: four edges
/// around the square of side `side` centered at the origin, starting
/// from its lower right corner facing north.
pub fn island<C: Cursor + ?Sized>(cursor: &mut C, side: Float, depth: u32, speed: u8) -> DrawResult<()> {
    check_length("side", side)?;
    check_speed(speed)?;
    check_fractal_depth("island", depth, ISLAND_PRACTICAL_DEPTH, ISLAND_MAX_DEPTH)?;
    log::debug!("island: side={} depth={} speed={}", side, depth, speed);

    cursor.clear();
    cursor.set_speed(speed);
    cursor.move_to(Couple::new(side / 2.0, -side / 2.0));
    cursor.set_heading(90.0);

    {
        let mut pen = StyleGuard::new(cursor);
        pen.set_color(ISLAND_COLOR);
        for _ in 0..4 {
            edge(&mut *pen, side, depth);
            pen.left(90.0);
        }
    }

    finish(cursor);
    cursor.set_visible(false);
    Ok(())
}
