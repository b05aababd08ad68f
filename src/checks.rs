use crate::color::Color;
use crate::cursor::Cursor;
use crate::cursor::Float;
use crate::cursor::MAX_SPEED;

use core::fmt;

use DrawError::*;

/// A violated precondition. Generators check their inputs before the
/// first cursor command, so an error never leaves partial geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// The pen must be down for path-tracing generators.
    PenUp,
    /// Fill generators expect the pen in outline mode.
    PenSolid,
    InvalidLength(&'static str, Float),
    InvalidNumber(&'static str, Float),
    InvalidCount(&'static str, u32),
    InvalidSides(u32),
    InvalidSpeed(u8),
    InvalidColor(Color),
    DepthTooLarge(u32, u32),
}

pub type DrawResult<T> = Result<T, DrawError>;

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PenUp => write!(f, "invalid cursor mode: pen is up"),
            PenSolid => write!(f, "invalid pen mode: pen is solid"),
            InvalidLength(what, value) => write!(f, "{} is not a valid length: {}", what, value),
            InvalidNumber(what, value) => write!(f, "{} is not a valid number: {}", what, value),
            InvalidCount(what, value) => write!(f, "{} is not a valid number of iterations: {}", what, value),
            InvalidSides(n) => write!(f, "invalid number of polygon sides: {}", n),
            InvalidSpeed(speed) => write!(f, "invalid speed: {}", speed),
            InvalidColor(color) => write!(f, "invalid color: {}", color),
            DepthTooLarge(depth, max) => write!(f, "depth is too large (max {}): {}", max, depth),
        }
    }
}

pub fn check_number(what: &'static str, value: Float) -> DrawResult<Float> {
    match value.is_finite() {
        true => Ok(value),
        false => Err(InvalidNumber(what, value)),
    }
}

/// Lengths are finite and non-negative.
pub fn check_length(what: &'static str, value: Float) -> DrawResult<Float> {
    match value.is_finite() && value >= 0.0 {
        true => Ok(value),
        false => Err(InvalidLength(what, value)),
    }
}

/// Iteration counts start at 1.
pub fn check_count(what: &'static str, value: u32) -> DrawResult<u32> {
    match value >= 1 {
        true => Ok(value),
        false => Err(InvalidCount(what, value)),
    }
}

pub fn check_sides(n: u32, min: u32) -> DrawResult<u32> {
    match n >= min {
        true => Ok(n),
        false => Err(InvalidSides(n)),
    }
}

pub fn check_speed(speed: u8) -> DrawResult<u8> {
    match speed <= MAX_SPEED {
        true => Ok(speed),
        false => Err(InvalidSpeed(speed)),
    }
}

pub fn check_color(color: Color) -> DrawResult<Color> {
    match color.is_valid() {
        true => Ok(color),
        false => Err(InvalidColor(color)),
    }
}

pub fn check_depth(depth: u32, max: u32) -> DrawResult<u32> {
    match depth <= max {
        true => Ok(depth),
        false => Err(DepthTooLarge(depth, max)),
    }
}

/// Path-tracing generators need the pen down.
pub fn check_turtle<C: Cursor + ?Sized>(cursor: &C) -> DrawResult<()> {
    match cursor.draw_mode() {
        true => Ok(()),
        false => Err(PenUp),
    }
}

/// Fill generators toggle solid mode themselves and expect outline mode.
pub fn check_pen<C: Cursor + ?Sized>(cursor: &C) -> DrawResult<()> {
    match cursor.solid() {
        true => Err(PenSolid),
        false => Ok(()),
    }
}
