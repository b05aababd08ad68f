#![no_std]
extern crate alloc;

pub mod checks;
pub mod color;
pub mod cursor;
pub mod fractal;
pub mod recording;
pub mod rendering;
pub mod shapes;

#[cfg(test)]
mod tests;

#[doc(inline)]
pub use {
    checks::DrawError,
    checks::DrawResult,
    color::Color,
    color::Hsv,
    cursor::Couple,
    cursor::Cursor,
    cursor::CursorState,
    cursor::Float,
    cursor::StyleGuard,
    cursor::C_ZERO,
    recording::Command,
    recording::Recorder,
    rendering::Canvas,
    shapes::*,
    fractal::*,
};
