use crate::color::Color;

use core::ops::Deref;
use core::ops::DerefMut;

#[allow(unused_imports)]
use num_traits::real::Real;

pub type Float = f64;
pub type Couple = vek::vec::repr_c::vec2::Vec2<Float>;
pub const C_ZERO: Couple = Couple::new(0.0, 0.0);

/// Highest accepted cursor speed; 0 means "instant".
pub const MAX_SPEED: u8 = 10;

/// Brings any heading back into `[0, 360)`.
pub fn normalize_heading(heading: Float) -> Float {
    let h = heading % 360.0;
    match h < 0.0 {
        true => h + 360.0,
        false => h,
    }
}

/// Observable attributes of a drawing cursor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CursorState {
    pub position: Couple,
    /// degrees, 0 = east, counter-clockwise
    pub heading: Float,
    pub color: Color,
    pub speed: u8,
    pub visible: bool,
    /// pen down: moves leave a trace
    pub draw_mode: bool,
    /// fill mode of the pen: outline when false
    pub solid: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            position: C_ZERO,
            heading: 0.0,
            color: Color::BLACK,
            speed: MAX_SPEED,
            visible: true,
            draw_mode: true,
            solid: false,
        }
    }
}

impl CursorState {
    /// Moves along the heading; returns the start and end points.
    pub fn advance(&mut self, distance: Float) -> (Couple, Couple) {
        let from = self.position;
        let (sin, cos) = self.heading.to_radians().sin_cos();
        self.position = Couple::new(from.x + distance * cos, from.y + distance * sin);
        (from, self.position)
    }

    /// Positive angles turn left.
    pub fn rotate(&mut self, angle: Float) {
        self.heading = normalize_heading(self.heading + angle);
    }

    pub fn style(&self) -> Style {
        Style {
            color: self.color,
            speed: self.speed,
            visible: self.visible,
            draw_mode: self.draw_mode,
            solid: self.solid,
        }
    }

    pub fn set_style(&mut self, style: Style) {
        self.color = style.color;
        self.speed = style.speed;
        self.visible = style.visible;
        self.draw_mode = style.draw_mode;
        self.solid = style.solid;
    }
}

/// The part of a [`CursorState`] every generator must hand back untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub color: Color,
    pub speed: u8,
    pub visible: bool,
    pub draw_mode: bool,
    pub solid: bool,
}

/// A stateful pen moved by relative commands.
///
/// Implementors own the drawing surface; generators only borrow the
/// cursor for the duration of one call.
pub trait Cursor {
    fn state(&self) -> &CursorState;
    fn state_mut(&mut self) -> &mut CursorState;

    /// Translates along the heading, leaving a trace when the pen is down.
    fn forward(&mut self, distance: Float);

    /// Rotates the heading counter-clockwise.
    fn left(&mut self, angle: Float);

    /// Repositions without drawing; the heading is kept.
    fn move_to(&mut self, position: Couple);

    /// Solid fill of a closed polygon given in absolute coordinates.
    fn fill_polygon(&mut self, vertices: &[Couple]);

    /// Makes any buffered drawing visible.
    fn flush(&mut self);

    /// Erases the surface and resets the cursor to its defaults.
    fn clear(&mut self);

    fn backward(&mut self, distance: Float) {
        self.forward(-distance);
    }

    fn right(&mut self, angle: Float) {
        self.left(-angle);
    }

    fn position(&self) -> Couple {
        self.state().position
    }

    fn heading(&self) -> Float {
        self.state().heading
    }

    fn set_heading(&mut self, heading: Float) {
        self.state_mut().heading = normalize_heading(heading);
    }

    fn color(&self) -> Color {
        self.state().color
    }

    fn set_color(&mut self, color: Color) {
        self.state_mut().color = color;
    }

    fn speed(&self) -> u8 {
        self.state().speed
    }

    fn set_speed(&mut self, speed: u8) {
        self.state_mut().speed = speed;
    }

    fn visible(&self) -> bool {
        self.state().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.state_mut().visible = visible;
    }

    fn draw_mode(&self) -> bool {
        self.state().draw_mode
    }

    fn set_draw_mode(&mut self, draw_mode: bool) {
        self.state_mut().draw_mode = draw_mode;
    }

    fn solid(&self) -> bool {
        self.state().solid
    }

    fn set_solid(&mut self, solid: bool) {
        self.state_mut().solid = solid;
    }
}

/// Restores the cursor [`Style`] when dropped, whatever path the
/// drawing code took out of its scope.
pub struct StyleGuard<'a, C: Cursor + ?Sized> {
    cursor: &'a mut C,
    saved: Style,
}

impl<'a, C: Cursor + ?Sized> StyleGuard<'a, C> {
    pub fn new(cursor: &'a mut C) -> Self {
        let saved = cursor.state().style();
        Self { cursor, saved }
    }

    pub fn saved(&self) -> Style {
        self.saved
    }
}

impl<'a, C: Cursor + ?Sized> Deref for StyleGuard<'a, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.cursor
    }
}

impl<'a, C: Cursor + ?Sized> DerefMut for StyleGuard<'a, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.cursor
    }
}

impl<'a, C: Cursor + ?Sized> Drop for StyleGuard<'a, C> {
    fn drop(&mut self) {
        self.cursor.state_mut().set_style(self.saved);
    }
}

/// Flushes the cursor if it draws instantly (speed 0).
pub fn finish<C: Cursor + ?Sized>(cursor: &mut C) {
    if cursor.speed() == 0 {
        cursor.flush();
    }
}
