use crate::color::Color;
use crate::cursor::Couple;
use crate::cursor::Cursor;
use crate::cursor::CursorState;
use crate::cursor::Float;
use crate::cursor::C_ZERO;

use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::real::Real;

/// One straight move of the cursor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub from: Couple,
    pub to: Couple,
    pub distance: Float,
    pub color: Color,
    /// false when the pen was up
    pub drawn: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Forward(Stroke),
    Backward(Stroke),
    /// signed angle, positive = left
    Turn(Float),
    MoveTo(Couple),
    Fill(Vec<Couple>, Color),
    Flush,
    Clear,
}

/// A cursor that draws nothing and remembers every command it was given.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    state: CursorState,
    /// cursor position before the first recorded command
    start: Couple,
    commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CursorState) -> Self {
        Self {
            state,
            start: state.position,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drops the recorded commands; the next ones are recorded from the
    /// current position.
    pub fn forget(&mut self) {
        self.start = self.state.position;
        self.commands.clear();
    }

    pub fn forwards(&self) -> impl Iterator<Item = &Stroke> {
        self.commands.iter().filter_map(|c| match c {
            Command::Forward(stroke) => Some(stroke),
            _ => None,
        })
    }

    pub fn turns(&self) -> impl Iterator<Item = Float> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::Turn(angle) => Some(*angle),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (&[Couple], Color)> {
        self.commands.iter().filter_map(|c| match c {
            Command::Fill(vertices, color) => Some((vertices.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn flushes(&self) -> usize {
        self.commands.iter().filter(|c| **c == Command::Flush).count()
    }

    /// Sum of the distances covered by forward and backward moves.
    pub fn path_length(&self) -> Float {
        self.commands
            .iter()
            .map(|c| match c {
                Command::Forward(s) | Command::Backward(s) => s.distance,
                _ => 0.0,
            })
            .sum()
    }

    /// Cursor position right after each recorded command.
    pub fn positions(&self) -> impl Iterator<Item = Couple> + '_ {
        self.commands.iter().scan(self.start, |at, command| {
            match command {
                Command::Forward(s) | Command::Backward(s) => *at = s.to,
                Command::MoveTo(p) => *at = *p,
                Command::Clear => *at = C_ZERO,
                Command::Turn(_) | Command::Fill(..) | Command::Flush => (),
            }
            Some(*at)
        })
    }

    pub fn log_commands(&self) {
        log::info!(    "| INDEX |  COMMAND  |     X     |     Y     |");

        for (i, (command, at)) in self.commands.iter().zip(self.positions()).enumerate() {
            let name = match command {
                Command::Forward(_) => "Forward",
                Command::Backward(_) => "Backward",
                Command::Turn(_) => "Turn",
                Command::MoveTo(_) => "MoveTo",
                Command::Fill(..) => "Fill",
                Command::Flush => "Flush",
                Command::Clear => "Clear",
            };
            log::info!("| {:^5} | {:^9} | {:^9.3} | {:^9.3} |", i, name, at.x, at.y);
        }
    }

    fn stroke(&mut self, distance: Float) -> Stroke {
        let (from, to) = self.state.advance(distance);
        Stroke {
            from,
            to,
            distance: distance.abs(),
            color: self.state.color,
            drawn: self.state.draw_mode,
        }
    }
}

impl Cursor for Recorder {
    fn state(&self) -> &CursorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CursorState {
        &mut self.state
    }

    fn forward(&mut self, distance: Float) {
        let stroke = self.stroke(distance);
        self.commands.push(Command::Forward(stroke));
    }

    fn backward(&mut self, distance: Float) {
        let stroke = self.stroke(-distance);
        self.commands.push(Command::Backward(stroke));
    }

    fn left(&mut self, angle: Float) {
        self.state.rotate(angle);
        self.commands.push(Command::Turn(angle));
    }

    fn move_to(&mut self, position: Couple) {
        self.state.position = position;
        self.commands.push(Command::MoveTo(position));
    }

    fn fill_polygon(&mut self, vertices: &[Couple]) {
        self.commands.push(Command::Fill(vertices.to_vec(), self.state.color));
    }

    fn flush(&mut self) {
        self.commands.push(Command::Flush);
    }

    /// Forgets the recorded drawing, then records the `Clear` itself.
    fn clear(&mut self) {
        self.state = CursorState::default();
        self.start = self.state.position;
        self.commands.clear();
        self.commands.push(Command::Clear);
    }
}
