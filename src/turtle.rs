//! Turtle graphics: a cursor with position, heading and pen that draws as it
//! moves, plus a stack of saved cursors.
//!
//! Angle convention: degrees, 0 points along +x, and positive angles rotate
//! clockwise on screen because y grows downward. `turn_right` adds to the
//! heading and `turn_left` subtracts, so left/right compose the same way at
//! every depth of a recursion.

use crate::error::Error;
use crate::surface::DrawSurface;
use log::trace;

/// Everything a snapshot restores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    pub x: f32,
    pub y: f32,
    /// Degrees, see the module docs for the convention.
    pub heading: f32,
    pub pen_down: bool,
    pub stroke_weight: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, heading: 0.0, pen_down: true, stroke_weight: 1.0 }
    }
}

/// A turtle drawing onto a borrowed surface for one session.
pub struct Turtle<'s, S: DrawSurface> {
    surface: &'s mut S,
    state: TurtleState,
    stack: Vec<TurtleState>,
}

impl<'s, S: DrawSurface> Turtle<'s, S> {
    /// Pen down at the origin, facing +x. Pushes the initial stroke weight
    /// to the surface so the two agree from the start.
    pub fn new(surface: &'s mut S) -> Self {
        let state = TurtleState::default();
        surface.set_stroke_weight(state.stroke_weight);
        Self { surface, state, stack: Vec::new() }
    }

    #[cfg(test)]
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    /// Number of snapshots currently pushed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn line_to(&mut self, x: f32, y: f32) {
        if self.state.pen_down {
            trace!("line ({:.2},{:.2}) -> ({x:.2},{y:.2})", self.state.x, self.state.y);
            self.surface.draw_line(self.state.x, self.state.y, x, y);
        }
        self.state.x = x;
        self.state.y = y;
    }

    /// Jump to an absolute position, drawing if the pen is down.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.line_to(x, y);
    }

    /// Walk `distance` along the heading, drawing if the pen is down.
    pub fn move_forward(&mut self, distance: f32) {
        let rad = self.state.heading.to_radians();
        let x = self.state.x + distance * rad.cos();
        let y = self.state.y + distance * rad.sin();
        self.line_to(x, y);
    }

    /// Absolute heading in degrees.
    pub fn turn_to(&mut self, angle: f32) {
        self.state.heading = angle;
    }

    pub fn turn_left(&mut self, angle: f32) {
        self.state.heading -= angle;
    }

    pub fn turn_right(&mut self, angle: f32) {
        self.state.heading += angle;
    }

    pub fn pen_up(&mut self) {
        self.state.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.state.pen_down = true;
    }

    pub fn set_stroke_weight(&mut self, weight: f32) {
        self.state.stroke_weight = weight;
        self.surface.set_stroke_weight(weight);
    }

    /// Save a copy of the whole cursor.
    pub fn push_state(&mut self) {
        self.stack.push(self.state);
    }

    /// Restore the most recent snapshot. The surface's stroke weight follows.
    pub fn pop_state(&mut self) -> Result<(), Error> {
        let saved = self.stack.pop().ok_or(Error::StackUnderflow)?;
        if saved.stroke_weight != self.state.stroke_weight {
            self.surface.set_stroke_weight(saved.stroke_weight);
        }
        self.state = saved;
        Ok(())
    }

    /// End the session. Any snapshot left on the stack means a push without
    /// its pop somewhere, and the drawing can't be trusted.
    pub fn finish(self) -> Result<TurtleState, Error> {
        match self.stack.len() {
            0 => Ok(self.state),
            depth => Err(Error::UnbalancedState { depth }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawCommand, Recording};
    use test_log::test;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn move_forward_follows_heading() {
        let mut rec = Recording::default();
        let mut t = Turtle::new(&mut rec);
        t.move_forward(10.0);
        assert!(close(t.state().x, 10.0) && close(t.state().y, 0.0));

        // +90 is clockwise on screen: straight down.
        t.turn_right(90.0);
        t.move_forward(5.0);
        assert!(close(t.state().x, 10.0) && close(t.state().y, 5.0));

        // Back to 0, then left 90: straight up.
        t.turn_left(180.0);
        t.move_forward(5.0);
        assert!(close(t.state().x, 10.0) && close(t.state().y, 0.0));
        t.finish().unwrap();

        assert_eq!(rec.line_count(), 3);
    }

    #[test]
    fn pen_up_moves_without_drawing() {
        let mut rec = Recording::default();
        let mut t = Turtle::new(&mut rec);
        t.pen_up();
        t.move_to(250.0, 450.0);
        t.move_forward(20.0);
        t.pen_down();
        t.move_to(0.0, 0.0);
        t.finish().unwrap();

        assert_eq!(rec.line_count(), 1);
        assert_eq!(rec.lines().next().unwrap(), (270.0, 450.0, 0.0, 0.0));
    }

    #[test]
    fn turn_to_is_absolute_and_turns_are_relative() {
        let mut rec = Recording::default();
        let mut t = Turtle::new(&mut rec);
        t.turn_to(-70.0);
        t.turn_left(10.0);
        t.turn_right(25.0);
        assert!(close(t.state().heading, -55.0));
        t.turn_to(30.0);
        assert!(close(t.state().heading, 30.0));
    }

    #[test]
    fn push_then_pop_restores_exact_state() {
        let mut rec = Recording::default();
        let mut t = Turtle::new(&mut rec);
        t.move_to(1.25, -3.5);
        t.turn_to(-70.3);
        t.set_stroke_weight(7.5);
        t.pen_up();
        let before = *t.state();

        t.push_state();
        t.pop_state().unwrap();
        assert_eq!(*t.state(), before);

        t.push_state();
        t.pen_down();
        t.turn_left(33.0);
        t.move_forward(12.0);
        t.set_stroke_weight(1.0);
        t.pop_state().unwrap();

        let after = *t.state();
        assert_eq!(after.x.to_bits(), before.x.to_bits());
        assert_eq!(after.y.to_bits(), before.y.to_bits());
        assert_eq!(after.heading.to_bits(), before.heading.to_bits());
        assert_eq!(after.stroke_weight.to_bits(), before.stroke_weight.to_bits());
        assert_eq!(after.pen_down, before.pen_down);
        t.finish().unwrap();

        // The surface got its weight back on pop.
        assert_eq!(rec.commands.last(), Some(&DrawCommand::StrokeWeight(7.5)));
    }

    #[test]
    fn snapshots_unwind_in_lifo_order() {
        let mut rec = Recording::default();
        let mut t = Turtle::new(&mut rec);
        t.push_state();
        t.move_to(1.0, 1.0);
        t.push_state();
        t.move_to(2.0, 2.0);
        assert_eq!(t.depth(), 2);

        t.pop_state().unwrap();
        assert_eq!((t.state().x, t.state().y), (1.0, 1.0));
        t.pop_state().unwrap();
        assert_eq!((t.state().x, t.state().y), (0.0, 0.0));
    }

    #[test]
    fn pop_on_empty_stack_underflows() {
        let mut rec = Recording::default();
        let mut t = Turtle::new(&mut rec);
        assert_eq!(t.pop_state(), Err(Error::StackUnderflow));
    }

    #[test]
    fn finishing_with_pushed_state_is_an_error() {
        let mut rec = Recording::default();
        let mut t = Turtle::new(&mut rec);
        t.push_state();
        t.push_state();
        t.pop_state().unwrap();
        assert_eq!(t.finish().unwrap_err(), Error::UnbalancedState { depth: 1 });
    }
}
