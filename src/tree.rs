// Recursive tree drawn with a turtle.
// There is no tree data structure: the branching lives in the call stack and
// in the turtle's push/pop, and the picture is just the order of the lines.

use crate::config::TreeConfig;
use crate::error::Error;
use crate::random::{check_range, RandomSource};
use crate::surface::DrawSurface;
use crate::turtle::Turtle;

/// Counts from one run of the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Branches actually drawn.
    pub branches: usize,
    /// Calls that stopped because the length fell under the threshold.
    pub terminal_calls: usize,
    /// Deepest level that drew a branch (trunk = 1).
    pub depth: usize,
}

/// Number of branch levels drawn starting from `initial`: the smallest k with
/// `initial * decay^k < min_length`. Every level doubles the branch count, so
/// a full run draws `2^k - 1` branches and ends in `2^k` terminal calls.
pub fn recursion_levels(initial: f32, min_length: f32, decay: f32) -> usize {
    if initial < min_length {
        return 0;
    }
    let ratio = (min_length / initial).ln() / decay.ln();
    ratio.floor() as usize + 1
}

pub struct TreeGenerator {
    config: TreeConfig,
}

impl TreeGenerator {
    /// Rejects turn ranges that can't be sampled and a decay that would never
    /// let the recursion end.
    pub fn new(config: TreeConfig) -> Result<Self, Error> {
        check_range(config.left_turn.0, config.left_turn.1)?;
        check_range(config.right_turn.0, config.right_turn.1)?;
        if !(config.decay > 0.0 && config.decay < 1.0) {
            return Err(Error::InvalidRange { lo: config.decay, hi: 1.0 });
        }
        if !(config.min_length > 0.0) {
            return Err(Error::InvalidRange { lo: 0.0, hi: config.min_length });
        }
        // inf * decay stays inf and NaN never compares below the threshold.
        if !config.initial_length.is_finite() {
            return Err(Error::InvalidRange { lo: config.min_length, hi: config.initial_length });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Lift the pen, walk to the root, face the start heading and grow the
    /// whole tree from there.
    pub fn grow<S: DrawSurface>(
        &self,
        turtle: &mut Turtle<'_, S>,
        rng: &mut impl RandomSource,
    ) -> Result<TreeStats, Error> {
        let (x, y) = self.config.origin;
        turtle.pen_up();
        turtle.move_to(x, y);
        turtle.turn_to(self.config.heading);
        turtle.pen_down();

        let mut stats = TreeStats::default();
        self.draw_branch(turtle, rng, self.config.initial_length, 1, &mut stats)?;
        Ok(stats)
    }

    /// Draw one branch of `length` from wherever the turtle is, then both
    /// children from its tip.
    pub fn draw_branch<S: DrawSurface>(
        &self,
        turtle: &mut Turtle<'_, S>,
        rng: &mut impl RandomSource,
        length: f32,
        level: usize,
        stats: &mut TreeStats,
    ) -> Result<(), Error> {
        let c = &self.config;
        if length < c.min_length {
            stats.terminal_calls += 1;
            return Ok(());
        }
        stats.branches += 1;
        stats.depth = stats.depth.max(level);

        // Slight bend halfway along every branch.
        turtle.set_stroke_weight(length / c.weight_divisor);
        turtle.move_forward(length * 0.5);
        turtle.turn_left(c.curve_angle);
        turtle.move_forward(length * 0.5);

        let child = length * c.decay;

        turtle.push_state();
        turtle.turn_left(rng.uniform(c.left_turn.0, c.left_turn.1)?);
        self.draw_branch(turtle, rng, child, level + 1, stats)?;
        turtle.pop_state()?;

        turtle.push_state();
        turtle.turn_right(rng.uniform(c.right_turn.0, c.right_turn.1)?);
        self.draw_branch(turtle, rng, child, level + 1, stats)?;
        turtle.pop_state()?;

        Ok(())
    }
}
