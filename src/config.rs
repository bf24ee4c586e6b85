//! Tunables for both drawings.
//!
//! Defaults reproduce the reference pictures: grass on a canvas the size of
//! its density image, and a 500x500 tree. `main` overrides a few of them
//! from the command line.

use crate::types::Rgba;

/// Shape of a single grass blade.
#[derive(Debug, Clone, PartialEq)]
pub struct BladeConfig {
    /// Each height draw is uniform in `[min, max)`.
    pub height_range: (f32, f32),
    /// Number of height draws; the blade keeps the smallest. More samples
    /// means more short blades and rarer tall ones. Must be at least 1.
    pub height_samples: usize,
    /// Lean per unit of height, uniform in `[min, max)`.
    pub lean_range: (f32, f32),
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self {
            height_range: (1.0, 60.0),
            height_samples: 6,
            lean_range: (-0.3, 0.3),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrassConfig {
    /// Canvas size; `None` means "same as the density image".
    pub size: Option<(usize, usize)>,
    pub background: Rgba,
    pub stroke: Rgba,
    pub blade: BladeConfig,
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            size: None,
            background: Rgba::opaque(0, 0, 0),
            stroke: Rgba::new(0, 200, 100, 80),
            blade: BladeConfig::default(),
        }
    }
}

/// Recursive tree parameters.
///
/// Angles are degrees. Heading 0 points along +x and positive angles turn
/// clockwise on screen (y grows downward), so `-70` leans up and to the right.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    pub width: usize,
    pub height: usize,
    pub background: Rgba,
    pub stroke: Rgba,
    /// Where the trunk starts, and which way it faces.
    pub origin: (f32, f32),
    pub heading: f32,
    pub initial_length: f32,
    /// Branches shorter than this are not drawn.
    pub min_length: f32,
    /// Child length = parent length * decay.
    pub decay: f32,
    /// Fixed left bend in the middle of every branch.
    pub curve_angle: f32,
    pub left_turn: (f32, f32),
    pub right_turn: (f32, f32),
    /// Stroke weight = length / divisor.
    pub weight_divisor: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            background: Rgba::gray(50),
            stroke: Rgba::gray(255),
            origin: (250.0, 450.0),
            heading: -70.0,
            initial_length: 100.0,
            min_length: 4.0,
            decay: 0.75,
            curve_angle: 10.0,
            left_turn: (20.0, 40.0),
            right_turn: (10.0, 30.0),
            weight_divisor: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn defaults_match_reference_pictures() {
        let b = BladeConfig::default();
        assert_eq!(b.height_samples, 6);
        assert_eq!(b.height_range, (1.0, 60.0));

        let t = TreeConfig::default();
        assert_eq!((t.min_length, t.decay, t.curve_angle), (4.0, 0.75, 10.0));
        // The left/right asymmetry is deliberate.
        assert_ne!(t.left_turn, t.right_turn);

        assert_eq!(GrassConfig::default().stroke.a, 80);
    }
}
