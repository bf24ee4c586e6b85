// Grass: scatter blades across the canvas, thick where the density map is red.

use crate::config::BladeConfig;
use crate::error::Error;
use crate::random::{check_range, RandomSource};
use crate::sampler::PixelBuffer;
use crate::surface::DrawSurface;
use log::trace;

/// Geometry of one blade. Drawn immediately, never stored by the painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blade {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    /// Horizontal offset of the tip, already scaled by height.
    pub lean: f32,
}

impl Blade {
    /// Tip of the blade; it grows upward, and y points down.
    pub fn tip(&self) -> (f32, f32) {
        (self.x + self.lean, self.y - self.height)
    }
}

pub struct BladeRenderer {
    config: BladeConfig,
}

impl BladeRenderer {
    pub fn new(config: BladeConfig) -> Result<Self, Error> {
        check_range(config.height_range.0, config.height_range.1)?;
        check_range(config.lean_range.0, config.lean_range.1)?;
        if config.height_samples == 0 {
            return Err(Error::InvalidConfig("blade height needs at least one sample".into()));
        }
        Ok(Self { config })
    }

    /// Random blade rooted at (x,y).
    ///
    /// Height is the minimum of `height_samples` uniform draws, which skews
    /// toward short blades. Lean is one uniform draw times the height.
    pub fn shape(&self, x: f32, y: f32, rng: &mut impl RandomSource) -> Result<Blade, Error> {
        let (lo, hi) = self.config.height_range;
        let mut height = rng.uniform(lo, hi)?;
        for _ in 1..self.config.height_samples {
            height = height.min(rng.uniform(lo, hi)?);
        }

        let (lean_lo, lean_hi) = self.config.lean_range;
        let mut lean = rng.uniform(lean_lo, lean_hi)?;
        lean *= height;

        Ok(Blade { x, y, height, lean })
    }

    /// Shape a blade at (x,y) and draw it as a single segment.
    pub fn draw_blade(
        &self,
        x: f32,
        y: f32,
        rng: &mut impl RandomSource,
        surface: &mut impl DrawSurface,
    ) -> Result<Blade, Error> {
        let blade = self.shape(x, y, rng)?;
        let (tx, ty) = blade.tip();
        surface.draw_line(blade.x, blade.y, tx, ty);
        Ok(blade)
    }
}

/// What one pass of the painter did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintStats {
    pub visited: usize,
    pub blades: usize,
}

pub struct DensityPainter {
    blades: BladeRenderer,
}

impl DensityPainter {
    pub fn new(blades: BladeRenderer) -> Self {
        Self { blades }
    }

    /// Visit every (x,y) of a `width` x `height` canvas, column by column
    /// (x outer, y inner), and draw a blade with probability `red / 255`.
    ///
    /// Per pixel: U uniform in [0,255), draw if `U < red`. So red 0 never
    /// draws and red 255 always does. A canvas larger than the density map
    /// fails with `OutOfRange` at the first missing pixel.
    pub fn paint(
        &self,
        density: &PixelBuffer<'_>,
        width: usize,
        height: usize,
        rng: &mut impl RandomSource,
        surface: &mut impl DrawSurface,
    ) -> Result<PaintStats, Error> {
        let mut stats = PaintStats::default();

        for x in 0..width {
            for y in 0..height {
                let red = density.red(x, y)?;
                stats.visited += 1;

                if rng.uniform(0.0, 255.0)? < red as f32 {
                    let blade = self.blades.draw_blade(x as f32, y as f32, rng, surface)?;
                    trace!("blade at ({x},{y}) height {:.1} lean {:.1}", blade.height, blade.lean);
                    stats.blades += 1;
                }
            }
        }

        Ok(stats)
    }
}
