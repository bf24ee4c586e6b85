// One drawing session = one canvas, drawn once, start to finish.
// Any error aborts the session; there is no partial picture.

use crate::canvas::Canvas;
use crate::config::{GrassConfig, TreeConfig};
use crate::error::Error;
use crate::grass::{BladeRenderer, DensityPainter, PaintStats};
use crate::image_io::DensityImage;
use crate::random::RandomSource;
use crate::surface::DrawSurface;
use crate::tree::{recursion_levels, TreeGenerator, TreeStats};
use crate::turtle::Turtle;
use crate::types::FrameBuffer;
use log::{debug, info};
use std::time::Instant;

/// Grass field whose density follows the red channel of `density`.
pub fn run_grass_session(
    density: &DensityImage,
    config: &GrassConfig,
    rng: &mut impl RandomSource,
) -> Result<(FrameBuffer, PaintStats), Error> {
    let buffer = density.buffer()?;
    let (width, height) = config.size.unwrap_or_else(|| density.dimensions());
    info!("Grass: {width}x{height} canvas over a {}x{} density map", buffer.width(), buffer.height());

    let mut canvas = Canvas::new(width, height);
    canvas.clear_background(config.background);
    canvas.set_stroke_color(config.stroke);

    let painter = DensityPainter::new(BladeRenderer::new(config.blade.clone())?);

    let start = Instant::now();
    let stats = painter.paint(&buffer, width, height, rng, &mut canvas)?;
    info!("Grass: {} blades over {} pixels, took {} ms", stats.blades, stats.visited, start.elapsed().as_millis());

    Ok((canvas.into_frame(), stats))
}

/// A single recursive tree.
pub fn run_tree_session(
    config: &TreeConfig,
    rng: &mut impl RandomSource,
) -> Result<(FrameBuffer, TreeStats), Error> {
    let generator = TreeGenerator::new(config.clone())?;
    let c = generator.config();
    info!("Tree: {}x{} canvas, length {} decay {} min {}", c.width, c.height, c.initial_length, c.decay, c.min_length);

    let mut canvas = Canvas::new(c.width, c.height);
    canvas.clear_background(c.background);
    canvas.set_stroke_color(c.stroke);

    let start = Instant::now();
    let mut turtle = Turtle::new(&mut canvas);
    let stats = generator.grow(&mut turtle, rng)?;
    debug!("Tree: {} state(s) left on the stack", turtle.depth());
    let end_state = turtle.finish()?;
    debug!(
        "Tree: turtle finished at ({:.1},{:.1}), {} terminal calls",
        end_state.x, end_state.y, stats.terminal_calls
    );
    let expected = recursion_levels(c.initial_length, c.min_length, c.decay);
    info!(
        "Tree: {} branches, {} levels (expected {}), took {} ms",
        stats.branches,
        stats.depth,
        expected,
        start.elapsed().as_millis()
    );

    Ok((canvas.into_frame(), stats))
}
