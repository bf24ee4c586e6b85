// Two generative drawings, each drawn exactly once:
// • grass  — blades scattered over the canvas, dense where a reference
//            image is red, sparse where it is dark.
// • tree   — a recursive turtle-graphics tree.
// The result is shown in a window (ESC or close to quit) and/or saved as PNG.

mod canvas;
mod config;
mod error;
mod gamma;
mod grass;
mod image_io;
mod random;
mod sampler;
mod session;
mod surface;
mod tree;
mod turtle;
mod types;
mod window;

use clap::{Parser, Subcommand};
use config::{GrassConfig, TreeConfig};
use error::Error;
use image_io::{save_png, DensityImage};
use log::info;
use random::SeededRandom;
use std::path::PathBuf;
use types::FrameBuffer;
use window::Drawer;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Seed for the random source; omit for a fresh one (it gets logged)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Also save the drawing as a PNG
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Don't open a window (useful with --output)
    #[arg(long, global = true)]
    no_window: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Grass whose density follows the red channel of IMAGE
    Grass {
        image: PathBuf,

        /// Canvas width (defaults to the image width)
        #[arg(long, requires = "height")]
        width: Option<usize>,

        /// Canvas height (defaults to the image height)
        #[arg(long, requires = "width")]
        height: Option<usize>,
    },
    /// A recursive turtle tree
    Tree {
        /// Trunk length in pixels
        #[arg(long, default_value_t = 100.0)]
        length: f32,

        /// Child branch length as a fraction of the parent's
        #[arg(long, default_value_t = 0.75)]
        decay: f32,

        /// Branches shorter than this are not drawn
        #[arg(long, default_value_t = 4.0)]
        min_length: f32,
    },
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    info!("Seed: {} (pass --seed {} to redraw this picture)", rng.seed(), rng.seed());

    let (title, frame): (&str, FrameBuffer) = match args.mode {
        Mode::Grass { image, width, height } => {
            let density = DensityImage::open(&image)?;
            let config = GrassConfig { size: width.zip(height), ..GrassConfig::default() };
            let (frame, _) = session::run_grass_session(&density, &config, &mut rng)?;
            ("Grass", frame)
        }
        Mode::Tree { length, decay, min_length } => {
            let config = TreeConfig { initial_length: length, decay, min_length, ..TreeConfig::default() };
            let (frame, _) = session::run_tree_session(&config, &mut rng)?;
            ("Tree", frame)
        }
    };

    if let Some(path) = &args.output {
        save_png(&frame, path)?;
        info!("Saved {}", path.display());
    }

    if !args.no_window {
        let mut drawer = Drawer::new(title, frame.width, frame.height)?;
        drawer.show_until_closed(&frame)?;
    }

    Ok(())
}
