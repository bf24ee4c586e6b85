// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    ImageLoad(String),    // Opening/decoding the density image failed
    ImageSave(String),    // Encoding/writing the finished canvas failed

    // Pixel buffer length does not match width * height * 4
    BufferSize { expected: usize, actual: usize },
    // Sampled a coordinate outside the pixel buffer
    OutOfRange { x: usize, y: usize, width: usize, height: usize },
    // pop_state() with nothing pushed
    StackUnderflow,
    // Session ended with snapshots still on the stack
    UnbalancedState { depth: usize },
    // Random range with lo >= hi
    InvalidRange { lo: f32, hi: f32 },
    // A setting that can't produce a drawing
    InvalidConfig(String),
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::ImageLoad(s) => write!(f, "Image load error: {s}"),
            Error::ImageSave(s) => write!(f, "Image save error: {s}"),
            Error::BufferSize { expected, actual } => {
                write!(f, "Pixel buffer holds {actual} bytes, expected {expected}")
            }
            Error::OutOfRange { x, y, width, height } => {
                write!(f, "Pixel ({x},{y}) is outside the {width}x{height} buffer")
            }
            Error::StackUnderflow => write!(f, "Turtle pop_state with an empty state stack"),
            Error::UnbalancedState { depth } => {
                write!(f, "Turtle session ended with {depth} unpopped state(s)")
            }
            Error::InvalidRange { lo, hi } => write!(f, "Invalid random range [{lo}, {hi})"),
            Error::InvalidConfig(s) => write!(f, "Invalid configuration: {s}"),
        }
    }
}

impl std::error::Error for Error {}
