// Window that shows a finished drawing.
// Visual: the picture appears once and stays until you close the window
// or press ESC. Nothing is redrawn; the same buffer is re-presented.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};
use std::time::Duration;

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Create a window sized to the canvas.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Keep showing `frame` until the window is closed or ESC is pressed.
    pub fn show_until_closed(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        while self.is_open() && !self.esc_pressed() {
            self.present(frame)?;
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }
}
