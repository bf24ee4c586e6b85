// Software canvas: turns draw calls into pixels.
// Visual effects provided here:
// 1) Thin strokes (weight <= 1): a Bresenham line, fainter as the weight drops.
// 2) Thick strokes: every pixel within weight/2 of the segment (round caps).
// 3) Translucent colors are mixed in linear light.

use crate::gamma::GammaLut;
use crate::surface::DrawSurface;
use crate::types::{FrameBuffer, Rgba};

pub struct Canvas {
    frame: FrameBuffer,
    lut: GammaLut,
    stroke: Rgba,
    weight: f32,
}

impl Canvas {
    /// Black canvas, opaque white 1px stroke.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: FrameBuffer::filled(width, height, 0),
            lut: GammaLut::new(),
            stroke: Rgba::gray(255),
            weight: 1.0,
        }
    }

    #[cfg(test)]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn into_frame(self) -> FrameBuffer {
        self.frame
    }

    /// Blend the current stroke color into (x,y) with `coverage` in [0,1].
    /// Pixels outside the canvas are ignored.
    #[inline]
    fn plot(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.frame.width || y >= self.frame.height {
            return;
        }
        let a = coverage * self.stroke.a as f32 / 255.0;
        let idx = y * self.frame.width + x;
        self.frame.pixels[idx] = self.lut.blend(self.frame.pixels[idx], self.stroke.packed(), a);
    }

    /// 1-pixel Bresenham between rounded endpoints.
    fn thin_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, coverage: f32) {
        let (mut x0, mut y0) = (x0.round() as i32, y0.round() as i32);
        let (x1, y1) = (x1.round() as i32, y1.round() as i32);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x0, y0, coverage);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x0 += sx; }
            if e2 <= dx { err += dx; y0 += sy; }
        }
    }

    /// Fill every pixel center within `radius` of the segment (a capsule).
    /// Each pixel is blended once, so translucent thick strokes stay even.
    fn thick_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) {
        let min_x = (x0.min(x1) - radius).floor() as i32;
        let max_x = (x0.max(x1) + radius).ceil() as i32;
        let min_y = (y0.min(y1) - radius).floor() as i32;
        let max_y = (y0.max(y1) + radius).ceil() as i32;

        // Clip the scan box to the canvas up front.
        let min_x = min_x.max(0);
        let min_y = min_y.max(0);
        let max_x = max_x.min(self.frame.width as i32 - 1);
        let max_y = max_y.min(self.frame.height as i32 - 1);

        let (dx, dy) = (x1 - x0, y1 - y0);
        let len2 = dx * dx + dy * dy;
        let r2 = radius * radius;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (px, py) = (x as f32, y as f32);
                // Closest point on the segment, as a fraction t in [0,1]
                let t = if len2 > 0.0 {
                    (((px - x0) * dx + (py - y0) * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let (cx, cy) = (x0 + dx * t, y0 + dy * t);
                let d2 = (px - cx) * (px - cx) + (py - cy) * (py - cy);
                if d2 <= r2 {
                    self.plot(x, y, 1.0);
                }
            }
        }
    }
}

impl DrawSurface for Canvas {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        if self.weight <= 0.0 {
            return;
        }
        if self.weight <= 1.0 {
            let coverage = self.weight;
            self.thin_line(x0, y0, x1, y1, coverage);
        } else {
            let radius = self.weight * 0.5;
            self.thick_line(x0, y0, x1, y1, radius);
        }
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.weight = weight;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn clear_background(&mut self, color: Rgba) {
        let packed = color.packed();
        for p in &mut self.frame.pixels { *p = packed; }
    }
}
