// The drawing primitives the generators are allowed to use.
// The generators never touch pixels; they only issue these calls.

use crate::types::Rgba;

pub trait DrawSurface {
    /// Straight segment from (x0,y0) to (x1,y1) with the current stroke.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);
    fn set_stroke_weight(&mut self, weight: f32);
    fn set_stroke_color(&mut self, color: Rgba);
    fn clear_background(&mut self, color: Rgba);
}
