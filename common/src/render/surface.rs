use super::palette::Rgb;

/// Axis-aligned pixel rectangle; `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn square(x: i32, y: i32, side: u32) -> Self {
        Self::new(x, y, side, side)
    }
}

/// A 2D raster the renderer draws onto. Implementations clip anything outside their bounds.
pub trait Surface {
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// One pixel wide horizontal or vertical line from `from` to `to`, both inclusive.
    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb);
}
