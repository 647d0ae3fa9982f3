use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::games::snake::GameSettings;
use super::palette::Rgb;
use super::surface::{PixelRect, Surface};

/// In-memory RGBA surface, used for PNG previews and for checking rendered frames.
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn for_settings(settings: &GameSettings) -> Self {
        Self::new(settings.canvas_width(), settings.canvas_height())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image.get_pixel_checked(x, y).map(|px| {
            let [r, g, b, _] = px.0;
            Rgb { r, g, b }
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image
            .put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, 255]));
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let (width, height) = self.size();
        let x0 = (rect.x as i64).max(0);
        let y0 = (rect.y as i64).max(0);
        let x1 = (rect.x as i64 + rect.width as i64).min(width as i64);
        let y1 = (rect.y as i64 + rect.height as i64).min(height as i64);

        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        let (x0, y0) = (from.0 as i64, from.1 as i64);
        let (dx, dy) = (to.0 as i64 - x0, to.1 as i64 - y0);
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.put(x0, y0, color);
            return;
        }
        for i in 0..=steps {
            self.put(x0 + dx * i / steps, y0 + dy * i / steps, color);
        }
    }
}
