mod palette;
mod raster;
mod renderer;
mod surface;

pub use palette::{Palette, Rgb};
pub use raster::RasterSurface;
pub use renderer::{EYE_OFFSET, EYE_SIZE, eye_positions, render, render_with_palette};
pub use surface::{PixelRect, Surface};
