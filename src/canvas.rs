use image::{Rgb, RgbImage};

/// In-memory pixel buffer an illustration is drawn into before encoding.
pub type Canvas = RgbImage;

/// Canvas width in pixels, shared by all illustrations.
pub const WIDTH: u32 = 800;

/// Canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Dark gray every canvas starts out filled with.
pub const BACKGROUND: Rgb<u8> = Rgb([26, 26, 26]);

/// Teal-green used for all foreground shapes.
pub const ACCENT: Rgb<u8> = Rgb([0, 255, 184]);

/// Slightly lighter gray for background grid lines.
pub const GRID_GRAY: Rgb<u8> = Rgb([40, 40, 40]);

/// White, used to outline data-point markers.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Create a blank canvas filled with the background color.
pub fn new_canvas() -> Canvas {
    RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND)
}
