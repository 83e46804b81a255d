pub mod canvas;
pub mod draw;
pub mod error;
pub mod illustrations;
pub mod render;

pub use canvas::{ACCENT, BACKGROUND, Canvas, HEIGHT, WIDTH};
pub use error::ImageGenerationError;
pub use render::{DrawStep, Illustration, RenderContext, Renderer};
