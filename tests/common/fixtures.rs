use std::path::Path;

use newsgen::Renderer;

/// Creates a renderer writing into a fresh temporary directory.
/// Returns both; keep the TempDir alive for as long as the renderer is used.
pub fn create_test_renderer() -> (Renderer, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let renderer = Renderer::new(dir.path().join("news"));
    (renderer, dir)
}

/// Decode a saved illustration back into RGB pixels.
pub fn load_saved(path: &Path) -> image::RgbImage {
    image::ImageReader::open(path)
        .expect("Failed to open saved image")
        .decode()
        .expect("Failed to decode saved image")
        .to_rgb8()
}
