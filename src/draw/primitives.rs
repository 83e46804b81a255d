use image::Rgb;
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::canvas::Canvas;

/// Fill the whole canvas with a vertical brightness gradient.
///
/// Each row is drawn as one full-width horizontal line; the shade for row
/// `y` is `base + span * y / height` (integer floor). The per-row fill is
/// intentional, it gives a banding-free gradient.
pub fn fill_vertical_gradient(canvas: &mut Canvas, base: u8, span: u32) {
    let height = canvas.height();
    let width = canvas.width() as f32;

    for y in 0..height {
        let shade = (base as u32 + span * y / height).min(255) as u8;
        let color = Rgb([shade, shade, shade]);
        draw_line_segment_mut(canvas, (0.0, y as f32), (width, y as f32), color);
    }
}

/// Draw single-pixel grid lines every `spacing` pixels, starting at the
/// top-left edge.
pub fn draw_grid(canvas: &mut Canvas, spacing: u32, color: Rgb<u8>) {
    let (width, height) = canvas.dimensions();

    for x in (0..width).step_by(spacing as usize) {
        draw_line_segment_mut(canvas, (x as f32, 0.0), (x as f32, height as f32), color);
    }
    for y in (0..height).step_by(spacing as usize) {
        draw_line_segment_mut(canvas, (0.0, y as f32), (width as f32, y as f32), color);
    }
}

/// Draw a line segment with the given stroke width.
///
/// imageproc lines are one pixel wide; thickness comes from stamping
/// parallel segments offset along the line's minor axis.
pub fn draw_thick_line(
    canvas: &mut Canvas,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: Rgb<u8>,
) {
    let half = (width / 2) as i32;
    let mostly_horizontal = (end.0 - start.0).abs() >= (end.1 - start.1).abs();

    for offset in -half..=(width as i32 - 1 - half) {
        let o = offset as f32;
        if mostly_horizontal {
            draw_line_segment_mut(canvas, (start.0, start.1 + o), (end.0, end.1 + o), color);
        } else {
            draw_line_segment_mut(canvas, (start.0 + o, start.1), (end.0 + o, end.1), color);
        }
    }
}

/// Draw an open polyline through the given points with the given stroke
/// width.
pub fn draw_polyline(canvas: &mut Canvas, points: &[(f32, f32)], width: u32, color: Rgb<u8>) {
    for pair in points.windows(2) {
        draw_thick_line(canvas, pair[0], pair[1], width, color);
    }
}

/// Draw a filled circle with a contrasting outline, used to mark data
/// points.
pub fn draw_marker(
    canvas: &mut Canvas,
    center: (i32, i32),
    radius: i32,
    fill: Rgb<u8>,
    outline: Rgb<u8>,
) {
    draw_filled_circle_mut(canvas, center, radius, fill);
    draw_hollow_circle_mut(canvas, center, radius, outline);
}

/// Draw a circle outline of the given stroke width as concentric one-pixel
/// circles centered on `radius`.
pub fn draw_ring(canvas: &mut Canvas, center: (i32, i32), radius: i32, width: u32, color: Rgb<u8>) {
    let half = (width / 2) as i32;

    for r in (radius - half)..=(radius - half + width as i32 - 1) {
        draw_hollow_circle_mut(canvas, center, r, color);
    }
}

/// Draw a rectangle outline of the given stroke width between two
/// corner-inclusive points, strokes nested inward from the outer edge.
pub fn draw_outlined_rect(
    canvas: &mut Canvas,
    top_left: (i32, i32),
    bottom_right: (i32, i32),
    width: u32,
    color: Rgb<u8>,
) {
    for inset in 0..width as i32 {
        let rect = Rect::at(top_left.0 + inset, top_left.1 + inset).of_size(
            (bottom_right.0 - top_left.0 + 1 - 2 * inset) as u32,
            (bottom_right.1 - top_left.1 + 1 - 2 * inset) as u32,
        );
        draw_hollow_rect_mut(canvas, rect, color);
    }
}

/// Draw a filled triangle.
pub fn draw_filled_triangle(canvas: &mut Canvas, vertices: [(i32, i32); 3], color: Rgb<u8>) {
    let polygon = [
        Point::new(vertices[0].0, vertices[0].1),
        Point::new(vertices[1].0, vertices[1].1),
        Point::new(vertices[2].0, vertices[2].1),
    ];
    draw_polygon_mut(canvas, &polygon, color);
}
