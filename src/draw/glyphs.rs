use anyhow::Result;
use image::Rgb;

use crate::canvas::Canvas;
use crate::draw::primitives;

/// Glyph cell width on the design grid.
const GLYPH_WIDTH: f32 = 4.0;

/// Horizontal gap between glyph cells on the design grid.
const GLYPH_GAP: f32 = 1.5;

/// Line-segment strokes for a glyph on a 4x6 design grid, or None for
/// characters the illustrations never use.
fn glyph_strokes(c: char) -> Option<&'static [((f32, f32), (f32, f32))]> {
    match c {
        '0' => Some(&[
            ((0.0, 0.0), (4.0, 0.0)),
            ((4.0, 0.0), (4.0, 6.0)),
            ((4.0, 6.0), (0.0, 6.0)),
            ((0.0, 6.0), (0.0, 0.0)),
        ]),
        '1' => Some(&[
            ((2.0, 0.0), (2.0, 6.0)),
            ((1.0, 1.0), (2.0, 0.0)),
            ((1.0, 6.0), (3.0, 6.0)),
        ]),
        'K' => Some(&[
            ((0.0, 0.0), (0.0, 6.0)),
            ((0.0, 3.0), (4.0, 0.0)),
            ((0.0, 3.0), (4.0, 6.0)),
        ]),
        _ => None,
    }
}

/// Draw a short text label as stroke glyphs, scaled up from the design
/// grid. `origin` is the label's top-left corner.
///
/// Only the characters the illustrations actually need have strokes;
/// anything else is an error.
pub fn draw_label(
    canvas: &mut Canvas,
    origin: (f32, f32),
    text: &str,
    scale: f32,
    stroke: u32,
    color: Rgb<u8>,
) -> Result<()> {
    let mut pen_x = origin.0;

    for c in text.chars() {
        let strokes =
            glyph_strokes(c).ok_or_else(|| anyhow::anyhow!("No glyph strokes for character {:?}", c))?;

        for &((x0, y0), (x1, y1)) in strokes {
            primitives::draw_thick_line(
                canvas,
                (pen_x + x0 * scale, origin.1 + y0 * scale),
                (pen_x + x1 * scale, origin.1 + y1 * scale),
                stroke,
                color,
            );
        }

        pen_x += (GLYPH_WIDTH + GLYPH_GAP) * scale;
    }

    Ok(())
}
