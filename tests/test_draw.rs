use newsgen::canvas::{self, ACCENT, BACKGROUND};
use newsgen::draw::{glyphs, primitives};

#[test]
fn test_gradient_shade_formula() {
    let mut canvas = canvas::new_canvas();
    primitives::fill_vertical_gradient(&mut canvas, 26, 20);

    for (y, shade) in [(0u32, 26u8), (100, 31), (399, 45)] {
        let pixel = canvas.get_pixel(400, y);
        assert_eq!(pixel.0, [shade, shade, shade], "wrong shade at row {}", y);
    }
}

#[test]
fn test_thick_line_is_three_pixels_wide() {
    let mut canvas = canvas::new_canvas();
    primitives::draw_thick_line(&mut canvas, (100.0, 200.0), (300.0, 200.0), 3, ACCENT);

    for y in 199..=201 {
        assert_eq!(canvas.get_pixel(200, y), &ACCENT);
    }
    assert_eq!(canvas.get_pixel(200, 198), &BACKGROUND);
    assert_eq!(canvas.get_pixel(200, 202), &BACKGROUND);
}

#[test]
fn test_ring_stroke_spans_radius() {
    let mut canvas = canvas::new_canvas();
    primitives::draw_ring(&mut canvas, (400, 200), 100, 3, ACCENT);

    // Stroke width 3 centered on the nominal radius
    for r in 99..=101u32 {
        assert_eq!(canvas.get_pixel(400, 200 - r), &ACCENT);
    }
    assert_eq!(canvas.get_pixel(400, 98), &BACKGROUND);
    assert_eq!(canvas.get_pixel(400, 103), &BACKGROUND);
}

#[test]
fn test_filled_triangle_covers_interior() {
    let mut canvas = canvas::new_canvas();
    primitives::draw_filled_triangle(&mut canvas, [(400, 50), (380, 80), (420, 80)], ACCENT);

    assert_eq!(canvas.get_pixel(400, 70), &ACCENT);
    assert_eq!(canvas.get_pixel(400, 45), &BACKGROUND);
    assert_eq!(canvas.get_pixel(370, 70), &BACKGROUND);
}

#[test]
fn test_label_rejects_unknown_characters() {
    let mut canvas = canvas::new_canvas();

    let err = glyphs::draw_label(&mut canvas, (10.0, 10.0), "1%", 4.0, 2, ACCENT).unwrap_err();
    assert!(err.to_string().contains('%'));
}

#[test]
fn test_label_draws_supported_characters() -> anyhow::Result<()> {
    let mut canvas = canvas::new_canvas();
    glyphs::draw_label(&mut canvas, (100.0, 100.0), "100K", 4.0, 2, ACCENT)?;

    // Stem of the '1' sits two grid units into its cell
    assert_eq!(canvas.get_pixel(108, 110), &ACCENT);
    // Top edge of the first '0' (second cell starts 5.5 grid units in)
    assert_eq!(canvas.get_pixel(126, 100), &ACCENT);

    Ok(())
}
