use anyhow::Result;

use crate::canvas::{ACCENT, Canvas, GRID_GRAY, WHITE};
use crate::draw::{glyphs, primitives};
use crate::render::{DrawStep, Illustration, RenderContext};

/// Stroke width shared by all outlined foreground shapes
const STROKE_WIDTH: u32 = 3;

/// Data points of the ascending funding trend line
const TREND_POINTS: [(f32, f32); 6] = [
    (100.0, 300.0),
    (200.0, 250.0),
    (300.0, 200.0),
    (400.0, 150.0),
    (500.0, 100.0),
    (600.0, 50.0),
];

/// Vertical brightness gradient over the whole canvas
pub struct GradientBackdrop {
    pub base_shade: u8,
    pub span: u32,
}

impl DrawStep for GradientBackdrop {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        primitives::fill_vertical_gradient(canvas, self.base_shade, self.span);
        Ok(())
    }

    fn name(&self) -> &str {
        "Gradient Backdrop"
    }
}

/// Accent polyline through a list of data points
pub struct TrendLine {
    pub points: Vec<(f32, f32)>,
    pub width: u32,
}

impl DrawStep for TrendLine {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        primitives::draw_polyline(canvas, &self.points, self.width, ACCENT);
        Ok(())
    }

    fn name(&self) -> &str {
        "Trend Line"
    }
}

/// White-outlined accent circle at each data point
pub struct TrendMarkers {
    pub points: Vec<(i32, i32)>,
    pub radius: i32,
}

impl DrawStep for TrendMarkers {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        for &center in &self.points {
            primitives::draw_marker(canvas, center, self.radius, ACCENT, WHITE);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Trend Markers"
    }
}

/// Dark single-pixel grid lines across the whole canvas
pub struct GridOverlay {
    pub spacing: u32,
}

impl DrawStep for GridOverlay {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        primitives::draw_grid(canvas, self.spacing, GRID_GRAY);
        Ok(())
    }

    fn name(&self) -> &str {
        "Grid Overlay"
    }
}

/// Accent rectangle outline between two corner-inclusive points
pub struct OutlinedBox {
    pub top_left: (i32, i32),
    pub bottom_right: (i32, i32),
}

impl DrawStep for OutlinedBox {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        primitives::draw_outlined_rect(
            canvas,
            self.top_left,
            self.bottom_right,
            STROKE_WIDTH,
            ACCENT,
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Outlined Box"
    }
}

/// A set of straight accent strokes (cross marks, handshake arms, ...)
pub struct SegmentStrokes {
    pub segments: Vec<((f32, f32), (f32, f32))>,
}

impl DrawStep for SegmentStrokes {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        for &(start, end) in &self.segments {
            primitives::draw_thick_line(canvas, start, end, STROKE_WIDTH, ACCENT);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Segment Strokes"
    }
}

/// Accent circle outline
pub struct RingOutline {
    pub center: (i32, i32),
    pub radius: i32,
}

impl DrawStep for RingOutline {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        primitives::draw_ring(canvas, self.center, self.radius, STROKE_WIDTH, ACCENT);
        Ok(())
    }

    fn name(&self) -> &str {
        "Ring Outline"
    }
}

/// Short accent text label rendered as stroke glyphs
pub struct Label {
    pub origin: (f32, f32),
    pub text: String,
    pub scale: f32,
    pub stroke: u32,
}

impl DrawStep for Label {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        glyphs::draw_label(canvas, self.origin, &self.text, self.scale, self.stroke, ACCENT)
    }

    fn name(&self) -> &str {
        "Text Label"
    }
}

/// Small filled accent triangle
pub struct FilledTriangle {
    pub vertices: [(i32, i32); 3],
}

impl DrawStep for FilledTriangle {
    fn draw(&self, canvas: &mut Canvas, _context: &RenderContext) -> Result<()> {
        primitives::draw_filled_triangle(canvas, self.vertices, ACCENT);
        Ok(())
    }

    fn name(&self) -> &str {
        "Filled Triangle"
    }
}

/// Funding announcement: ascending trend line over a subtle vertical
/// gradient, data points marked with outlined circles.
pub fn funding() -> Illustration {
    let markers = TREND_POINTS
        .iter()
        .map(|&(x, y)| (x as i32, y as i32))
        .collect();

    Illustration::new("funding", "funding.jpg")
        .add_step(Box::new(GradientBackdrop {
            base_shade: 26,
            span: 20,
        }))
        .add_step(Box::new(TrendLine {
            points: TREND_POINTS.to_vec(),
            width: STROKE_WIDTH,
        }))
        .add_step(Box::new(TrendMarkers {
            points: markers,
            radius: 5,
        }))
}

/// Strategy diagram: outlined box with crossing strokes over a dark grid.
pub fn strategy() -> Illustration {
    Illustration::new("strategy", "strategy.jpg")
        .add_step(Box::new(GridOverlay { spacing: 40 }))
        .add_step(Box::new(OutlinedBox {
            top_left: (200, 100),
            bottom_right: (600, 300),
        }))
        .add_step(Box::new(SegmentStrokes {
            segments: vec![
                ((300.0, 100.0), (500.0, 300.0)),
                ((500.0, 100.0), (300.0, 300.0)),
            ],
        }))
}

/// Partnership icon: a ring with three handshake strokes.
pub fn partnership() -> Illustration {
    Illustration::new("partnership", "partnership.jpg")
        .add_step(Box::new(RingOutline {
            center: (400, 200),
            radius: 100,
        }))
        .add_step(Box::new(SegmentStrokes {
            segments: vec![
                ((350.0, 200.0), (450.0, 200.0)),
                ((350.0, 200.0), (300.0, 250.0)),
                ((450.0, 200.0), (500.0, 250.0)),
            ],
        }))
}

/// User-growth icon: a ring around a "100K" label with an upward arrow
/// above it.
pub fn users() -> Illustration {
    Illustration::new("users", "users.jpg")
        .add_step(Box::new(RingOutline {
            center: (400, 200),
            radius: 100,
        }))
        .add_step(Box::new(Label {
            origin: (350.0, 150.0),
            text: "100K".to_string(),
            scale: 4.0,
            stroke: 2,
        }))
        .add_step(Box::new(FilledTriangle {
            vertices: [(400, 50), (380, 80), (420, 80)],
        }))
}

/// All four illustrations in their fixed generation order.
pub fn all() -> Vec<Illustration> {
    vec![funding(), strategy(), partnership(), users()]
}
