// canvas.rs - egui painter as a drawing surface

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2};

use conway::Surface;
use conway::config::Rgb;

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Draws in surface-local units offset by the canvas origin.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn rect(&self, x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::from_min_size(self.origin + Vec2::new(x, y), Vec2::new(width, height))
    }

    fn point(&self, (x, y): (f32, f32)) -> Pos2 {
        pos2(self.origin.x + x, self.origin.y + y)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgb) {
        self.painter.rect_filled(self.rect(x, y, width, height), 0.0, color(fill));
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, line: Rgb) {
        self.painter.line_segment(
            [self.point(from), self.point(to)],
            Stroke::new(width, color(line)),
        );
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgb) {
        self.painter.rect_filled(self.rect(x, y, width, height), 0.0, color(fill));
    }
}
