// render.rs - Drawing the grid onto an abstract surface
//
// Rendering only reads the grid. Surfaces are infallible from the
// simulation's point of view; a backend that can fail deals with it itself.

use std::time::Duration;

use crate::config::{GfxConfig, Rgb, SurfaceConfig};
use crate::grid::Grid;

/// The drawing primitives a shell has to provide, in logical units.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgb);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);
}

/// Everything a shell needs to present one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub grid: &'a Grid,
    pub generation: u64,
    pub population: usize,
    pub running: bool,
    /// Whether this frame computed a new generation.
    pub stepped: bool,
    pub delay: Duration,
}

impl RenderSnapshot<'_> {
    pub fn draw(&self, surface: &SurfaceConfig, gfx: &GfxConfig, target: &mut impl Surface) {
        draw(self.grid, surface, gfx, target);
    }
}

/// Clears the surface, draws a line on every inner cell boundary, then fills
/// every live cell.
pub fn draw(grid: &Grid, surface: &SurfaceConfig, gfx: &GfxConfig, target: &mut impl Surface) {
    let width = surface.width as f32;
    let height = surface.height as f32;
    let cell = surface.cell_size.max(1);

    target.clear_rect(0.0, 0.0, width, height, gfx.background);

    for x in (cell..surface.width).step_by(cell as usize) {
        let x = x as f32;
        target.stroke_line((x, 0.0), (x, height), gfx.line_width, gfx.line_color);
    }
    for y in (cell..surface.height).step_by(cell as usize) {
        let y = y as f32;
        target.stroke_line((0.0, y), (width, y), gfx.line_width, gfx.line_color);
    }

    let size = cell as f32;
    for (x, y) in grid.live_cells() {
        target.fill_rect(x as f32 * size, y as f32 * size, size, size, gfx.cell_color);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, width: f32, height: f32, color: Rgb },
    Line { from: (f32, f32), to: (f32, f32), width: f32, color: Rgb },
    Fill { x: f32, y: f32, width: f32, height: f32, color: Rgb },
}

/// A surface that records what was drawn, for headless use.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Fill { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.commands.push(DrawCommand::Clear { x, y, width, height, color });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgb) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.commands.push(DrawCommand::Fill { x, y, width, height, color });
    }
}
