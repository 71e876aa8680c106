// config.rs - Startup configuration for the simulation and its drawing surface
//
// Everything here is fixed once the program starts; the only runtime knob is
// the step delay, which lives in the clock.

use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub surface: SurfaceConfig,
    pub sim: SimConfig,
    pub input: InputConfig,
    pub gfx: GfxConfig,
}

/// Size of the drawing surface in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}
impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            cell_size: 10,
        }
    }
}
impl SurfaceConfig {
    pub fn rows(&self) -> usize {
        (self.height / self.cell_size.max(1)) as usize
    }

    pub fn cols(&self) -> usize {
        (self.width / self.cell_size.max(1)) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub initial_delay: Duration,
    /// Lower bound of the delay slider.
    pub min_delay: Duration,
    /// Upper bound of the delay slider.
    pub max_delay: Duration,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            min_delay: Duration::ZERO,
            max_delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    /// Whole cells subtracted from both axes after mapping a pointer position.
    ///
    /// Positions arrive relative to the surface origin, so no shift is needed.
    /// A value of 1 compensates for a one-cell border around the surface.
    pub offset_cells: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Rgb = Rgb(0xFF, 0x00, 0x00);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GfxConfig {
    pub background: Rgb,
    pub line_color: Rgb,
    pub cell_color: Rgb,
    pub line_width: f32,
}
impl Default for GfxConfig {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            line_color: Rgb::BLACK,
            cell_color: Rgb::RED,
            line_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surface_is_60_by_60() {
        let surface = SurfaceConfig::default();
        assert_eq!(surface.rows(), 60);
        assert_eq!(surface.cols(), 60);
    }

    #[test]
    fn test_zero_cell_size_does_not_divide_by_zero() {
        let surface = SurfaceConfig {
            width: 30,
            height: 20,
            cell_size: 0,
        };
        assert_eq!(surface.cols(), 30);
        assert_eq!(surface.rows(), 20);
    }

    #[test]
    fn test_default_delay_within_slider_range() {
        let sim = SimConfig::default();
        assert!(sim.min_delay <= sim.initial_delay);
        assert!(sim.initial_delay <= sim.max_delay);
    }
}
