// input.rs - Pointer positions to grid cells

use crate::config::{InputConfig, SurfaceConfig};

/// A pointer move reported by the shell, in surface-local logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub primary_down: bool,
    /// Erase instead of paint (shift in the native shell).
    pub modifier: bool,
}

impl PointerEvent {
    /// State to paint under the pointer, or `None` if no button is held.
    pub fn paint_value(&self) -> Option<bool> {
        self.primary_down.then_some(!self.modifier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMapping {
    pub cell_size: u32,
    pub offset_cells: i64,
}

impl CellMapping {
    pub fn new(surface: &SurfaceConfig, input: &InputConfig) -> Self {
        Self {
            cell_size: surface.cell_size,
            offset_cells: input.offset_cells,
        }
    }

    /// Maps a position to signed cell coordinates. The result may lie
    /// outside the grid; bounds are the grid's concern.
    pub fn cell_at(&self, x: f32, y: f32) -> (i64, i64) {
        let size = self.cell_size.max(1) as f32;
        let cx = (x / size).floor() as i64 - self.offset_cells;
        let cy = (y / size).floor() as i64 - self.offset_cells;
        (cx, cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(offset_cells: i64) -> CellMapping {
        CellMapping::new(&SurfaceConfig::default(), &InputConfig { offset_cells })
    }

    #[test]
    fn test_surface_local_mapping() {
        let m = mapping(0);
        assert_eq!(m.cell_at(0.0, 0.0), (0, 0));
        assert_eq!(m.cell_at(9.9, 9.9), (0, 0));
        assert_eq!(m.cell_at(10.0, 25.0), (1, 2));
        assert_eq!(m.cell_at(599.5, 599.5), (59, 59));
    }

    #[test]
    fn test_bordered_mapping_shifts_one_cell() {
        let m = mapping(1);
        assert_eq!(m.cell_at(10.0, 10.0), (0, 0));
        assert_eq!(m.cell_at(25.0, 42.0), (1, 3));
        assert_eq!(m.cell_at(5.0, 5.0), (-1, -1));
    }

    #[test]
    fn test_negative_positions_floor() {
        assert_eq!(mapping(0).cell_at(-0.5, -10.5), (-1, -2));
    }

    #[test]
    fn test_paint_value() {
        let mut event = PointerEvent {
            x: 0.0,
            y: 0.0,
            primary_down: false,
            modifier: false,
        };
        assert_eq!(event.paint_value(), None);
        event.primary_down = true;
        assert_eq!(event.paint_value(), Some(true));
        event.modifier = true;
        assert_eq!(event.paint_value(), Some(false));
    }
}
