// lib.rs - Conway's Game of Life on a fixed, bounded grid
//
// The deterministic core: grid state, the B3/S23 step, the frame clock and
// the rendering contract. Presentation lives in the `grid_display` shell.

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod render;
pub mod rules;
pub mod sim;

pub use clock::{RunState, SimClock};
pub use config::Config;
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use input::{CellMapping, PointerEvent};
pub use render::{RenderSnapshot, Surface};
pub use sim::Simulation;
