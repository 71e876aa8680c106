// sim.rs - The simulation state and its per-frame tick
//
// One `Simulation` owns the live grid, the clock and the generation counter.
// The shell calls `tick` once per displayed frame and feeds pointer and
// control events in between frames; nothing here blocks or spawns.

use std::time::Duration;

use log::{debug, trace};

use crate::clock::{RunState, SimClock};
use crate::config::{Config, SimConfig};
use crate::grid::Grid;
use crate::input::{CellMapping, PointerEvent};
use crate::render::RenderSnapshot;
use crate::rules;

pub struct Simulation {
    grid: Grid,
    clock: SimClock,
    mapping: CellMapping,
    limits: SimConfig,
    generation: u64,
}

impl Simulation {
    pub fn new(config: &Config) -> Self {
        let grid = Grid::new(config.surface.rows(), config.surface.cols());
        debug!("created {}x{} grid", grid.cols(), grid.rows());
        Self {
            grid,
            clock: SimClock::new(config.sim.initial_delay),
            mapping: CellMapping::new(&config.surface, &config.input),
            limits: config.sim,
            generation: 0,
        }
    }

    /// Advances the simulation by one displayed frame.
    ///
    /// At most one generation is computed, and only once the accumulated
    /// frame time reaches the delay while running. The snapshot always
    /// reflects the grid after any step, including edits made while paused.
    pub fn tick(&mut self, elapsed: Duration) -> RenderSnapshot<'_> {
        let stepped = self.clock.advance(elapsed);
        if stepped {
            self.grid = rules::step(&self.grid);
            self.generation += 1;
            trace!("generation {}", self.generation);
        }
        self.snapshot(stepped)
    }

    fn snapshot(&self, stepped: bool) -> RenderSnapshot<'_> {
        RenderSnapshot {
            grid: &self.grid,
            generation: self.generation,
            population: self.grid.population(),
            running: self.clock.is_running(),
            stepped,
            delay: self.clock.delay(),
        }
    }

    /// Starts or stops the simulation. Takes effect at the next tick.
    pub fn toggle(&mut self) -> RunState {
        let state = self.clock.toggle();
        debug!("simulation {:?}", state);
        state
    }

    /// Sets the step delay, clamped to the configured slider range.
    pub fn set_delay_ms(&mut self, ms: u64) {
        let delay = Duration::from_millis(ms).clamp(self.limits.min_delay, self.limits.max_delay);
        if delay != self.clock.delay() {
            debug!("delay set to {} ms", delay.as_millis());
        }
        self.clock.set_delay(delay);
    }

    /// Paints (or erases, with the modifier held) the cell under the
    /// pointer. Positions that map outside the grid are ignored.
    pub fn pointer_moved(&mut self, event: &PointerEvent) {
        let Some(alive) = event.paint_value() else {
            return;
        };
        let (x, y) = self.mapping.cell_at(event.x, event.y);
        if let Err(err) = self.grid.try_set_cell(x, y, alive) {
            debug!("ignoring pointer edit: {err}");
        }
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.grid.set_cell(x, y, alive);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn delay(&self) -> Duration {
        self.clock.delay()
    }

    pub fn delay_range(&self) -> (Duration, Duration) {
        (self.limits.min_delay, self.limits.max_delay)
    }

    pub fn run_state(&self) -> RunState {
        self.clock.state()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }
}
