// ui.rs - Frame loop, controls and pointer wiring
//
// Every egui frame is one tick: measure time since the previous frame, apply
// the pointer edit, step if due, redraw the whole canvas and ask for the next
// frame straight away.

use eframe::egui;
use egui::Vec2;
use std::time::Instant;

use conway::{Config, PointerEvent, Simulation};

use crate::canvas::PainterSurface;

pub struct GridApp {
    sim: Simulation,
    config: Config,
    last_frame: Instant,
}

impl GridApp {
    pub fn new(config: Config) -> Self {
        Self {
            sim: Simulation::new(&config),
            config,
            last_frame: Instant::now(),
        }
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                if ui.button(self.sim.run_state().button_label()).clicked() {
                    self.sim.toggle();
                }

                ui.separator();

                ui.label("Delay:");
                let (min, max) = self.sim.delay_range();
                let mut delay_ms = self.sim.delay().as_millis() as u64;
                let range = min.as_millis() as u64..=max.as_millis() as u64;
                if ui.add(egui::Slider::new(&mut delay_ms, range).suffix(" ms")).changed() {
                    self.sim.set_delay_ms(delay_ms);
                }
            });

            ui.separator();

            let surface = self.config.surface;
            let size = Vec2::new(surface.width as f32, surface.height as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
            let origin = response.rect.min;

            // Paint while dragging across the canvas; shift erases.
            if let Some(pos) = response.hover_pos() {
                let (primary_down, modifier, moving) = ui.input(|i| {
                    (i.pointer.primary_down(), i.modifiers.shift, i.pointer.is_moving())
                });
                if moving || response.drag_started() {
                    self.sim.pointer_moved(&PointerEvent {
                        x: pos.x - origin.x,
                        y: pos.y - origin.y,
                        primary_down,
                        modifier,
                    });
                }
            }

            let snapshot = self.sim.tick(elapsed);
            snapshot.draw(&surface, &self.config.gfx, &mut PainterSurface::new(&painter, origin));

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", snapshot.generation));
                ui.label(format!("Live cells: {}", snapshot.population));
                ui.label(format!("Delay: {} ms", snapshot.delay.as_millis()));
            });
        });

        // Perpetual frame loop
        ctx.request_repaint();
    }
}
