//! Interactive 2D gravity viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`Simulation`] and
//! implements [`eframe::App`] to drive, draw, and edit it through an egui
//! UI.

use crate::render::RenderContext;
use eframe::App;
use rand::rng;
use sim_core::{Config, Simulation, Vector2D, clock::FixedStepClock, types::BodyId};

/// Main application state for the interactive viewer.
///
/// The per-frame update is:
/// 1. Handle UI interactions (panels, clicks on the canvas).
/// 2. Resize the simulation bounds to the canvas.
/// 3. If `running`, ask the [`FixedStepClock`] how many ticks are due and
///    run them.
/// 4. Draw bodies and trails through a [`RenderContext`].
///
/// ### Fields
/// - `sim` - The simulation engine and its bodies.
/// - `cfg` - Editable copy of the configuration; pushed into `sim` when
///   the side panel changes it.
/// - `rng` - Random number generator used for spawning bodies.
/// - `clock` - Fixed-timestep scheduler for auto-run.
/// - `running` - Whether the simulation is currently auto-advancing.
/// - `show_trails` / `trail_points` - Trail drawing settings.
/// - `bounded_history` / `history_len` - UI state behind
///   `cfg.history_capacity`.
/// - `last_frame_time` - egui time of the previous frame.
/// - `last_ticks` - Ticks run during the previous frame (for display only).
pub struct Viewer {
    sim: Simulation,
    cfg: Config,

    rng: rand::rngs::ThreadRng,
    clock: FixedStepClock,

    running: bool,
    show_trails: bool,
    trail_points: usize,
    bounded_history: bool,
    history_len: usize,

    last_frame_time: f64,
    last_ticks: usize,
}

impl Viewer {
    /// Creates an empty viewer stepping with `cfg`.
    pub fn new(cfg: Config) -> Self {
        let clock = FixedStepClock::new(cfg.tick_interval, cfg.max_ticks_per_frame);
        let history_len = cfg.history_capacity.unwrap_or(500);

        Self {
            sim: Simulation::new(cfg.clone()),
            bounded_history: cfg.history_capacity.is_some(),
            history_len,
            cfg,
            rng: rng(),
            clock,
            running: true,
            show_trails: true,
            trail_points: 400,
            last_frame_time: 0.0,
            last_ticks: 0,
        }
    }

    /// Removes all bodies.
    fn clear(&mut self) {
        self.sim.clear();
        self.clock.reset();
    }

    /// Spawns a body with random mass/radius at rest at `pos`.
    fn spawn_at(&mut self, pos: Vector2D) -> Option<BodyId> {
        match self.sim.spawn_random(pos, Vector2D::ZERO, &mut self.rng) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("spawn at {pos} rejected: {e}");
                None
            }
        }
    }

    fn scatter(&mut self) {
        if let Err(e) = self.sim.scatter(&mut self.rng) {
            log::warn!("scatter rejected: {e}");
        }
    }

    /// Advances the simulation by a single tick.
    fn step_once(&mut self) {
        self.sim.step();
    }

    /// Pushes edits from the side panel into the simulation.
    fn apply_config(&mut self) {
        self.cfg.history_capacity = self.bounded_history.then_some(self.history_len);
        self.cfg.bounds = self.sim.config().bounds;

        if self.cfg != *self.sim.config() {
            if let Err(e) = self.cfg.validate() {
                log::warn!("ignoring config edit: {e}");
                self.cfg = self.sim.config().clone();
                return;
            }
            log::debug!("config updated: {:?}", self.cfg);
            self.clock.set_interval(self.cfg.tick_interval);
            self.clock.set_max_ticks(self.cfg.max_ticks_per_frame);
            self.sim.set_config(self.cfg.clone());
        }
    }

    /// Helper to draw a labeled [`egui::DragValue`].
    fn labeled_drag<N: egui::emath::Numeric>(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut N,
        range: std::ops::RangeInclusive<N>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, spawning).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                    self.clock.reset();
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Scatter").clicked() {
                    self.scatter();
                }

                if ui.button("Clear").clicked() {
                    self.clear();
                }

                ui.separator();
                ui.label("left click: spawn, right click: clear");
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("ticks/frame = {}", self.last_ticks));
                ui.label(format!("ticks = {}", self.sim.ticks()));
                ui.separator();
                ui.label(format!("bodies = {}", self.sim.len()));
                let degenerate = self.sim.non_finite_count();
                if degenerate > 0 {
                    ui.colored_label(
                        egui::Color32::LIGHT_RED,
                        format!("non-finite = {degenerate}"),
                    );
                }
            });
        });
    }

    /// Builds the right-hand configuration panel.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Physics");
                ui.add(
                    egui::Slider::new(&mut self.cfg.gravitational_constant, 1e-12..=10.0)
                        .logarithmic(true)
                        .text("G"),
                );
                ui.add(
                    egui::Slider::new(&mut self.cfg.dt, 1e-4..=1.0)
                        .logarithmic(true)
                        .text("dt"),
                );

                ui.separator();
                ui.label("Scheduling");
                ui.add(
                    egui::Slider::new(&mut self.cfg.tick_interval, 1e-4..=0.5)
                        .logarithmic(true)
                        .text("tick interval (s)"),
                );
                Self::labeled_drag(
                    ui,
                    "max ticks/frame:",
                    &mut self.cfg.max_ticks_per_frame,
                    1..=1000,
                    1.0,
                );

                ui.separator();
                ui.label("Spawning");
                let spawn = &mut self.cfg.spawn;
                Self::labeled_drag(ui, "min_mass:", &mut spawn.min_mass, 1..=u64::MAX, 1000.0);
                Self::labeled_drag(ui, "max_mass:", &mut spawn.max_mass, 1..=u64::MAX, 1000.0);
                Self::labeled_drag(ui, "min_radius:", &mut spawn.min_radius, 1..=200, 1.0);
                Self::labeled_drag(ui, "max_radius:", &mut spawn.max_radius, 1..=200, 1.0);
                Self::labeled_drag(ui, "scatter_count:", &mut spawn.scatter_count, 1..=500, 1.0);

                ui.separator();
                ui.label("Trails");
                ui.checkbox(&mut self.show_trails, "draw trails");
                Self::labeled_drag(ui, "drawn points:", &mut self.trail_points, 2..=10_000, 10.0);
                ui.checkbox(&mut self.bounded_history, "bounded history");
                ui.add_enabled_ui(self.bounded_history, |ui| {
                    Self::labeled_drag(ui, "capacity:", &mut self.history_len, 0..=100_000, 10.0);
                });

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                    self.bounded_history = false;
                }
            });
    }

    /// Builds the central canvas where bodies are drawn and spawned.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
            let render = RenderContext::new(response.rect, self.show_trails, self.trail_points);
            let painter = ui.painter_at(response.rect);

            let bounds = render.bounds();
            if bounds.is_valid() {
                self.sim.set_bounds(bounds);
            }

            if response.clicked()
                && let Some(p) = response.interact_pointer_pos()
            {
                self.spawn_at(render.screen_to_world(p));
            }

            if response.secondary_clicked() {
                self.clear();
            }

            let now = ctx.input(|i| i.time);
            let elapsed = now - self.last_frame_time;
            self.last_frame_time = now;

            if self.running {
                self.last_ticks = self.clock.advance(elapsed);
                for _ in 0..self.last_ticks {
                    self.step_once();
                }
                ctx.request_repaint();
            }

            render.draw_bodies(&painter, self.sim.bodies());
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.apply_config();
        self.ui_central_panel(ctx);
    }
}
