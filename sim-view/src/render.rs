//! Drawing of simulation state onto an egui canvas.
//!
//! [`RenderContext`] carries everything a frame needs to draw: the canvas
//! rectangle and the trail settings. The viewer builds one per frame and
//! passes it down, so nothing here holds global state or touches the
//! simulation beyond reading bodies.

use glam::DVec2;
use sim_core::{Body, Bounds, Vector2D, body_set::BodySet};

const BODY_COLOR: egui::Color32 = egui::Color32::WHITE;
const TRAIL_COLOR: egui::Color32 = egui::Color32::from_gray(110);

/// Per-frame drawing parameters.
///
/// Simulation space has its origin at the top-left corner of `rect` with
/// y pointing down, one unit per point, so the simulation bounds are the
/// canvas size.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    pub rect: egui::Rect,
    pub show_trails: bool,
    /// Most recent history points drawn per body.
    pub trail_points: usize,
}

impl RenderContext {
    pub fn new(rect: egui::Rect, show_trails: bool, trail_points: usize) -> Self {
        Self {
            rect,
            show_trails,
            trail_points,
        }
    }

    /// Simulation bounds matching the canvas.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rect.width() as f64, self.rect.height() as f64)
    }

    pub fn world_to_screen(&self, p: Vector2D) -> egui::Pos2 {
        let origin = DVec2::new(self.rect.min.x as f64, self.rect.min.y as f64);
        let s = origin + DVec2::from(p);
        egui::pos2(s.x as f32, s.y as f32)
    }

    pub fn screen_to_world(&self, p: egui::Pos2) -> Vector2D {
        let local = DVec2::new(p.x as f64, p.y as f64)
            - DVec2::new(self.rect.min.x as f64, self.rect.min.y as f64);
        local.into()
    }

    /// Draws every body, trails first so bodies sit on top.
    ///
    /// Bodies whose state went non-finite are skipped.
    pub fn draw_bodies(&self, painter: &egui::Painter, bodies: &BodySet) {
        if self.show_trails {
            for body in bodies.iter().filter(|b| b.is_finite()) {
                self.draw_trail(painter, body);
            }
        }
        for body in bodies.iter().filter(|b| b.is_finite()) {
            let p = self.world_to_screen(body.position());
            painter.circle_filled(p, body.radius() as f32, BODY_COLOR);
        }
    }

    fn draw_trail(&self, painter: &egui::Painter, body: &Body) {
        let mut points: Vec<egui::Pos2> = body
            .history()
            .iter()
            .rev()
            .take(self.trail_points)
            .copied()
            .filter(|p| p.is_finite())
            .map(|p| self.world_to_screen(p))
            .collect();
        if points.len() < 2 {
            return;
        }
        points.reverse();
        painter.add(egui::Shape::line(points, egui::Stroke::new(1.0, TRAIL_COLOR)));
    }
}
