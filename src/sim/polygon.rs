//! The rotating regular-polygon boundary

use glam::Vec2;
use std::f32::consts::TAU;

use super::body::{Body, BodyState};
use crate::draw::{Color, DrawSink};
use crate::wrap_angle;

const POLY_COLOR: Color = Color::WHITE;

/// A regular N-gon spinning around its own center.
///
/// The vertex ring is a derived cache: it is fully recomputed from
/// `(pos, radius, angle)` on every unfrozen tick and never patched
/// incrementally.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub body: BodyState,
    pub radius: f32,
    /// Angular velocity (rad/s)
    pub omega: f32,
    /// Accumulated rotation, kept within `(-2π, 2π)`
    pub angle: f32,
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(pos: Vec2, vertex_count: u32, radius: f32) -> Self {
        let mut polygon = Self {
            body: BodyState::new(pos, POLY_COLOR),
            radius,
            omega: 0.0,
            angle: 0.0,
            vertices: vec![Vec2::ZERO; vertex_count as usize],
        };
        polygon.rebuild_vertices();
        polygon
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Edges in winding order, starting with the wrap-around pair
    /// `(last, first)`. Collision resolution depends on this order when
    /// the ball overlaps several edges in one tick.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            let a = self.vertices[(i + n - 1) % n];
            let b = self.vertices[i];
            (a, b)
        })
    }

    fn rebuild_vertices(&mut self) {
        let n = self.vertices.len();
        let pos = self.body.pos;
        let radius = self.radius;
        let angle = self.angle;
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            let theta = angle + (i as f32) * (TAU / n as f32);
            *vertex = pos + radius * Vec2::new(theta.cos(), theta.sin());
        }
    }
}

impl Body for Polygon {
    fn update(&mut self, dt: f32) {
        if self.body.frozen {
            return;
        }
        self.body.integrate(dt);
        self.angle = wrap_angle(self.angle + self.omega * dt);
        self.rebuild_vertices();
    }

    fn render(&self, sink: &mut dyn DrawSink) {
        sink.set_color(self.body.color);
        for (a, b) in self.edges() {
            sink.draw_line(a, b);
        }
    }
}
