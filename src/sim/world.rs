//! Simulation session: parameter store plus the two live bodies
//!
//! The world owns the validated [`Params`] store and the polygon/ball
//! pair built from it. Hosts feed it a clamped time delta each tick and
//! translate their raw input events into the mutators below; every
//! numeric change goes through the store first, so the live bodies only
//! ever carry in-range values.

use glam::Vec2;

use super::ball::Ball;
use super::body::Body;
use super::polygon::Polygon;
use crate::consts::MAX_DT;
use crate::draw::DrawSink;
use crate::params::Params;

pub struct World {
    pub params: Params,
    pub polygon: Polygon,
    pub ball: Ball,
    center: Vec2,
}

impl World {
    pub fn new(params: Params) -> Self {
        let center = Vec2::new(
            params.view_width() as f32 / 2.0,
            params.view_height() as f32 / 2.0,
        );
        let polygon = Self::spawn_polygon(&params, center);
        let ball = Self::spawn_ball(&params, center);
        log::info!(
            "world created: {}x{} viewport, {}-gon radius {}",
            params.view_width(),
            params.view_height(),
            params.poly_vertices(),
            params.poly_radius()
        );
        Self {
            params,
            polygon,
            ball,
            center,
        }
    }

    fn spawn_polygon(params: &Params, center: Vec2) -> Polygon {
        let mut polygon = Polygon::new(center, params.poly_vertices(), params.poly_radius());
        polygon.omega = params.poly_omega();
        polygon.body.friction = Vec2::new(params.poly_friction(), 0.0);
        polygon.body.gravity = Vec2::new(0.0, params.poly_gravity());
        polygon
    }

    fn spawn_ball(params: &Params, center: Vec2) -> Ball {
        let mut ball = Ball::new(center, params.ball_radius());
        ball.body.friction = Vec2::splat(params.ball_friction());
        ball.body.gravity = Vec2::new(0.0, params.ball_gravity());
        ball
    }

    /// Viewport center both bodies spawn at
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Rebuild both bodies from the current parameter values.
    pub fn reset(&mut self) {
        self.polygon = Self::spawn_polygon(&self.params, self.center);
        self.ball = Self::spawn_ball(&self.params, self.center);
        log::info!("simulation reset");
    }

    /// Advance one tick: polygon spin, ball integration, collision.
    ///
    /// The delta is re-clamped to `[0, MAX_DT]` so a stalled host cannot
    /// blow up the integration.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_DT);
        self.polygon.update(dt);
        self.ball.update(dt);
        self.ball.collide(&self.polygon);
    }

    /// Draw the polygon outline, then the ball. The host clears the frame.
    pub fn render(&self, sink: &mut dyn DrawSink) {
        self.polygon.render(sink);
        self.ball.render(sink);
    }

    /// Viewport resize: clamp the new size, then shift both bodies so they
    /// stay centered relative to the view.
    pub fn resized(&mut self, width: i32, height: i32) {
        self.params.set_view_width(width);
        self.params.set_view_height(height);
        let center = Vec2::new(
            self.params.view_width() as f32 / 2.0,
            self.params.view_height() as f32 / 2.0,
        );
        let delta = center - self.center;
        self.center = center;
        self.polygon.body.pos += delta;
        self.ball.body.pos += delta;
        log::info!(
            "viewport resized to {}x{}",
            self.params.view_width(),
            self.params.view_height()
        );
    }

    // === Input translation ===

    /// Drag the ball to `pos` with the pointer's velocity. The ball stops
    /// integrating while held; the polygon keeps spinning.
    pub fn drag_ball(&mut self, pos: Vec2, vel: Vec2) {
        self.ball.body.pos = pos;
        self.ball.body.vel = vel;
        self.ball.body.frozen = true;
        self.polygon.body.frozen = false;
    }

    /// Drag the polygon to `pos`, zeroing any drift it had.
    pub fn drag_polygon(&mut self, pos: Vec2) {
        self.polygon.body.pos = pos;
        self.polygon.body.vel = Vec2::ZERO;
        self.polygon.body.frozen = false;
        self.ball.body.frozen = false;
    }

    /// Pointer released: resume integration for both bodies.
    pub fn release(&mut self) {
        self.polygon.body.frozen = false;
        self.ball.body.frozen = false;
    }

    /// Change the vertex count. The polygon is respawned from the store,
    /// which also recenters it.
    pub fn set_polygon_vertices(&mut self, count: i32) {
        self.params.set_poly_vertices(count);
        self.polygon = Self::spawn_polygon(&self.params, self.center);
        log::debug!("polygon vertices set to {}", self.params.poly_vertices());
    }

    pub fn set_polygon_radius(&mut self, radius: f32) {
        self.params.set_poly_radius(radius);
        self.polygon.radius = self.params.poly_radius();
        log::debug!("polygon radius set to {}", self.params.poly_radius());
    }

    pub fn set_polygon_omega(&mut self, omega: f32) {
        self.params.set_poly_omega(omega);
        self.polygon.omega = self.params.poly_omega();
        log::debug!("polygon omega set to {}", self.params.poly_omega());
    }

    pub fn set_ball_radius(&mut self, radius: f32) {
        self.params.set_ball_radius(radius);
        self.ball.radius = self.params.ball_radius();
        log::debug!("ball radius set to {}", self.params.ball_radius());
    }
}
