//! The bouncing ball

use glam::Vec2;

use super::body::{Body, BodyState};
use super::collision::{ball_edge_contact, reflect_velocity, surface_velocity};
use super::polygon::Polygon;
use crate::draw::{Color, DrawSink};

const BALL_COLOR: Color = Color::rgb(1.0, 0.39, 0.39);

/// A circular body bouncing inside the polygon.
#[derive(Debug, Clone)]
pub struct Ball {
    pub body: BodyState,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            body: BodyState::new(pos, BALL_COLOR),
            radius,
        }
    }

    /// Detect and resolve overlap against every polygon edge.
    ///
    /// Edges are processed independently, in the polygon's winding order
    /// (wrap edge first). When the ball overlaps several edges in the same
    /// tick each matching correction is applied in turn, so the last
    /// resolved edge determines the outcome. Known approximation, kept
    /// for determinism at high spin rates.
    ///
    /// The bounce is elastic in the polygon's rotating frame: velocity is
    /// reflected relative to the surface velocity at the contact point and
    /// then converted back, which is how spin transfers into the ball.
    pub fn collide(&mut self, polygon: &Polygon) {
        for (a, b) in polygon.edges() {
            let Some(contact) = ball_edge_contact(a, b, self.body.pos, self.radius) else {
                continue;
            };

            let surface = surface_velocity(contact.point, polygon.body.pos, polygon.omega);
            let relative = self.body.vel - surface;
            if relative.dot(contact.normal) >= 0.0 {
                // Already separating
                continue;
            }

            self.body.vel = reflect_velocity(relative, contact.normal) + surface;
            self.body.pos += contact.normal * contact.penetration;
        }
    }
}

impl Body for Ball {
    fn update(&mut self, dt: f32) {
        if self.body.frozen {
            return;
        }
        self.body.integrate(dt);
    }

    fn render(&self, sink: &mut dyn DrawSink) {
        sink.set_color(self.body.color);
        sink.draw_circle(self.body.pos, self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::new(Vec2::ZERO, 3, 100.0)
    }

    #[test]
    fn test_one_tick_of_gravity() {
        // Triangle boundary, ball at its center: every edge is 50 away,
        // far beyond the 20 radius, so nothing should collide.
        let polygon = triangle();
        let mut ball = Ball::new(Vec2::ZERO, 20.0);
        ball.body.gravity = Vec2::new(0.0, 9806.65);

        ball.update(0.016);
        assert!((ball.body.vel.y - 156.9064).abs() < 1e-2);
        assert_eq!(ball.body.vel.x, 0.0);
        assert!((ball.body.pos.y - 156.9064 * 0.016).abs() < 1e-3);

        let before = ball.clone();
        ball.collide(&polygon);
        assert_eq!(ball.body.pos, before.body.pos);
        assert_eq!(ball.body.vel, before.body.vel);
    }

    #[test]
    fn test_frozen_ball_ignores_update() {
        let mut ball = Ball::new(Vec2::new(5.0, 5.0), 20.0);
        ball.body.gravity = Vec2::new(0.0, 9806.65);
        ball.body.vel = Vec2::new(10.0, 0.0);
        ball.body.frozen = true;

        ball.update(0.016);
        assert_eq!(ball.body.pos, Vec2::new(5.0, 5.0));
        assert_eq!(ball.body.vel, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_resting_contact_resolves_to_radius() {
        // Static hexagon, ball pushed into the bottom edge and falling
        let mut polygon = Polygon::new(Vec2::ZERO, 6, 350.0);
        polygon.omega = 0.0;
        // Bottom edge (between the 240 and 300 degree vertices) sits at
        // the apothem: 350 * cos(30 deg) = 303.11
        let apothem = 350.0 * (std::f32::consts::PI / 6.0).cos();

        let mut ball = Ball::new(Vec2::new(0.0, -280.0), 50.0);
        ball.body.vel = Vec2::new(0.0, -100.0);
        ball.collide(&polygon);

        // Pushed back to exactly one radius from the edge
        let dist_to_edge = apothem - (-ball.body.pos.y);
        assert!((dist_to_edge - 50.0).abs() < 1e-2);
        // Velocity now separating (or at rest) along the inward normal
        assert!(ball.body.vel.dot(Vec2::new(0.0, 1.0)) >= 0.0);
        assert!((ball.body.vel.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_separating_contact_is_left_alone() {
        let polygon = Polygon::new(Vec2::ZERO, 6, 350.0);
        // Overlapping the bottom edge but already moving back inside
        let mut ball = Ball::new(Vec2::new(0.0, -280.0), 50.0);
        ball.body.vel = Vec2::new(0.0, 200.0);
        let before = ball.clone();

        ball.collide(&polygon);
        assert_eq!(ball.body.vel, before.body.vel);
        assert_eq!(ball.body.pos, before.body.pos);
    }

    #[test]
    fn test_midpoint_contact_unaffected_by_spin() {
        // At the edge midpoint the surface velocity is purely tangential,
        // and the bounce-in-rotating-frame formula hands that component
        // straight back: spin changes nothing there.
        let mut polygon = Polygon::new(Vec2::ZERO, 6, 350.0);
        polygon.omega = 2.0;

        let mut ball = Ball::new(Vec2::new(0.0, -280.0), 50.0);
        ball.body.vel = Vec2::new(0.0, -100.0);
        ball.collide(&polygon);

        assert!(ball.body.vel.x.abs() < 1e-2);
        assert!((ball.body.vel.y - 100.0).abs() < 1e-2);
    }

    #[test]
    fn test_off_center_contact_picks_up_spin() {
        // Away from the edge midpoint the surface velocity gains a normal
        // component; a surface closing at 200 px/s turns a 100 px/s
        // approach into a 2*200 + 100 = 500 px/s rebound.
        let mut polygon = Polygon::new(Vec2::ZERO, 6, 350.0);
        polygon.omega = 2.0;

        let mut ball = Ball::new(Vec2::new(100.0, -280.0), 50.0);
        ball.body.vel = Vec2::new(0.0, -100.0);
        ball.collide(&polygon);

        assert!(ball.body.vel.x.abs() < 1e-2);
        assert!((ball.body.vel.y - 500.0).abs() < 1e-1);
    }
}
