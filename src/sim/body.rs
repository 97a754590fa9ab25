//! Shared physical state and the update/render contract
//!
//! The polygon and the ball carry the same kinematic state and differ only
//! in shape. The shared part lives in [`BodyState`]; the per-tick contract
//! both shapes satisfy is the [`Body`] trait.

use glam::Vec2;

use crate::draw::{Color, DrawSink};

/// Per-tick contract shared by the two concrete bodies.
pub trait Body {
    /// Advance the body by `dt` seconds. Must be a no-op while frozen.
    fn update(&mut self, dt: f32);

    /// Draw the body onto the sink in its current color.
    fn render(&self, sink: &mut dyn DrawSink);
}

/// Kinematic state common to polygon and ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Per-axis damping coefficient (1/s)
    pub friction: Vec2,
    /// Constant acceleration (px/s²)
    pub gravity: Vec2,
    pub color: Color,
    /// While set, physics integration is suspended; external code may
    /// still reposition the body (drag interaction).
    pub frozen: bool,
}

impl BodyState {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            friction: Vec2::ZERO,
            gravity: Vec2::ZERO,
            color,
            frozen: false,
        }
    }

    /// One explicit (forward) Euler step. Callers gate on `frozen`.
    ///
    /// The damping term `1 - friction*dt` can overshoot to negative for
    /// very large `friction*dt`; the host's dt clamp keeps it sane and the
    /// approximation is kept as-is.
    pub fn integrate(&mut self, dt: f32) {
        self.vel += self.gravity * dt;
        self.pos += self.vel * dt;
        self.vel *= Vec2::ONE - self.friction * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_gravity_then_position_then_damping() {
        let mut state = BodyState::new(Vec2::ZERO, Color::WHITE);
        state.gravity = Vec2::new(0.0, 100.0);
        state.friction = Vec2::new(0.5, 0.5);
        state.integrate(0.1);

        // vel picks up gravity first, position uses the new velocity,
        // damping applies last
        assert!((state.pos.y - 1.0).abs() < 1e-5);
        assert!((state.vel.y - 10.0 * 0.95).abs() < 1e-4);
        assert_eq!(state.vel.x, 0.0);
    }

    #[test]
    fn test_integrate_elementwise_friction() {
        let mut state = BodyState::new(Vec2::ZERO, Color::WHITE);
        state.vel = Vec2::new(100.0, 100.0);
        state.friction = Vec2::new(1.0, 0.0);
        state.integrate(0.1);

        assert!((state.vel.x - 90.0).abs() < 1e-4);
        assert!((state.vel.y - 100.0).abs() < 1e-4);
    }
}
