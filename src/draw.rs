//! Drawing-sink contract between the simulation and the host renderer
//!
//! The core only ever needs three primitives: a draw color, line segments
//! for the polygon outline, and a circle for the ball. Anything fancier
//! (clearing, overlays, buffering) is the host's business.

use glam::Vec2;

/// An RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Minimal rendering surface the host provides to the simulation.
///
/// Calls arrive in draw order within one frame; `set_color` applies to
/// every primitive until the next `set_color`.
pub trait DrawSink {
    fn set_color(&mut self, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2);
    fn draw_circle(&mut self, center: Vec2, radius: f32);
}

/// Sink that discards every call, for headless hosts and benchmarks.
pub struct NullSink;

impl DrawSink for NullSink {
    fn set_color(&mut self, _color: Color) {}
    fn draw_line(&mut self, _from: Vec2, _to: Vec2) {}
    fn draw_circle(&mut self, _center: Vec2, _radius: f32) {}
}
