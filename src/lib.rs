//! Spinball - a ball bouncing inside a spinning polygon
//!
//! Core modules:
//! - `sim`: Physics simulation (bodies, collisions, world/session state)
//! - `params`: Range-validated simulation parameters
//! - `draw`: Minimal drawing-sink contract the host renderer implements
//!
//! The crate is deliberately host-agnostic: windowing, event polling and
//! actual rasterization live outside. The host feeds a clamped time delta
//! and translated input values in, and receives draw calls through
//! [`draw::DrawSink`].

pub mod draw;
pub mod params;
pub mod sim;

pub use draw::{Color, DrawSink, NullSink};
pub use params::Params;
pub use sim::{Ball, Body, Polygon, World};

/// Simulation constants shared with the host loop
pub mod consts {
    /// Maximum time delta per tick (seconds). Bounds integration error
    /// when the host stalls (window move/resize, tab in background).
    pub const MAX_DT: f32 = 0.1;
    /// Nominal fixed timestep for hosts that drive the sim at 120 Hz
    pub const SIM_DT: f32 = 1.0 / 120.0;
}

/// Wrap an angle into `(-2π, 2π)` by repeated full turns.
///
/// Loop-style on purpose: a fast spin can cross several full turns in one
/// tick and each is removed one at a time, the same way the accumulated
/// angle is built up.
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle >= TAU {
        angle -= TAU;
    }
    while angle <= -TAU {
        angle += TAU;
    }
    angle
}
