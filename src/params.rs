//! Range-validated simulation parameters
//!
//! One `Params` instance lives for the whole session and is passed
//! explicitly into world construction and input handlers. Every setter
//! silently clamps its input into a fixed range - there is no rejection
//! path, so a value read back from the store is always displayable as-is.

use std::fmt::Write as _;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Valid ranges for every tunable value
pub mod limits {
    use std::ops::RangeInclusive;

    pub const VIEW_WIDTH: RangeInclusive<i32> = 480..=1920;
    pub const VIEW_HEIGHT: RangeInclusive<i32> = 270..=1080;
    pub const POLY_VERTICES: RangeInclusive<i32> = 3..=36;
    pub const POLY_RADIUS: RangeInclusive<f32> = 100.0..=500.0;
    pub const POLY_OMEGA: RangeInclusive<f32> = -100.0..=100.0;
    pub const POLY_FRICTION: RangeInclusive<f32> = 0.0..=10.0;
    pub const POLY_GRAVITY: RangeInclusive<f32> = 0.0..=9999.0;
    pub const BALL_RADIUS: RangeInclusive<f32> = 25.0..=250.0;
    pub const BALL_FRICTION: RangeInclusive<f32> = 0.0..=10.0;
    pub const BALL_GRAVITY: RangeInclusive<f32> = 0.0..=9999.0;
}

#[inline]
fn clamp_i32(value: i32, range: RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

#[inline]
fn clamp_f32(value: f32, range: RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

/// The validated parameter store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    view_width: u32,
    view_height: u32,
    poly_vertices: u32,
    poly_radius: f32,
    poly_omega: f32,
    poly_friction: f32,
    poly_gravity: f32,
    ball_radius: f32,
    ball_friction: f32,
    ball_gravity: f32,
}

impl Default for Params {
    fn default() -> Self {
        let mut params = Self {
            view_width: 1280,
            view_height: 720,
            poly_vertices: 6,
            poly_radius: 350.0,
            poly_omega: 2.09,
            poly_friction: 0.0,
            poly_gravity: 0.0,
            ball_radius: 100.0,
            ball_friction: 0.25,
            ball_gravity: 9806.65,
        };
        params.init();
        params
    }
}

impl Params {
    /// Re-apply every current value through its own setter, so that any
    /// value injected from outside (deserialization, direct construction)
    /// ends up back in range.
    pub fn init(&mut self) {
        self.set_view_width(self.view_width as i32);
        self.set_view_height(self.view_height as i32);
        self.set_poly_vertices(self.poly_vertices as i32);
        self.set_poly_radius(self.poly_radius);
        self.set_poly_omega(self.poly_omega);
        self.set_poly_friction(self.poly_friction);
        self.set_poly_gravity(self.poly_gravity);
        self.set_ball_radius(self.ball_radius);
        self.set_ball_friction(self.ball_friction);
        self.set_ball_gravity(self.ball_gravity);
    }

    /// Deterministic human-readable listing of all current values.
    ///
    /// Diagnostics only - never parsed back in.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut line = |name: &str, value: String| {
            let dots = ".".repeat(16usize.saturating_sub(name.len()));
            let _ = writeln!(out, "{name} {dots} {value}");
        };
        line("view_width", self.view_width.to_string());
        line("view_height", self.view_height.to_string());
        line("poly_vertices", self.poly_vertices.to_string());
        line("poly_radius", self.poly_radius.to_string());
        line("poly_omega", self.poly_omega.to_string());
        line("poly_friction", self.poly_friction.to_string());
        line("poly_gravity", self.poly_gravity.to_string());
        line("ball_radius", self.ball_radius.to_string());
        line("ball_friction", self.ball_friction.to_string());
        line("ball_gravity", self.ball_gravity.to_string());
        out
    }

    /// Parse parameters from JSON, re-validating every value.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut params: Self = serde_json::from_str(json)?;
        params.init();
        Ok(params)
    }

    /// Serialize parameters to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    // === Getters ===

    pub fn view_width(&self) -> u32 {
        self.view_width
    }

    pub fn view_height(&self) -> u32 {
        self.view_height
    }

    pub fn poly_vertices(&self) -> u32 {
        self.poly_vertices
    }

    pub fn poly_radius(&self) -> f32 {
        self.poly_radius
    }

    pub fn poly_omega(&self) -> f32 {
        self.poly_omega
    }

    pub fn poly_friction(&self) -> f32 {
        self.poly_friction
    }

    pub fn poly_gravity(&self) -> f32 {
        self.poly_gravity
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball_radius
    }

    pub fn ball_friction(&self) -> f32 {
        self.ball_friction
    }

    pub fn ball_gravity(&self) -> f32 {
        self.ball_gravity
    }

    // === Clamping setters ===

    pub fn set_view_width(&mut self, width: i32) {
        self.view_width = clamp_i32(width, limits::VIEW_WIDTH) as u32;
    }

    pub fn set_view_height(&mut self, height: i32) {
        self.view_height = clamp_i32(height, limits::VIEW_HEIGHT) as u32;
    }

    pub fn set_poly_vertices(&mut self, count: i32) {
        self.poly_vertices = clamp_i32(count, limits::POLY_VERTICES) as u32;
    }

    pub fn set_poly_radius(&mut self, radius: f32) {
        self.poly_radius = clamp_f32(radius, limits::POLY_RADIUS);
    }

    pub fn set_poly_omega(&mut self, omega: f32) {
        self.poly_omega = clamp_f32(omega, limits::POLY_OMEGA);
    }

    pub fn set_poly_friction(&mut self, friction: f32) {
        self.poly_friction = clamp_f32(friction, limits::POLY_FRICTION);
    }

    pub fn set_poly_gravity(&mut self, gravity: f32) {
        self.poly_gravity = clamp_f32(gravity, limits::POLY_GRAVITY);
    }

    pub fn set_ball_radius(&mut self, radius: f32) {
        self.ball_radius = clamp_f32(radius, limits::BALL_RADIUS);
    }

    pub fn set_ball_friction(&mut self, friction: f32) {
        self.ball_friction = clamp_f32(friction, limits::BALL_FRICTION);
    }

    pub fn set_ball_gravity(&mut self, gravity: f32) {
        self.ball_gravity = clamp_f32(gravity, limits::BALL_GRAVITY);
    }
}
