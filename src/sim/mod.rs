//! Physics simulation module
//!
//! Everything here is synchronous and deterministic given `(state, dt)`:
//! - No rendering or platform dependencies (draw calls go through a sink)
//! - No allocation per tick apart from the polygon's fixed vertex ring
//! - Exactly two concrete bodies exist at a time: one polygon, one ball

pub mod ball;
pub mod body;
pub mod collision;
pub mod polygon;
pub mod world;

pub use ball::Ball;
pub use body::{Body, BodyState};
pub use collision::{Contact, ball_edge_contact, reflect_velocity, surface_velocity};
pub use polygon::Polygon;
pub use world::World;
