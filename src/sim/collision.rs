//! Ball-versus-edge collision math
//!
//! The only collider in the system is the rotating polygon, so everything
//! reduces to circle-versus-segment tests plus a reflection that accounts
//! for the tangential velocity the spinning boundary imparts at the
//! contact point.

use glam::Vec2;

/// A resolved circle-versus-segment overlap
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Closest point on the segment to the circle center
    pub point: Vec2,
    /// Unit normal from the segment toward the circle center
    /// (zero when the center sits exactly on the segment)
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub penetration: f32,
}

/// Test a circle at `center` with `radius` against the segment `a`-`b`.
///
/// Returns `None` for degenerate (zero-length) segments and for circles
/// that clear the segment. The distance is padded by `f32::EPSILON` so the
/// normal stays well-defined even at exact contact.
pub fn ball_edge_contact(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> Option<Contact> {
    let ab = b - a;
    let ab_len_sq = ab.length_squared();
    if ab_len_sq == 0.0 {
        return None;
    }

    let t = ((center - a).dot(ab) / ab_len_sq).clamp(0.0, 1.0);
    let point = a + ab * t;
    let offset = center - point;
    let dist = offset.length() + f32::EPSILON;
    if dist > radius {
        return None;
    }

    Some(Contact {
        point,
        normal: offset.normalize_or_zero(),
        penetration: radius - dist,
    })
}

/// Reflect velocity off a surface with unit normal `n`: `v - 2(v·n)n`
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Tangential velocity of a point on a body spinning at `omega` rad/s
/// around `pivot`.
#[inline]
pub fn surface_velocity(point: Vec2, pivot: Vec2, omega: f32) -> Vec2 {
    (point - pivot).perp() * omega
}
