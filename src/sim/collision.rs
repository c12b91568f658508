//! Pairwise ball collision resolution
//!
//! Resolution is a pure function over two balls: it reads both and returns
//! the replacement velocities and positions, or `None` when the pair does
//! not touch. The driver owns applying the result, which keeps the
//! pair-order dependency (i,j before i,k) an explicit policy instead of a
//! hidden method side effect.

use glam::Vec2;

use super::state::Ball;
use crate::consts::DISTANCE_EPSILON;

/// New state for both balls of a resolved collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairResolution {
    pub vel_a: Vec2,
    pub vel_b: Vec2,
    pub pos_a: Vec2,
    pub pos_b: Vec2,
}

/// Resolve a potential collision between two balls.
///
/// Returns `None` when the balls do not overlap, or when their centers
/// coincide (closer than `DISTANCE_EPSILON`): the separation direction is
/// undefined there, so the pair is skipped instead of dividing by zero.
///
/// Velocities use the 1D elastic exchange formula applied independently per
/// axis rather than projected onto the contact normal. That is inexact for
/// off-center impacts, but it conserves axis-wise momentum and keeps the
/// motion reproducible, which is what this simulation is after.
pub fn resolve_ball_collision(a: &Ball, b: &Ball) -> Option<PairResolution> {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    if distance >= a.radius + b.radius {
        return None;
    }
    if distance < DISTANCE_EPSILON {
        return None;
    }

    let total_mass = a.mass + b.mass;
    let vel_a = ((a.mass - b.mass) * a.vel + 2.0 * b.mass * b.vel) / total_mass;
    let vel_b = ((b.mass - a.mass) * b.vel + 2.0 * a.mass * a.vel) / total_mass;

    // Push the pair apart along the center line (plus one pixel of slack)
    // so interpenetrating balls don't stick together.
    let overlap = 0.5 * (a.radius + b.radius - distance + 1.0);
    let correction = delta / distance * overlap;

    Some(PairResolution {
        vel_a,
        vel_b,
        pos_a: a.pos - correction,
        pos_b: b.pos + correction,
    })
}
