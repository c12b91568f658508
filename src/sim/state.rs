//! Ball entities and driver state
//!
//! Everything that must be persisted for snapshot/determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::color::color_for_digit;
use crate::config::SimConfig;
use crate::consts::*;

/// Whether the simulation advances on tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Physics advances every tick
    Running,
    /// Ticks are no-ops; positions and velocities are frozen
    Paused,
}

/// A ball representing one digit of pi
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// The digit this ball carries (0-9); drives color and initial radius
    pub digit: u8,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Always 0.5 * radius; fixed at construction, never recomputed
    pub mass: f32,
    /// RGB, derived from the digit
    pub color: [u8; 3],
}

impl Ball {
    /// Create a ball with a random initial velocity drawn from the injected RNG
    pub fn new(digit: u8, pos: Vec2, radius: f32, rng: &mut Pcg32) -> Self {
        debug_assert!(digit <= 9);
        debug_assert!(radius > 0.0);
        let vel = Vec2::new(
            rng.random_range(-INITIAL_SPEED_RANGE..=INITIAL_SPEED_RANGE),
            rng.random_range(-INITIAL_SPEED_RANGE..=INITIAL_SPEED_RANGE),
        );
        Self {
            digit,
            pos,
            vel,
            radius,
            mass: radius * 0.5,
            color: color_for_digit(digit),
        }
    }

    /// Advance this ball by one tick: Euler position update, wall bounce,
    /// gravity, then damping. The order is fixed; gravity added before
    /// damping means the gravity increment is damped the same tick.
    pub fn integrate(&mut self, width: f32, height: f32) {
        self.pos += self.vel;

        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x *= -WALL_RESTITUTION;
        } else if self.pos.x + self.radius > width {
            self.pos.x = width - self.radius;
            self.vel.x *= -WALL_RESTITUTION;
        }

        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y *= -WALL_RESTITUTION;
        } else if self.pos.y + self.radius > height {
            self.pos.y = height - self.radius;
            self.vel.y *= -WALL_RESTITUTION;
        }

        self.vel.y += GRAVITY;
        self.vel *= DAMPING;
    }
}

/// Complete simulation state (deterministic, serializable)
///
/// Owns every ball exclusively. The collection is seeded once from a digit
/// sequence and stays fixed-size for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Viewport bounds for wall collisions
    pub width: f32,
    pub height: f32,
    /// Tick counter
    pub time_ticks: u64,
    pub phase: SimPhase,
    pub balls: Vec<Ball>,
}

impl Simulation {
    /// Seed one ball per digit, consuming at most `config.max_balls` digits.
    ///
    /// Spawn positions are uniform within a margin of the viewport edges.
    /// Radius grows with how often the digit has already appeared
    /// (one extra pixel per three occurrences), capped at `MAX_RADIUS`.
    pub fn new(config: &SimConfig, digits: &[u8]) -> Self {
        debug_assert!(config.width > 0.0 && config.height > 0.0);

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let mut digit_counts = [0u32; 10];
        let count = digits.len().min(config.max_balls);
        let mut balls = Vec::with_capacity(count);

        for &digit in &digits[..count] {
            debug_assert!(digit <= 9);
            let x = rng.random_range(SPAWN_MARGIN..=config.width - SPAWN_MARGIN);
            let y = rng.random_range(SPAWN_MARGIN..=config.height - SPAWN_MARGIN);

            digit_counts[digit as usize] += 1;
            let radius =
                (BASE_RADIUS + (digit_counts[digit as usize] / 3) as f32).min(MAX_RADIUS);

            balls.push(Ball::new(digit, Vec2::new(x, y), radius, &mut rng));
        }

        Self {
            seed: config.seed,
            width: config.width,
            height: config.height,
            time_ticks: 0,
            phase: SimPhase::Running,
            balls,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == SimPhase::Paused
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            SimPhase::Running => SimPhase::Paused,
            SimPhase::Paused => SimPhase::Running,
        };
    }
}
