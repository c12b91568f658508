//! Pi Balls - bouncing digits of pi
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, driver state)
//! - `config`: Viewport/ball-count configuration for the embedding loop
//!
//! The crate is the physics core only: an external render/event loop seeds a
//! `Simulation` with a digit sequence, calls `tick` once per frame, and reads
//! ball positions, radii and colors back out to draw them.

pub mod config;
pub mod sim;

pub use config::SimConfig;
pub use sim::{Ball, Simulation, TickInput, tick};

/// Simulation constants
pub mod consts {
    /// Default viewport dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Default cap on ball count (one ball per digit)
    pub const MAX_BALLS: usize = 100;

    /// Smallest radius a ball starts with; grows with digit frequency
    pub const BASE_RADIUS: f32 = 20.0;
    /// Radius cap for frequently recurring digits
    pub const MAX_RADIUS: f32 = 40.0;

    /// Initial velocity is drawn uniformly from [-RANGE, RANGE] per axis
    pub const INITIAL_SPEED_RANGE: f32 = 2.0;

    /// Downward acceleration added to vel.y every tick
    pub const GRAVITY: f32 = 0.1;
    /// Per-tick multiplicative velocity attenuation (air resistance)
    pub const DAMPING: f32 = 0.995;
    /// Fraction of velocity kept (sign-inverted) after a wall bounce
    pub const WALL_RESTITUTION: f32 = 0.95;

    /// Pairs closer than this are treated as non-colliding: the overlap
    /// separation divides by center distance, which is undefined for
    /// coincident centers
    pub const DISTANCE_EPSILON: f32 = 1e-6;

    /// Margin kept between spawn positions and the viewport edges
    pub const SPAWN_MARGIN: f32 = 50.0;
}
