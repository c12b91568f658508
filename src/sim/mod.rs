//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Unit timestep only (one tick per rendered frame)
//! - Seeded RNG only, injected at construction
//! - Stable ball and pair iteration order (by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod state;
pub mod tick;

pub use collision::{PairResolution, resolve_ball_collision};
pub use color::color_for_digit;
pub use state::{Ball, SimPhase, Simulation};
pub use tick::{TickInput, tick};
