//! Per-frame simulation advance
//!
//! The embedding render/event loop calls `tick` once per frame (reference
//! cadence 60 Hz). A tick runs to completion before the caller reads ball
//! state back out; there is no partial result and no concurrent mutation.

use glam::Vec2;

use super::collision::resolve_ball_collision;
use super::state::Simulation;

/// Input signals for a single tick (externally sourced)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Toggle between Running and Paused (e.g. from a key event).
    /// Quit is the embedding loop's concern, not the core's.
    pub pause: bool,
}

/// Advance the simulation by one frame.
///
/// While paused this is a no-op: every ball's position and velocity stays
/// exactly as it was, however many times it is called.
pub fn tick(sim: &mut Simulation, input: &TickInput) {
    if input.pause {
        sim.toggle_pause();
    }
    if sim.is_paused() {
        return;
    }

    sim.time_ticks += 1;

    let (width, height) = (sim.width, sim.height);
    for ball in &mut sim.balls {
        ball.integrate(width, height);
    }

    // O(n²) pair pass in increasing (i, j) index order. Later pairs see the
    // velocities and positions earlier pairs already wrote; that ordering is
    // part of the simulation's behavior, not an accident.
    for i in 0..sim.balls.len() {
        for j in (i + 1)..sim.balls.len() {
            let (head, tail) = sim.balls.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            if let Some(res) = resolve_ball_collision(a, b) {
                a.vel = res.vel_a;
                b.vel = res.vel_b;
                a.pos = res.pos_a;
                b.pos = res.pos_b;
            }
        }
    }

    // Overlap separation can shove a ball past a wall; keep every ball
    // fully on-screen after the tick.
    for ball in &mut sim.balls {
        ball.pos = ball.pos.clamp(
            Vec2::splat(ball.radius),
            Vec2::new(width - ball.radius, height - ball.radius),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::SimPhase;
    use proptest::prelude::*;

    const PI_PREFIX: [u8; 16] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3];

    fn sim_with_seed(seed: u64) -> Simulation {
        let config = SimConfig {
            seed,
            ..Default::default()
        };
        Simulation::new(&config, &PI_PREFIX)
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut sim = sim_with_seed(42);

        let toggle = TickInput { pause: true };
        tick(&mut sim, &toggle);
        assert_eq!(sim.phase, SimPhase::Paused);

        let snapshot: Vec<_> = sim.balls.iter().map(|b| (b.pos, b.vel)).collect();
        let ticks_before = sim.time_ticks;

        let input = TickInput::default();
        for _ in 0..50 {
            tick(&mut sim, &input);
        }

        assert_eq!(sim.time_ticks, ticks_before);
        for (ball, (pos, vel)) in sim.balls.iter().zip(&snapshot) {
            assert_eq!(ball.pos, *pos);
            assert_eq!(ball.vel, *vel);
        }
    }

    #[test]
    fn test_pause_toggle_resumes() {
        let mut sim = sim_with_seed(42);
        let toggle = TickInput { pause: true };

        tick(&mut sim, &toggle);
        assert!(sim.is_paused());

        // Second toggle resumes and that same tick advances physics
        let ticks_before = sim.time_ticks;
        tick(&mut sim, &toggle);
        assert_eq!(sim.phase, SimPhase::Running);
        assert_eq!(sim.time_ticks, ticks_before + 1);
    }

    #[test]
    fn test_determinism() {
        let mut a = sim_with_seed(99999);
        let mut b = sim_with_seed(99999);

        let input = TickInput::default();
        for _ in 0..300 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        for (x, y) in a.balls.iter().zip(&b.balls) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
        }
    }

    #[test]
    fn test_ball_count_fixed_for_run() {
        let mut sim = sim_with_seed(7);
        let count = sim.balls.len();
        let input = TickInput::default();
        for _ in 0..200 {
            tick(&mut sim, &input);
        }
        assert_eq!(sim.balls.len(), count);
    }

    #[test]
    fn test_containment_after_many_ticks() {
        let mut sim = sim_with_seed(123);
        let input = TickInput::default();
        for _ in 0..1000 {
            tick(&mut sim, &input);
            for ball in &sim.balls {
                assert!(ball.pos.x >= ball.radius && ball.pos.x <= sim.width - ball.radius);
                assert!(ball.pos.y >= ball.radius && ball.pos.y <= sim.height - ball.radius);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(seed in 0u64..10_000, ticks in 1usize..300) {
            let mut sim = sim_with_seed(seed);
            let input = TickInput::default();
            for _ in 0..ticks {
                tick(&mut sim, &input);
            }

            for ball in &sim.balls {
                prop_assert!(ball.pos.x >= ball.radius);
                prop_assert!(ball.pos.x <= sim.width - ball.radius);
                prop_assert!(ball.pos.y >= ball.radius);
                prop_assert!(ball.pos.y <= sim.height - ball.radius);
                prop_assert_eq!(ball.mass, ball.radius * 0.5);
            }
        }

        #[test]
        fn prop_paused_is_idempotent(seed in 0u64..10_000, extra in 1usize..50) {
            let mut sim = sim_with_seed(seed);
            let input = TickInput::default();
            for _ in 0..10 {
                tick(&mut sim, &input);
            }

            tick(&mut sim, &TickInput { pause: true });
            let snapshot: Vec<_> = sim.balls.iter().map(|b| (b.pos, b.vel)).collect();
            for _ in 0..extra {
                tick(&mut sim, &input);
            }
            for (ball, (pos, vel)) in sim.balls.iter().zip(&snapshot) {
                prop_assert_eq!(ball.pos, *pos);
                prop_assert_eq!(ball.vel, *vel);
            }
        }
    }
}
