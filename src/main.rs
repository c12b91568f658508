//! Pi Balls entry point
//!
//! Headless demo driver: seeds the simulation from a fixed prefix of pi,
//! runs it for a while, and reports what happened. An actual renderer would
//! replace the fixed tick loop with its frame loop and draw each ball as a
//! filled circle with the digit centered on it.

use std::path::Path;

use pi_balls::{SimConfig, Simulation, TickInput, tick};

/// First 100 decimal digits of pi (leading 3 included). Digit generation is
/// outside the core; this constant stands in for an arbitrary-precision
/// expansion source.
const PI_DIGITS: &str = "3141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117067";

/// Frames simulated by the demo (10 seconds at 60 Hz)
const DEMO_TICKS: u64 = 600;

fn main() {
    env_logger::init();
    log::info!("Pi Balls starting...");

    let config = SimConfig::load(Path::new("pi-balls.json"));
    let digits: Vec<u8> = PI_DIGITS.bytes().map(|b| b - b'0').collect();

    let mut sim = Simulation::new(&config, &digits);
    log::info!(
        "Seeded {} balls in a {}x{} viewport (seed {})",
        sim.balls.len(),
        sim.width,
        sim.height,
        sim.seed
    );

    let input = TickInput::default();
    for _ in 0..DEMO_TICKS {
        tick(&mut sim, &input);
    }
    log::info!("Ran {} ticks", sim.time_ticks);

    report_digit_frequencies(&sim);

    // Emit a snapshot so the run can be inspected or resumed elsewhere
    match serde_json::to_string(&sim) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Snapshot failed: {e}"),
    }
}

/// Log how many balls carry each digit; frequent digits grew bigger balls.
fn report_digit_frequencies(sim: &Simulation) {
    let mut counts = [0usize; 10];
    let mut max_radius = [0.0f32; 10];
    for ball in &sim.balls {
        counts[ball.digit as usize] += 1;
        max_radius[ball.digit as usize] = max_radius[ball.digit as usize].max(ball.radius);
    }
    for digit in 0..10 {
        log::info!(
            "digit {}: {} balls, largest radius {}",
            digit,
            counts[digit],
            max_radius[digit]
        );
    }
}
