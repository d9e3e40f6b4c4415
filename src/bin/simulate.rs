//! Headless driver: step the simulation without a window and report
//! throughput and ensemble statistics.
//!
//! Usage: simulate [steps] [seed]

use particles_core::SimConfig;
use particles_sim::simulation::Simulation;
use std::time::Instant;

fn main() {
    let mut args = std::env::args().skip(1);
    let steps: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let config = SimConfig {
        seed,
        ..SimConfig::default()
    };
    eprintln!(
        "Simulating {} particles, {} colors, {} steps (seed {})...",
        config.particle_count, config.color_count, steps, seed
    );

    let mut sim = Simulation::new(config.clone());
    let start = Instant::now();
    for step in 0..steps {
        sim.step();
        if (step + 1) % 100 == 0 {
            eprint!("  {}/{}...\r", step + 1, steps);
        }
    }
    let elapsed = start.elapsed();
    eprintln!();

    let mut counts = vec![0usize; config.color_count];
    for &color in sim.colors() {
        counts[color as usize] += 1;
    }

    let (vel_x, vel_y) = sim.velocities();
    let mean_speed = vel_x
        .iter()
        .zip(vel_y)
        .map(|(vx, vy)| vx.hypot(*vy))
        .sum::<f32>()
        / vel_x.len().max(1) as f32;

    println!(
        "Done in {:.2?} ({:.0} steps/sec)",
        elapsed,
        steps as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    println!("Mean speed: {mean_speed:.5} domain units/sec");
    println!("Population by color:");
    for (color, count) in counts.iter().enumerate() {
        let bar = "█".repeat(count * 60 / config.particle_count.max(1));
        println!("  color {color}: {count:5} {bar}");
    }
}
