//! `golay-link`: pushes seeded random payloads through the Golay codec and a
//! simulated noisy link, then reports how much the code recovered.
//!
//! Usage: `golay-link [config.toml]`. Without a path the built-in defaults
//! are used. Set `RUST_LOG` to adjust verbosity.

use golay_core::{SimConfig, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(&path)?,
        None => SimConfig::default(),
    };
    tracing::info!(
        payload_bytes = config.payload_bytes,
        rounds = config.rounds,
        ber = config.channel.bit_error_rate,
        burst = config.channel.burst_bits,
        seed = config.channel.seed,
        "starting link simulation"
    );

    let mut sim = Simulation::new(config)?;
    let stats = sim.run()?;

    println!("rounds            {}", stats.rounds);
    println!("blocks            {}", stats.blocks);
    println!("bits flipped      {}", stats.bits_flipped);
    println!("words corrected   {}", stats.words_corrected);
    println!("corrections/block {:.4}", stats.corrections_per_block());
    println!("residual bytes    {}", stats.residual_byte_errors);
    println!("residual rate     {:.6}", stats.residual_error_rate());
    println!("failed rounds     {}", stats.failed_rounds);
    Ok(())
}
