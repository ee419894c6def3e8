mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::{info, warn};
use ua_forge::generators::iphone::IphoneGenerator;
use ua_forge::generators::samsung::SamsungGenerator;
use ua_forge::generators::GeneratorConfig;
use ua_forge::services::output::write_user_agents;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::default();

    match cli.command {
        Commands::Samsung { output, seed } => {
            info!("Generating Samsung Android user agents");
            let mut generator = SamsungGenerator::new(rng_from(seed));
            let outcome = generator.run(&config);

            if outcome.under_target(&config) {
                // Best-effort policy: the attempt budget ran out first
                warn!(
                    "Attempt budget exhausted: collected {} of {} unique user agents",
                    outcome.user_agents.len(),
                    config.target
                );
            }

            write_user_agents(Path::new(&output), &outcome.user_agents)?;
            info!(
                "Generated {} unique Samsung user agents in {} attempts",
                outcome.user_agents.len(),
                outcome.attempts
            );
        }
        Commands::Iphone { output, seed } => {
            info!("Generating iPhone user agents");
            let mut generator = IphoneGenerator::new(rng_from(seed));
            let outcome = generator.run(&config)?;

            write_user_agents(Path::new(&output), &outcome.user_agents)?;
            info!(
                "Generated {} unique iPhone user agents in {} attempts",
                outcome.user_agents.len(),
                outcome.attempts
            );
        }
    }

    Ok(())
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
