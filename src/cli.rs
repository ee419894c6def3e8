use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ua-forge")]
#[command(about = "Facebook user-agent corpus generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate Samsung Android WebView user agents
    Samsung {
        /// Output file path
        #[arg(
            short,
            long,
            value_name = "FILE",
            default_value = "usa_android_user_agents.txt"
        )]
        output: String,

        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate iPhone Facebook app user agents
    Iphone {
        /// Output file path
        #[arg(
            short,
            long,
            value_name = "FILE",
            default_value = "iphone_user_agents.txt"
        )]
        output: String,

        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}
