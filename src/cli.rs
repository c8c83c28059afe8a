use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "esports platform-ratio clustering backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the dashboard server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch the prize dataset and store it in the local cache
    Ingest,
    /// Run the aggregation and clustering pipeline and print a summary
    Process,
}
