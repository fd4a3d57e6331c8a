use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Storyteller utilities - trunk must be installed")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Build the frontend and run the launcher")]
    Launch {
        /// Forwarded to the launcher's --completions-url
        #[arg(long)]
        completions_url: Option<String>,
    },
    #[command(about = "Build a release bundle into Storyteller/")]
    Dist { target_triple: Option<String> },
}
