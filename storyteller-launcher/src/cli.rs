use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Serve the Storyteller frontend and its completion relay")]
pub struct Cli {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, default_value = "dist")]
    pub dist_dir: PathBuf,
    /// Upstream text-completion endpoint the relay forwards prompts to
    #[arg(long, default_value = backend::DEFAULT_COMPLETIONS_URL)]
    pub completions_url: String,
}

impl Cli {
    pub fn relay_config(&self) -> backend::RelayConfig {
        backend::RelayConfig {
            completions_url: self.completions_url.clone(),
        }
    }
}
