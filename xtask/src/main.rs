use clap::Parser;
use std::path::PathBuf;

mod cli;

const BUNDLE_DIR: &str = "Storyteller";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Launch { completions_url } => {
            let mut cmd = tokio::process::Command::new("trunk");
            cmd.current_dir(std::fs::canonicalize("frontend")?);
            cmd.arg("build");
            cmd.spawn()?.wait().await?;

            let mut cmd = tokio::process::Command::new("cargo");
            cmd.arg("run")
                .arg("--package")
                .arg("storyteller-launcher")
                .arg("--")
                .arg("--dist-dir")
                .arg("frontend/dist");
            if let Some(url) = completions_url {
                cmd.arg("--completions-url").arg(url);
            }
            cmd.spawn()?.wait().await?;

            Ok(())
        }
        cli::Command::Dist { target_triple } => {
            let mut cmd = tokio::process::Command::new("cargo");
            cmd.arg("build")
                .arg("--package")
                .arg("storyteller-launcher")
                .arg("--release");
            let release_dir = match &target_triple {
                Some(triple) => {
                    cmd.arg("--target").arg(triple);
                    PathBuf::from("target").join(triple).join("release")
                }
                None => PathBuf::from("target/release"),
            };
            cmd.spawn()?.wait().await?;

            let mut cmd = tokio::process::Command::new("trunk");
            cmd.current_dir(std::fs::canonicalize("frontend")?);
            cmd.arg("build").arg("--release");
            cmd.spawn()?.wait().await?;

            let dist = PathBuf::from(BUNDLE_DIR).join("dist");
            tokio::fs::create_dir_all(&dist).await?;
            tokio::fs::copy(
                release_dir.join("storyteller-launcher"),
                PathBuf::from(BUNDLE_DIR).join("storyteller-launcher"),
            )
            .await?;

            let mut entries = tokio::fs::read_dir("frontend/dist").await?;
            while let Some(file) = entries.next_entry().await? {
                tokio::fs::copy(file.path(), dist.join(file.file_name())).await?;
            }

            Ok(())
        }
    }
}
