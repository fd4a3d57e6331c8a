mod cli;

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();
    let router = Router::new().fallback_service(ServeDir::new(&cli.dist_dir));
    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let router = backend::init(router, cli.relay_config());
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::cli::Cli;
    use clap::Parser;

    #[test]
    fn defaults_point_at_local_completion_service() {
        let cli = Cli::parse_from(["storyteller-launcher"]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.dist_dir, std::path::PathBuf::from("dist"));
        assert_eq!(
            cli.relay_config().completions_url,
            "http://127.0.0.1:5000/v1/completions"
        );
    }

    #[test]
    fn completions_url_is_overridable() {
        let cli = Cli::parse_from([
            "storyteller-launcher",
            "--completions-url",
            "http://gpu-box:5000/v1/completions",
        ]);
        assert_eq!(cli.completions_url, "http://gpu-box:5000/v1/completions");
    }
}
