use adventure_ai::app::App;
use adventure_ai::settings::Settings;
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "adventure-ai")]
#[command(about = "Chat service that forwards messages to a Gemini model")]
struct CliArgs {
    /// Host to bind. The port comes from the PORT environment variable.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adventure_ai=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting adventure-ai");

    let args = CliArgs::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    match App::new(settings) {
        Ok(app) => match app.run(&args.host).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Server failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_host_defaults_to_loopback() {
        let args = CliArgs::parse_from(["adventure-ai"]);
        assert_eq!(args.host, "127.0.0.1");
    }

    #[test]
    fn test_host_override() {
        let args = CliArgs::parse_from(["adventure-ai", "--host", "0.0.0.0"]);
        assert_eq!(args.host, "0.0.0.0");
    }
}
