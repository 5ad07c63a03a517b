use clap::Parser;
use code_convert::{CodeConvertService, OracleConfig, TogetherOracle};
use code_convert_server::{create_app, run_server, TimeoutPolicy};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to listen on
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Maximum number of concurrent executions
    #[arg(short, long, default_value = "4")]
    max_concurrent: usize,

    /// Default execution timeout in seconds
    #[arg(long, default_value = "10")]
    default_timeout: u64,

    /// Maximum execution timeout a request may ask for, in seconds
    #[arg(long, default_value = "60")]
    max_timeout: u64,

    /// Base URL of the translation oracle
    #[arg(long, default_value = code_convert::DEFAULT_BASE_URL)]
    oracle_base_url: String,

    /// Model the oracle should use
    #[arg(long, default_value = code_convert::DEFAULT_MODEL)]
    oracle_model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // The API key comes from the environment; it is the only secret
    let config = OracleConfig::from_env()?
        .with_base_url(args.oracle_base_url)
        .with_model(args.oracle_model);

    let oracle = TogetherOracle::new(config)?;
    let service = CodeConvertService::new(Arc::new(oracle), args.max_concurrent);

    let timeouts = TimeoutPolicy {
        default: Duration::from_secs(args.default_timeout),
        max: Duration::from_secs(args.max_timeout),
    };

    let app = create_app(service, timeouts);
    run_server(app, args.addr).await?;

    Ok(())
}
