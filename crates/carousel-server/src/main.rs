use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;
use carousel_server::config::{DEFAULT_PORT, DEFAULT_PUBLIC_DIR};
use carousel_server::{ServerConfig, logging, web};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "carousel-server",
    version,
    about = "Serve an image directory listing and the carousel's static assets."
)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind.
    #[arg(long = "bind", env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    bind_address: IpAddr,

    /// Public root served as static files; images are read from its `images/` child.
    #[arg(long, env = "PUBLIC_DIR", default_value = DEFAULT_PUBLIC_DIR)]
    public_dir: PathBuf,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            bind_address: cli.bind_address,
            port: cli.port,
            public_dir: cli.public_dir,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        error!(error = ?err, "carousel-server exited with error");
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = ServerConfig::from(cli);
    info!(port = config.port, "starting carousel-server");
    web::run(config).await
}
