//! blogd - HTTP API server for a small blogging domain
//!
//! Serves users, posts, comments, and likes as a JSON CRUD API backed by
//! SQLite. Configuration comes from flags, the environment, or a `.env`
//! file in the working directory.

use anyhow::Result;
use clap::Parser;

use blogd_server::ServerConfig;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "blogd",
    author,
    version,
    about = "JSON CRUD API for users, posts, comments, and likes"
)]
struct Cli {
    /// Host to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://blogd.db?mode=rwc")]
    database_url: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        database_url: cli.database_url,
    };

    tracing::debug!(?config, "starting blogd");
    blogd_server::serve(config).await?;
    Ok(())
}
