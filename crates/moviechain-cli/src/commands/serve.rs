//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use moviechain_graph::GraphClient;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let graph = GraphClient::connect_env().await?;

    println!();
    println!("  {} {}", "MovieChain".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}        http://{}:{}/api/movies",
        "Paths".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  http://{}:{}/api/suggestions",
        "Suggestions".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    moviechain_web::run_server(graph, &args.host, args.port).await?;

    Ok(())
}
