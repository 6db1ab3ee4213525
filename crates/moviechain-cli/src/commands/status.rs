//! Graph store status command.

use anyhow::Result;
use colored::Colorize;

use moviechain_graph::GraphClient;

pub async fn execute() -> Result<()> {
    let client = GraphClient::connect_env().await?;
    let counts = client.get_counts().await?;

    println!("{}", "Graph Store Status".bold());
    println!("{}", "─".repeat(40));
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());
    println!("{}", "─".repeat(40));

    Ok(())
}
