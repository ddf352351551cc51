// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::env;
use wiktionary_expressions::{
    api::{start_server, AppState},
    cli::build_service,
    expression::ShowOutcome,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("📖 Starting Wiktionary expression viewer...");

    let (config, service) = build_service(false)?;
    println!("   API:      {}", config.api_url);
    println!("   Category: {}", config.category);
    println!("   Store:    {}", config.store_path().display());

    // First selection at startup; reloads come from POST /reload
    match service.show_random_expression().await {
        ShowOutcome::Displayed { title } => println!("✅ First expression: {}", title),
        ShowOutcome::Errored { description } => {
            println!("⚠️  First load failed: {}", description);
            println!("   Refreshing the error page retries");
        }
        ShowOutcome::Superseded => {}
    }

    println!("\n🌐 Open http://{}/ (Ctrl+C to stop)", config.listen_addr);
    start_server(AppState::new(service), &config.listen_addr).await?;

    println!("👋 Goodbye!");
    Ok(())
}
