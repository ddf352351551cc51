// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::{start_server, AppState};
use crate::dictionary::ExpressionConfig;
use crate::expression::{ExpressionService, ShowOutcome};
use crate::render::OutputSurface;
use crate::store::{FileStore, KeyValueStore, MemoryStore};

/// Random Russian expressions from French Wiktionary
#[derive(Parser, Debug)]
#[command(name = "expressions-cli")]
#[command(version)]
#[command(about = "Show random Wiktionary expressions", long_about = None)]
pub struct Cli {
    /// Keep the expression list in memory instead of the data directory
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the expression page over HTTP
    Serve(ServeArgs),

    /// Render one random expression page
    Show(ShowArgs),

    /// Print the cached expression list
    List,

    /// Forget the cached expression list
    ClearCache,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address (default from EXPRESSIONS_LISTEN_ADDR or 127.0.0.1:8080)
    #[arg(long)]
    pub listen: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Write the HTML document here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Persistent store for `config`, or an in-memory one when `ephemeral`
pub fn build_store(config: &ExpressionConfig, ephemeral: bool) -> Arc<dyn KeyValueStore> {
    if ephemeral {
        debug!("Using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let store = FileStore::new(config.store_path());
        debug!("Using store file {:?}", store.path());
        Arc::new(store)
    }
}

/// Validated config plus a service wired to a fresh surface
pub fn build_service(ephemeral: bool) -> Result<(ExpressionConfig, Arc<ExpressionService>)> {
    let config = ExpressionConfig::from_env();
    config.validate().map_err(|e| anyhow!(e))?;

    let store = build_store(&config, ephemeral);
    let surface = Arc::new(OutputSurface::new());
    let service = ExpressionService::from_config(&config, store, surface)?;
    Ok((config, Arc::new(service)))
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let (config, service) = build_service(cli.ephemeral)?;

    match cli.command {
        Commands::Serve(args) => {
            let listen = args.listen.unwrap_or_else(|| config.listen_addr.clone());
            service.show_random_expression().await;
            start_server(AppState::new(service), &listen).await
        }
        Commands::Show(args) => {
            match service.show_random_expression().await {
                ShowOutcome::Displayed { title } => info!("Rendered '{}'", title),
                ShowOutcome::Errored { description } => eprintln!("⚠️  {}", description),
                ShowOutcome::Superseded => {}
            }

            let document = service.surface().document();
            match args.output {
                Some(path) => {
                    tokio::fs::write(&path, document).await?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", document),
            }
            Ok(())
        }
        Commands::List => {
            let expressions = service.list_cache().fetch_expressions_list().await?;
            for title in &expressions {
                println!("{}", title);
            }
            info!("{} expressions", expressions.len());
            Ok(())
        }
        Commands::ClearCache => {
            let key = service.list_cache().key().to_string();
            if service.list_cache().clear().await? {
                println!("Cleared cached list '{}'", key);
            } else {
                println!("No cached list under '{}'", key);
            }
            Ok(())
        }
    }
}
