//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use newsai_web::state::AppState;

use super::ModelArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value = "5000")]
    pub port: u16,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to newsai-serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let analyzer = Arc::new(args.model.build_analyzer()?);

    if !analyzer.health_check().await {
        tracing::warn!(
            "model backend unreachable; /analyze will return errors until it comes up"
        );
    }

    println!();
    println!("  {} {}", "NewsAI".cyan().bold(), "Analysis Service".bold());
    println!();
    println!(
        "  {}  http://{}:{}/analyze",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!(
        "  {}   http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let state = AppState::new(analyzer);
    newsai_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
