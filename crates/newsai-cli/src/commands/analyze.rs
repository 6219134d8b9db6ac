//! One-shot analysis command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use newsai_core::Category;

use super::ModelArgs;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// News text to analyze
    pub content: String,

    /// Optional headline prepended to the text
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub model: ModelArgs,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let analyzer = args.model.build_analyzer()?;
    let analysis = analyzer
        .analyze(&args.content, args.title.as_deref())
        .await?;

    let category = match analysis.category {
        Category::Positive => analysis.category.as_str().green(),
        Category::Negative => analysis.category.as_str().red(),
        Category::Neutral => analysis.category.as_str().yellow(),
    };

    println!();
    println!("  {}  {:.2}", "Sentiment".bold(), analysis.sentiment);
    println!("  {}   {:.1}", "Severity".bold(), analysis.severity_score);
    println!("  {}   {}", "Category".bold(), category);
    println!();

    Ok(())
}
