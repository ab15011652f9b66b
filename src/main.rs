//! Git Ownership Entropy Tool
//!
//! A command-line tool for scoring how diffusely file ownership is spread
//! across the authors of a Git repository.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use tokio::runtime::Runtime;

use gitdebt::analysis::{collect_events_async, mean_file_entropy, summarize_repository};
use gitdebt::report;

#[derive(Parser, Debug)]
#[command(
    name = "gitdebt",
    version,
    about = "Ownership entropy analyzer for Git repositories"
)]
struct Args {
    /// Path to the repository to analyze
    #[arg(default_value = ".")]
    repo_path: String,

    /// Branch whose history to walk (falls back to HEAD when absent)
    #[arg(long, default_value = "main")]
    branch: String,

    /// Only count commits by this author ("All" keeps every author)
    #[arg(long, default_value = "All")]
    contributor: String,

    /// Write the per-file scores to this file as JSON
    #[arg(long)]
    output: Option<std::path::PathBuf>,

    /// Order of the per-file table
    #[arg(long, value_enum, default_value = "name")]
    sort: SortOrder,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortOrder {
    /// Sort by filename
    Name,
    /// Sort by entropy score, ascending
    Entropy,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rt = Runtime::new()?;
    let events = rt.block_on(collect_events_async(
        args.repo_path.clone(),
        args.branch.clone(),
        args.contributor.clone(),
    ))?;
    info!(
        "collected {} edit events from {}",
        events.len(),
        args.repo_path
    );

    let (mut files, summary) = summarize_repository(&events)?;
    match args.sort {
        SortOrder::Name => report::sort_by_filename(&mut files),
        SortOrder::Entropy => report::sort_by_entropy(&mut files),
    }

    print!("{}", report::render_table(&files));
    println!();
    println!(
        "Repo entropy (average of all files): {:.4}",
        mean_file_entropy(&files)
    );
    println!("Author entropy:  {:.4}", summary.author_entropy);
    println!("File entropy:    {:.4}", summary.file_entropy);
    println!("Overall entropy: {:.4}", summary.overall);

    if let Some(path) = &args.output {
        report::write_entropies(path, &files)?;
        info!(
            "wrote {} file entropy records to {}",
            files.len(),
            path.display()
        );
    }

    Ok(())
}
