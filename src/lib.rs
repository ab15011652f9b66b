//! # Git Ownership Entropy Library
//!
//! `gitdebt` is a library for estimating ownership entropy in Git
//! repositories: a per-file score expressing how diffusely the file's edit
//! history is spread across contributing authors. Low entropy means one
//! clear owner; high entropy means many hands and higher coordination and
//! knowledge risk.
//!
//! ## Features
//!
//! - Walk a repository's commit history into a stream of edit events
//! - Aggregate events into per-file and repository-wide count tables
//! - Normalize counts into probability distributions and score them with
//!   Shannon entropy
//! - Summarize a repository into author, file, and overall entropy scores
//! - Persist and print per-file scores as JSON and console tables
//! - Support for branch-specific analysis and contributor filtering
//!
//! ## Example
//!
//! ```no_run
//! use gitdebt::analysis::{collect_events_async, mean_file_entropy, summarize_repository};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let events = collect_events_async(
//!     ".".to_string(),
//!     "main".to_string(),
//!     "All".to_string(),
//! )
//! .await?;
//!
//! let (files, summary) = summarize_repository(&events)?;
//! println!("repo entropy (file average): {:.4}", mean_file_entropy(&files));
//! println!("overall entropy: {:.4}", summary.overall);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod error;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use error::{EntropyError, ReportError};
pub use types::{
    AggregationResult, EditEvent, FileEntropy, ProbabilityDistribution, RepositoryEntropySummary,
};
