//! # Common Types
//!
//! This module contains the common types used throughout the crate for
//! representing edit history, aggregated counts, and entropy scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single edit event extracted from commit history.
///
/// One event is produced per (commit, file touched by that commit) pair,
/// so a commit touching N files yields N events sharing the commit's
/// author and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct EditEvent {
    /// The commit author's name
    pub author: String,
    /// Path of the file touched by the commit, relative to the repo root
    pub file: String,
    /// The commit's author timestamp
    pub timestamp: DateTime<Utc>,
}

/// A normalized probability distribution, index-aligned with the count
/// vector it was derived from.
pub type ProbabilityDistribution = Vec<f64>;

/// The three count views produced by aggregating an edit event stream.
///
/// All counts are strict event frequencies: an author touching the same
/// file in ten commits contributes ten, not one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    /// For each file, how many edit events each author contributed to it
    pub counts_by_file_then_author: HashMap<String, HashMap<String, usize>>,
    /// Total edit events per author, repository-wide
    pub counts_by_author: HashMap<String, usize>,
    /// Total edit events per file, repository-wide
    pub counts_by_file: HashMap<String, usize>,
}

/// The ownership entropy score of a single file.
///
/// Entropy is non-negative and bounded above by log2 of the number of
/// distinct authors that touched the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntropy {
    /// Path of the scored file
    pub filename: String,
    /// Shannon entropy (bits) of the file's author-contribution distribution
    pub entropy: f64,
}

/// Repository-level entropy scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEntropySummary {
    /// Entropy of total contribution counts across all authors
    pub author_entropy: f64,
    /// Entropy of total edit counts across all files
    pub file_entropy: f64,
    /// Blend of the two component entropies (unweighted mean by default)
    pub overall: f64,
}
