//! Repository-level entropy summaries built on top of aggregation and the
//! entropy scorer.

use crate::analysis::aggregate::aggregate;
use crate::analysis::entropy::entropy_of_counts;
use crate::error::EntropyError;
use crate::types::{EditEvent, FileEntropy, RepositoryEntropySummary};

/// Policy combining the repository-wide author and file entropies into the
/// overall score.
pub type BlendPolicy = fn(author_entropy: f64, file_entropy: f64) -> f64;

/// The default blend: an unweighted arithmetic mean of the two components.
pub fn mean_blend(author_entropy: f64, file_entropy: f64) -> f64 {
    (author_entropy + file_entropy) / 2.0
}

/// Score every file in the event stream and summarize the repository,
/// blending the component entropies with [`mean_blend`].
pub fn summarize_repository(
    events: &[EditEvent],
) -> Result<(Vec<FileEntropy>, RepositoryEntropySummary), EntropyError> {
    summarize_repository_with(events, mean_blend)
}

/// Score every file in the event stream and summarize the repository with
/// a caller-chosen blend policy.
///
/// Each file's score is the Shannon entropy of its author-contribution
/// counts. The repository summary holds the entropy of total contribution
/// counts across authors, the entropy of total edit counts across files,
/// and the blend of the two. An empty event stream yields an empty file
/// list and an all-zero summary.
pub fn summarize_repository_with(
    events: &[EditEvent],
    blend: BlendPolicy,
) -> Result<(Vec<FileEntropy>, RepositoryEntropySummary), EntropyError> {
    let counts = aggregate(events);

    let mut files = Vec::with_capacity(counts.counts_by_file_then_author.len());
    for (filename, author_counts) in &counts.counts_by_file_then_author {
        let values: Vec<usize> = author_counts.values().copied().collect();
        files.push(FileEntropy {
            filename: filename.clone(),
            entropy: entropy_of_counts(&values)?,
        });
    }
    // Map iteration order is arbitrary; sort so output is reproducible.
    files.sort_by(|a, b| a.filename.cmp(&b.filename));

    let author_counts: Vec<usize> = counts.counts_by_author.values().copied().collect();
    let file_counts: Vec<usize> = counts.counts_by_file.values().copied().collect();
    let author_entropy = entropy_of_counts(&author_counts)?;
    let file_entropy = entropy_of_counts(&file_counts)?;

    let summary = RepositoryEntropySummary {
        author_entropy,
        file_entropy,
        overall: blend(author_entropy, file_entropy),
    };

    Ok((files, summary))
}

/// Arithmetic mean of all per-file entropy scores, the repository's
/// file-diversity average. Zero when no files were observed.
pub fn mean_file_entropy(files: &[FileEntropy]) -> f64 {
    if files.is_empty() {
        return 0.0;
    }
    files.iter().map(|fe| fe.entropy).sum::<f64>() / files.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    const TOLERANCE: f64 = 1e-5;

    fn event(author: &str, file: &str) -> EditEvent {
        EditEvent {
            author: author.to_string(),
            file: file.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    fn sample_events() -> Vec<EditEvent> {
        vec![
            event("alice", "f1"),
            event("alice", "f1"),
            event("bob", "f1"),
            event("alice", "f2"),
        ]
    }

    #[test]
    fn test_per_file_scores() {
        let (files, _) = summarize_repository(&sample_events()).unwrap();

        assert_eq!(files.len(), 2);
        // Output is sorted by filename.
        assert_eq!(files[0].filename, "f1");
        assert_eq!(files[1].filename, "f2");

        // f1 has author counts {alice: 2, bob: 1}.
        assert!((files[0].entropy - 0.91830).abs() < TOLERANCE);
        // f2 has a single author, so ownership is fully concentrated.
        assert_eq!(files[1].entropy, 0.0);
    }

    #[test]
    fn test_file_diversity_average() {
        let (files, _) = summarize_repository(&sample_events()).unwrap();
        assert!((mean_file_entropy(&files) - 0.45915).abs() < TOLERANCE);
    }

    #[test]
    fn test_repository_summary_components() {
        let (_, summary) = summarize_repository(&sample_events()).unwrap();

        // Author totals are {alice: 3, bob: 1}; file totals are {f1: 3, f2: 1}.
        assert!((summary.author_entropy - 0.81128).abs() < TOLERANCE);
        assert!((summary.file_entropy - 0.81128).abs() < TOLERANCE);
        assert!(
            (summary.overall - (summary.author_entropy + summary.file_entropy) / 2.0).abs()
                < TOLERANCE
        );
    }

    #[test]
    fn test_empty_event_stream() {
        let (files, summary) = summarize_repository(&[]).unwrap();
        assert!(files.is_empty());
        assert_eq!(summary, RepositoryEntropySummary::default());
        assert_eq!(mean_file_entropy(&files), 0.0);
    }

    #[test]
    fn test_blend_policy_is_replaceable() {
        fn file_only(_author_entropy: f64, file_entropy: f64) -> f64 {
            file_entropy
        }

        let (_, summary) = summarize_repository_with(&sample_events(), file_only).unwrap();
        assert_eq!(summary.overall, summary.file_entropy);
    }

    #[test]
    fn test_single_author_repository_has_zero_author_entropy() {
        let events = vec![
            event("alice", "a"),
            event("alice", "b"),
            event("alice", "c"),
        ];
        let (files, summary) = summarize_repository(&events).unwrap();

        assert_eq!(summary.author_entropy, 0.0);
        // Three files with one edit each are maximally spread.
        assert!((summary.file_entropy - 3f64.log2()).abs() < TOLERANCE);
        assert!(files.iter().all(|fe| fe.entropy == 0.0));
    }

    #[test]
    fn test_mean_file_entropy_of_empty_slice_is_zero() {
        assert_eq!(mean_file_entropy(&[]), 0.0);
    }
}
