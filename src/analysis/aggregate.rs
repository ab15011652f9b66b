//! Aggregation of edit events into count tables.

use std::collections::HashMap;

use crate::types::{AggregationResult, EditEvent};

/// Group an edit event stream into the three count views the entropy
/// pipeline consumes: file→author→count, author→count, and file→count.
///
/// Counts are strict event frequencies, not distinct-author or
/// distinct-commit counts. Repeat contributions are what make the entropy
/// scores sensitive to how concentrated a file's history is, not merely
/// how many people ever touched it.
pub fn aggregate(events: &[EditEvent]) -> AggregationResult {
    let mut counts_by_file_then_author: HashMap<String, HashMap<String, usize>> = HashMap::new();
    let mut counts_by_author: HashMap<String, usize> = HashMap::new();
    let mut counts_by_file: HashMap<String, usize> = HashMap::new();

    for event in events {
        *counts_by_file_then_author
            .entry(event.file.clone())
            .or_default()
            .entry(event.author.clone())
            .or_insert(0) += 1;
        *counts_by_author.entry(event.author.clone()).or_insert(0) += 1;
        *counts_by_file.entry(event.file.clone()).or_insert(0) += 1;
    }

    AggregationResult {
        counts_by_file_then_author,
        counts_by_author,
        counts_by_file,
    }
}
