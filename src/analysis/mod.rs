mod aggregate;
mod entropy;
pub mod git;
mod summary;

pub use aggregate::aggregate;
pub use entropy::{
    distribution_from_counts, distribution_from_occurrences, entropy_of_counts,
    entropy_of_occurrences, shannon_entropy,
};
pub use git::collect_events_async;
pub use summary::{
    mean_blend, mean_file_entropy, summarize_repository, summarize_repository_with, BlendPolicy,
};
