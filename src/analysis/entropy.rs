//! Probability distributions and Shannon entropy over category counts.

use crate::error::EntropyError;
use crate::types::ProbabilityDistribution;

/// Normalize a vector of category counts into a probability distribution.
///
/// The output is index-aligned with the input: `p[i] = counts[i] / total`.
/// An empty input yields an empty distribution. A non-empty input whose
/// counts all sum to zero has no meaningful normalization and is rejected.
pub fn distribution_from_counts(
    counts: &[usize],
) -> Result<ProbabilityDistribution, EntropyError> {
    if counts.is_empty() {
        return Ok(Vec::new());
    }

    let total: usize = counts.iter().sum();
    if total == 0 {
        return Err(EntropyError::DegenerateDistribution { len: counts.len() });
    }

    let total = total as f64;
    Ok(counts.iter().map(|&count| count as f64 / total).collect())
}

/// Normalize a sequence of raw category observations into a probability
/// distribution.
///
/// The input holds one category index per observation, e.g. `[0, 1, 1, 3]`
/// is four observations over categories 0, 1, 1 and 3. Indices are first
/// densified into a count vector sized to the largest observed index, so
/// unseen in-range categories get probability zero.
pub fn distribution_from_occurrences(
    indices: &[usize],
) -> Result<ProbabilityDistribution, EntropyError> {
    distribution_from_counts(&occurrences_to_counts(indices))
}

/// Densify `[1, 1, 3]` into `[0, 2, 0, 1]`.
fn occurrences_to_counts(indices: &[usize]) -> Vec<usize> {
    let max = match indices.iter().max() {
        Some(max) => *max,
        None => return Vec::new(),
    };

    let mut counts = vec![0usize; max + 1];
    for &index in indices {
        counts[index] += 1;
    }
    counts
}

/// Compute the Shannon entropy of a probability distribution, in bits.
///
/// Entries with probability zero are skipped: they contribute nothing to
/// the sum by the `0 * log(0) = 0` convention, and must never reach
/// `log2`. An empty distribution has entropy 0.0; so does a distribution
/// concentrated on a single category. N equiprobable categories reach the
/// maximum of `log2(N)`.
pub fn shannon_entropy(dist: &[f64]) -> f64 {
    dist.iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

/// Shannon entropy of a category count vector.
pub fn entropy_of_counts(counts: &[usize]) -> Result<f64, EntropyError> {
    Ok(shannon_entropy(&distribution_from_counts(counts)?))
}

/// Shannon entropy of a raw category observation sequence.
pub fn entropy_of_occurrences(indices: &[usize]) -> Result<f64, EntropyError> {
    Ok(shannon_entropy(&distribution_from_occurrences(indices)?))
}
