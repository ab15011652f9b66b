//! JSON persistence and console reporting for file entropy records.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::ReportError;
use crate::types::FileEntropy;

/// Write file entropy records to `path` as a JSON array.
pub fn write_entropies<P: AsRef<Path>>(
    path: P,
    entropies: &[FileEntropy],
) -> Result<(), ReportError> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), entropies)?;
    Ok(())
}

/// Read file entropy records back from a JSON report at `path`.
pub fn read_entropies<P: AsRef<Path>>(path: P) -> Result<Vec<FileEntropy>, ReportError> {
    let file = File::open(path)?;
    let entropies = serde_json::from_reader(BufReader::new(file))?;
    Ok(entropies)
}

/// Sort file entropy records by filename, ascending.
pub fn sort_by_filename(files: &mut [FileEntropy]) {
    files.sort_by(|a, b| a.filename.cmp(&b.filename));
}

/// Sort file entropy records by entropy score, ascending.
pub fn sort_by_entropy(files: &mut [FileEntropy]) {
    files.sort_by(|a, b| a.entropy.total_cmp(&b.entropy));
}

/// Render file entropy records as a fixed-width console table.
///
/// The filename column is padded to the longest filename; scores are
/// printed to four decimal places.
pub fn render_table(entropies: &[FileEntropy]) -> String {
    let name_width = entropies
        .iter()
        .map(|fe| fe.filename.len())
        .max()
        .unwrap_or(0)
        .max("Filename".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$} | Score\n",
        "Filename",
        width = name_width
    ));
    out.push_str(&"-".repeat(name_width + 8));
    out.push('\n');
    for fe in entropies {
        out.push_str(&format!(
            "{:<width$} | {:.4}\n",
            fe.filename,
            fe.entropy,
            width = name_width
        ));
    }
    out
}
