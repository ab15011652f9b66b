use chrono::{DateTime, Utc};
use git2::{Error, Oid, Repository};
use log::debug;
use std::time::Instant;
use tokio::task::spawn_blocking;

use crate::types::EditEvent;

/// Collect edit events from a Git repository asynchronously.
///
/// Walks the given branch's commit history (falling back to `HEAD` when
/// the branch does not exist) and yields one [`EditEvent`] per file
/// touched by each commit. Pass `"All"` as the contributor to keep every
/// author's commits.
pub async fn collect_events_async(
    path: String,
    branch: String,
    contributor: String,
) -> Result<Vec<EditEvent>, Error> {
    // Open repository in a blocking task since git2 operations are blocking
    let repo = spawn_blocking(move || Repository::open(&path))
        .await
        .map_err(|e| Error::from_str(&e.to_string()))?
        .map_err(|e| Error::from_str(&e.to_string()))?;

    collect_events_with_filter(repo, &branch, &contributor).await
}

/// Extract the edit events of a chunk of commits.
fn process_commit_chunk(
    repo: &Repository,
    chunk: &[Oid],
    contributor: &str,
) -> Result<Vec<EditEvent>, Error> {
    let mut events = Vec::new();

    // Pre-allocate a diff options object to reuse
    let mut diff_opts = git2::DiffOptions::new();
    diff_opts
        .include_untracked(false)
        .ignore_whitespace(true)
        .context_lines(0);

    for &oid in chunk {
        let commit = repo.find_commit(oid)?;
        let author = commit.author().name().unwrap_or("Unknown").to_string();

        if contributor != "All" && author != contributor {
            continue;
        }

        let timestamp = DateTime::<Utc>::from_timestamp(commit.time().seconds(), 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        // A commit's touched files are the paths in its diff against the
        // first parent; root commits diff against the empty tree.
        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };

        let diff =
            repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut diff_opts))?;
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                events.push(EditEvent {
                    author: author.clone(),
                    file: path.to_string_lossy().into_owned(),
                    timestamp,
                });
            }
        }
    }

    Ok(events)
}

/// Get optimal chunk size based on commit count
fn get_optimal_chunk_size(_total_commits: usize) -> usize {
    // Aim for chunks that will take ~100ms to process
    const TARGET_CHUNK_TIME_MS: usize = 100;
    const COMMITS_PER_MS: usize = 5; // Estimated commits processable per millisecond
    const MIN_CHUNK_SIZE: usize = 100;
    const MAX_CHUNK_SIZE: usize = 2000;

    let optimal_size = TARGET_CHUNK_TIME_MS * COMMITS_PER_MS;
    optimal_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE)
}

/// Get optimal number of parallel tasks based on system resources
fn get_optimal_task_count() -> usize {
    let cpu_count = num_cpus::get();
    // Use 75% of available CPUs to leave room for other system processes
    (cpu_count * 3 / 4).max(1)
}

/// Process commits in parallel chunks, merging events in chunk order.
async fn collect_events_parallel(
    repo_path: std::path::PathBuf,
    commits: Vec<Oid>,
    contributor: String,
) -> Result<Vec<EditEvent>, Error> {
    let start_time = Instant::now();
    let total_commits = commits.len();

    let chunk_size = get_optimal_chunk_size(total_commits);
    let chunks: Vec<Vec<Oid>> = commits.chunks(chunk_size).map(|c| c.to_vec()).collect();
    let mut handles = Vec::with_capacity(chunks.len());

    // Process chunks in parallel using a bounded number of tasks
    let max_tasks = get_optimal_task_count();
    let semaphore = std::sync::Arc::new(tokio::sync::Semaphore::new(max_tasks));

    for chunk in chunks {
        let repo_path = repo_path.clone();
        let contributor = contributor.clone();
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| Error::from_str(&format!("failed to acquire semaphore: {}", e)))?;

        let handle = tokio::spawn(async move {
            let _permit = permit;
            spawn_blocking(move || {
                let repo = Repository::open(repo_path)?;
                process_commit_chunk(&repo, &chunk, &contributor)
            })
            .await
            .map_err(|e| Error::from_str(&e.to_string()))?
        });
        handles.push(handle);
    }

    // Wait for all tasks; a failed chunk fails the whole collection
    let mut events = Vec::new();
    for handle in handles {
        let chunk_events = handle
            .await
            .map_err(|e| Error::from_str(&e.to_string()))??;
        events.extend(chunk_events);
    }

    let elapsed_secs = start_time.elapsed().as_secs_f64();
    debug!(
        "processed {} commits into {} events in {:.2}s (chunk size: {}, parallel tasks: {})",
        total_commits,
        events.len(),
        elapsed_secs,
        chunk_size,
        max_tasks
    );

    Ok(events)
}

/// Collect edit events with branch and contributor filters.
async fn collect_events_with_filter(
    repo: Repository,
    branch: &str,
    contributor: &str,
) -> Result<Vec<EditEvent>, Error> {
    let repo_path = repo.path().to_path_buf();
    let branch = branch.to_string();
    let contributor = contributor.to_string();

    // Get commits in a blocking task
    let commits = {
        let repo_path = repo_path.clone();
        spawn_blocking(move || {
            let repo = Repository::open(&repo_path)?;
            let mut revwalk = repo.revwalk()?;

            if let Ok(branch_ref) = repo.find_branch(&branch, git2::BranchType::Local) {
                if let Some(branch_ref_name) = branch_ref.get().name() {
                    revwalk.push_ref(branch_ref_name)?;
                } else {
                    revwalk.push_head()?;
                }
            } else {
                revwalk.push_head()?;
            }

            revwalk.collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(|e| Error::from_str(&e.to_string()))?
        .map_err(|e| Error::from_str(&e.to_string()))?
    };

    collect_events_parallel(repo_path, commits, contributor).await
}
