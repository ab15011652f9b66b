/// Benchmark module for the entropy pipeline and history collection.
/// Measures count normalization, repository summarization, and event
/// extraction from a generated repository.
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use git2::{Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tokio::runtime::Runtime;

use gitdebt::analysis::{collect_events_async, entropy_of_counts, summarize_repository};
use gitdebt::types::EditEvent;

/// Build a synthetic edit event stream with skewed author activity
fn synthetic_events(event_count: usize) -> Vec<EditEvent> {
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..event_count)
        .map(|i| EditEvent {
            author: format!("author_{}", i % 7),
            file: format!("src/module_{}/file_{}.rs", i % 13, i % 101),
            timestamp,
        })
        .collect()
}

/// Set up a test repository with alternating authors for benchmarking
fn setup_bench_repo(commit_count: usize) -> (TempDir, Repository) {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();

    // Create initial commit
    let signature = Signature::now("Test User", "test@example.com").unwrap();
    let tree_id = {
        let mut index = repo.index().unwrap();
        index.write_tree().unwrap()
    };

    {
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            "Initial commit",
            &tree,
            &[],
        )
        .unwrap();
    }

    for i in 0..commit_count {
        let file_name = format!("file_{}.txt", i % 10);
        let content = format!("Content revision {}\n", i);
        let file_path = temp_dir.path().join(&file_name);
        fs::write(&file_path, content).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(&file_name)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let parent = repo.head().unwrap().peel_to_commit().unwrap();

        // Alternate between different authors
        let author = if i % 2 == 0 {
            Signature::now("Test User", "test@example.com").unwrap()
        } else {
            Signature::now("Another User", "another@example.com").unwrap()
        };

        {
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(
                Some("HEAD"),
                &author,
                &author,
                &format!("Revise {}", file_name),
                &tree,
                &[&parent],
            )
            .unwrap();
        }
    }

    (temp_dir, repo)
}

fn bench_entropy_of_counts(c: &mut Criterion) {
    let counts: Vec<usize> = (0..1000).map(|i| i % 17 + 1).collect();

    c.bench_function("entropy_of_counts_1000", |b| {
        b.iter(|| entropy_of_counts(black_box(&counts)).unwrap())
    });
}

fn bench_summarize_repository(c: &mut Criterion) {
    let events = synthetic_events(10_000);

    c.bench_function("summarize_repository_10k_events", |b| {
        b.iter(|| summarize_repository(black_box(&events)).unwrap())
    });
}

fn bench_collect_events(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let (temp_dir, _repo) = setup_bench_repo(100);
    let path = temp_dir.path().to_str().unwrap().to_string();

    c.bench_function("collect_events_100_commits", |b| {
        b.iter(|| {
            rt.block_on(collect_events_async(
                path.clone(),
                "main".to_string(),
                "All".to_string(),
            ))
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_entropy_of_counts,
    bench_summarize_repository,
    bench_collect_events
);
criterion_main!(benches);
