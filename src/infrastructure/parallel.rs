//! Bounded parallel fan-out over independent per-file operations
//!
//! Corpus scans and remap propagation touch many independent files; the
//! work fans out across a bounded rayon pool and all results are collected
//! before the caller applies its single registry commit.

use rayon::prelude::*;

/// Upper bound on worker threads for per-file operations.
pub const MAX_PARALLEL_FILES: usize = 8;

/// Map `f` over `items` using at most `max_workers` threads.
///
/// Results come back in input order. `f` must not touch shared mutable
/// state; each item is an independent read/write to a distinct file.
pub fn parallel_map<T, R, F>(items: Vec<T>, max_workers: usize, f: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    if items.len() <= 1 || max_workers <= 1 {
        return items.into_iter().map(f).collect();
    }

    let workers = max_workers.min(items.len());
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| items.into_par_iter().map(f).collect()),
        // The OS refused to spawn threads; degrade to a sequential pass.
        Err(_) => items.into_iter().map(f).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn empty_input_yields_empty_output() {
        let results: Vec<i32> = parallel_map(Vec::<i32>::new(), 4, |x| x);
        assert!(results.is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let items: Vec<usize> = (0..100).collect();
        let results = parallel_map(items, 4, |x| x * 2);
        assert_eq!(results, (0..100).map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn single_worker_is_sequential() {
        let items = vec![1, 2, 3];
        let results = parallel_map(items, 1, |x| x + 1);
        assert_eq!(results, vec![2, 3, 4]);
    }

    #[test]
    fn worker_count_never_exceeds_items() {
        // Two items, many workers: must not lose or duplicate results.
        let results = parallel_map(vec![10, 20], 16, |x| x);
        assert_eq!(results, vec![10, 20]);
    }

    #[test]
    fn runs_every_item_exactly_once() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let items: Vec<usize> = (0..37).collect();

        let results = parallel_map(items, MAX_PARALLEL_FILES, |x| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            x
        });

        assert_eq!(CALLS.load(Ordering::SeqCst), 37);
        let unique: HashSet<usize> = results.into_iter().collect();
        assert_eq!(unique.len(), 37);
    }
}
