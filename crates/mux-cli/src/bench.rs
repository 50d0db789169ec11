use std::hint::black_box;
use std::time::Instant;

use mux_core::Trie;

pub struct BenchOptions {
    pub iterations: usize,
    pub warmup_ops: usize,
}

pub struct BenchReport {
    pub ops: usize,
    pub hits: usize,
    pub total_ms: f64,
    pub ns_per_op: f64,
}

/// Time `match_path` over `paths`, round robin.
pub fn run_bench(trie: &Trie<String>, paths: &[String], opts: &BenchOptions) -> Result<BenchReport, String> {
    if paths.is_empty() {
        return Err("No paths to benchmark".to_string());
    }

    // Reject malformed paths up front so the timed loop only measures lookups
    for path in paths {
        trie.match_path(path)
            .map_err(|e| format!("Cannot benchmark '{}': {}", path, e))?;
    }

    for i in 0..opts.warmup_ops {
        let _ = black_box(trie.match_path(&paths[i % paths.len()]));
    }

    let mut hits = 0usize;
    let start = Instant::now();
    for i in 0..opts.iterations {
        if let Ok(Some(_)) = black_box(trie.match_path(&paths[i % paths.len()])) {
            hits += 1;
        }
    }
    let elapsed = start.elapsed();

    let ops = opts.iterations;
    Ok(BenchReport {
        ops,
        hits,
        total_ms: elapsed.as_secs_f64() * 1000.0,
        ns_per_op: if ops == 0 {
            0.0
        } else {
            elapsed.as_nanos() as f64 / ops as f64
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> Trie<String> {
        let mut trie = Trie::new();
        trie.append("/users/:id", "users.show".to_string()).unwrap();
        trie
    }

    #[test]
    fn test_bench_counts_hits() {
        let paths = vec!["/users/1".to_string(), "/missing".to_string()];
        let opts = BenchOptions { iterations: 10, warmup_ops: 2 };
        let report = run_bench(&trie(), &paths, &opts).unwrap();
        assert_eq!(report.ops, 10);
        assert_eq!(report.hits, 5);
    }

    #[test]
    fn test_bench_rejects_bad_input() {
        let opts = BenchOptions { iterations: 1, warmup_ops: 0 };
        assert!(run_bench(&trie(), &[], &opts).is_err());
        assert!(run_bench(&trie(), &["a//b".to_string()], &opts).is_err());
    }
}
