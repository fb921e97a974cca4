//! Parallel scoring of the combination space.
//!
//! The lexicographic rank range `0..total` is cut into contiguous spans.
//! Each worker unranks the first combination of its span and walks the rest
//! with the sequential successor, so every span reports the earliest best
//! candidate it saw. Spans are merged on `(difference, rank)`, which makes
//! the winner independent of the order in which workers finish.

use super::cancel::Interrupt;
use super::combinations::unrank;
use super::{score_span, SpanResult};
use crate::config::ParallelConfig;
use crate::errors::BalanceError;
use rayon::prelude::*;

/// Spans handed to each worker, for load balancing across uneven finishes.
const SPANS_PER_WORKER: u64 = 4;

pub(super) fn search(
    scores: &[i128],
    total: u64,
    config: &ParallelConfig,
    interrupt: Interrupt<'_>,
) -> Result<SpanResult, BalanceError> {
    match config.max_concurrency {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads.max(1))
                .build()
                .map_err(|e| BalanceError::ThreadPool(e.to_string()))?;
            pool.install(|| search_in_current_pool(scores, total, interrupt))
        }
        None => search_in_current_pool(scores, total, interrupt),
    }
}

fn search_in_current_pool(
    scores: &[i128],
    total: u64,
    interrupt: Interrupt<'_>,
) -> Result<SpanResult, BalanceError> {
    let n = scores.len();
    let half = n / 2;
    let spans = (rayon::current_num_threads() as u64 * SPANS_PER_WORKER).clamp(1, total);
    let span_len = total.div_ceil(spans);

    (0..spans)
        .into_par_iter()
        .map(|span| {
            let start = span * span_len;
            if start >= total {
                return Ok(SpanResult::default());
            }
            let count = span_len.min(total - start);
            let first = unrank(n, half, start).ok_or_else(|| {
                BalanceError::InvalidInput(format!("combination rank {start} out of range"))
            })?;
            score_span(scores, first, start, count, interrupt)
        })
        .try_reduce(SpanResult::default, |a, b| Ok(a.merge(b)))
}
