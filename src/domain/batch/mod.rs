use std::future::Future;
use std::time::Duration;

use futures::future;

/// Batch size and pacing for one fan-out run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    pub batch_size: usize,
    pub inter_batch_delay: Duration,
}

impl BatchPolicy {
    pub const fn new(batch_size: usize, inter_batch_delay: Duration) -> Self {
        Self {
            batch_size,
            inter_batch_delay,
        }
    }
}

/// Run `unit_op` over `items` in fixed-size batches.
///
/// All items of a batch run concurrently and the executor waits for every one
/// of them to settle before moving on. Between batches it sleeps for
/// `inter_batch_delay` (never after the last batch). Results come back
/// aligned to input order regardless of completion order inside a batch; the
/// `usize` passed to `unit_op` is the item's position in the original list.
///
/// `unit_op` must not fail past its own boundary: a failed call is expected
/// to produce a failure-shaped `R`, so that one item can never cancel its
/// siblings or abort the remaining batches. The executor itself adds no
/// retry, no cancellation and no per-item timeout.
pub async fn run<T, R, Op, Fut>(items: Vec<T>, policy: BatchPolicy, unit_op: Op) -> Vec<R>
where
    Op: Fn(T, usize) -> Fut,
    Fut: Future<Output = R>,
{
    let total = items.len();
    let batch_size = policy.batch_size.max(1);

    let mut results = Vec::with_capacity(total);
    let mut pending = items.into_iter().enumerate();

    loop {
        let batch: Vec<(usize, T)> = pending.by_ref().take(batch_size).collect();
        if batch.is_empty() {
            break;
        }

        tracing::debug!(
            batch_start = batch[0].0,
            batch_len = batch.len(),
            total,
            "Running fan-out batch"
        );

        let settled = future::join_all(
            batch
                .into_iter()
                .map(|(position, item)| unit_op(item, position)),
        )
        .await;
        results.extend(settled);

        if results.len() < total {
            tokio::time::sleep(policy.inter_batch_delay).await;
        }
    }

    results
}
