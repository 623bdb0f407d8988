use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};

/// Drive indexed tasks concurrently, optionally bounded by a request-level deadline.
///
/// Each task yields `(index, value)`; the value lands in slot `index` of the
/// returned vector. Slots whose task had not finished when the deadline
/// elapsed stay `None`; those tasks are dropped, which cancels them.
///
/// `len` must be greater than every index the tasks produce.
pub async fn join_indexed_with_deadline<I, F, T>(
    len: usize,
    tasks: I,
    deadline: Option<Duration>,
) -> Vec<Option<T>>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = (usize, T)>,
{
    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(len).collect();
    let mut pending: FuturesUnordered<F> = tasks.into_iter().collect();

    let drain = async {
        while let Some((i, v)) = pending.next().await {
            if let Some(slot) = slots.get_mut(i) {
                *slot = Some(v);
            }
        }
    };

    match deadline {
        Some(d) => {
            // Elapsed deadline leaves unfinished slots empty
            let _ = tokio::time::timeout(d, drain).await;
        }
        None => drain.await,
    }

    slots
}
