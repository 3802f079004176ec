use crate::chain::{Chain, QueueContext};
use tracing::{debug, instrument, trace};

/// Merges every queue of `chain` into the first present queue and sorts it.
/// Returns the size of the merged queue, or `0` if the chain holds no queue.
///
/// The chain is drained. Every other queue is left empty but still owned by
/// its caller. The queues need not be sorted beforehand; the merged queue is
/// sorted once with the same stable sort as [`Queue::sort`](crate::Queue::sort),
/// so equal values keep their chain order.
#[instrument(level = "debug", skip(chain))]
pub fn merge_all<'id, 'q>(chain: &mut Chain<'id, QueueContext<'q>>, descending: bool) -> usize {
    let mut target = None;
    while let Some(context) = chain.pop_front() {
        let id = context.id();
        let queue = match context.into_queue() {
            Some(queue) => queue,
            None => {
                trace!(id, "skipping absent queue");
                continue;
            }
        };
        match target {
            None => {
                trace!(id, "merging into queue");
                target = Some(queue);
            }
            Some(ref mut target) => {
                trace!(id, "appending queue");
                target.append(queue);
            }
        }
    }

    let target = match target {
        Some(target) => target,
        None => {
            debug!("no queue to merge");
            return 0;
        }
    };
    target.sort(descending);
    let size = target.size();
    debug!(size, "merged queues");
    size
}
