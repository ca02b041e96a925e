//! Per-query fetch cap.

/// Floor so very wide fan-outs still ask each phrase for something useful.
const MIN_PER_QUERY: usize = 3;

/// How many items to request per phrase: oversample the total by 50% across
/// the fan-out to offset dedup loss, clamped so a single phrase is never
/// asked for more than the final total. The upper clamp wins, so
/// `total < 3` yields `total`, not the floor.
pub(crate) fn per_query_cap(total: usize, query_count: usize) -> usize {
    debug_assert!(total >= 1 && query_count >= 1);
    let base = (total * 3).div_ceil(query_count * 2);
    base.max(MIN_PER_QUERY).min(total)
}
