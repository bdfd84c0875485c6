use tracing::debug;

use super::filters::AttributeFilter;
use crate::model::{ApproachRef, NeoDatabase};

/// Cap an iterator at `max` items. `None` and `Some(0)` leave it unbounded.
pub fn limit<I: Iterator>(iter: I, max: Option<usize>) -> std::iter::Take<I> {
    let cap = match max {
        Some(n) if n > 0 => n,
        _ => usize::MAX,
    };
    iter.take(cap)
}

/// Lazily yield the approaches matching every filter, in load order.
///
/// Nothing is evaluated until the returned iterator is pulled, and pulling stops
/// at `max` matches.
pub fn query<'db, 'f>(
    db: &'db NeoDatabase,
    filters: &'f [AttributeFilter],
    max: Option<usize>,
) -> impl Iterator<Item = ApproachRef<'db>> + 'f
where
    'db: 'f,
{
    debug!(
        filters = %filters.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
        limit = ?max,
        "Running query"
    );
    let matching = db
        .approaches()
        .filter(move |ca| filters.iter().all(|f| f.matches(ca)));
    limit(matching, max)
}
