//! Recency Ranker — selects the most-recent role(s), handling ties.

use crate::resume::dates::Timepoint;
use crate::resume::roles::Role;

/// End used for ordering: `end`, else `start`, else the epoch fallback.
fn effective_end(role: &Role) -> Timepoint {
    role.end.or(role.start).unwrap_or(Timepoint::EPOCH)
}

/// Returns every role tied for the most recent effective end, in descending
/// order of effective end (original order breaks ties).
///
/// If the top-ranked role has no parseable date at all, only that single
/// role is returned — callers must not assume a parseable date when the
/// returned set is smaller than the number of equally-stale roles.
pub fn most_recent_roles(mut roles: Vec<Role>) -> Vec<Role> {
    if roles.is_empty() {
        return roles;
    }

    // sort_by is stable, so equal effective ends keep extraction order.
    roles.sort_by(|a, b| effective_end(b).cmp(&effective_end(a)));

    let Some(latest_end) = roles[0].end.or(roles[0].start) else {
        roles.truncate(1);
        return roles;
    };

    roles
        .into_iter()
        .filter(|r| r.end.or(r.start) == Some(latest_end))
        .collect()
}
