//! Bucketing of the master rule list by retention flags, and the
//! find-and-consume lookup the reconciler is built on.

use crate::{ClassifiedKeepSpec, KeepSpec, RetentionFlags};

/// Returns the naked [`KeepSpec`] of every record whose flags equal
/// `flags` exactly, in original relative order.
///
/// Side-effect free: the input is never mutated, and a call with the
/// same arguments always yields the same result. Returns an empty vec
/// (never an absent value) when nothing matches.
#[must_use]
pub fn filter_by_flags(records: &[ClassifiedKeepSpec], flags: RetentionFlags) -> Vec<KeepSpec> {
    records
        .iter()
        .filter(|r| r.flags == flags)
        .map(|r| r.spec.clone())
        .collect()
}

/// Scan `records` from the front and remove the first element
/// structurally equal to `template`, returning whether one was removed.
///
/// First-match-only: structurally identical duplicates are not all
/// removed, only the first. This is how "this boilerplate rule is
/// present" is both detected and consumed, so the match cannot be
/// double-counted as a free-form additional rule during decomposition.
///
/// A `None` list is treated as "no match": callers may pass an optional
/// collaborator-owned list that has not been populated.
pub fn find_and_remove(template: &KeepSpec, records: Option<&mut Vec<KeepSpec>>) -> bool {
    let Some(records) = records else {
        return false;
    };
    match records.iter().position(|spec| spec == template) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}
