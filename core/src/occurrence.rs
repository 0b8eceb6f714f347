use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a keyword appears in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

/// Move the last occurrence of `occs` into place, keeping the list sorted by
/// descending frequency.
///
/// `occs[..n-1]` must already be sorted. The insertion point is found by binary
/// search over the inclusive range `0..=n-2`, probing `(lo + hi) / 2`. When a probe
/// hits an entry with the same frequency the new occurrence goes right there, ahead
/// of it.
///
/// Returns the indexes probed by the search, or `None` when the list holds only the
/// new occurrence (or nothing at all). The probes exist for testing; the index
/// itself ignores them.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occs.len() <= 1 {
        return None;
    }
    let sorted = occs.len() - 1;
    let target = occs[sorted].frequency;

    let mut probes = Vec::new();
    let (mut lo, mut hi) = (0, sorted - 1);
    while lo <= hi {
        let mid = (lo + hi) / 2;
        probes.push(mid);
        let freq = occs[mid].frequency;
        if freq == target {
            lo = mid;
            break;
        }
        if freq < target {
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        } else {
            lo = mid + 1;
        }
    }

    if lo != sorted {
        if let Some(last) = occs.pop() {
            occs.insert(lo, last);
        }
    }
    tracing::trace!(?probes, position = lo, "placed occurrence");
    Some(probes)
}
