use crate::index::InvertedIndex;
use crate::occurrence::Occurrence;
use std::collections::HashSet;

/// Result cap for a disjunctive query.
pub const MAX_RESULTS: usize = 5;

/// Collects distinct documents up to a limit, in the order they are offered.
struct TopDocs<'a> {
    docs: Vec<String>,
    seen: HashSet<&'a str>,
    limit: usize,
}

impl<'a> TopDocs<'a> {
    fn new(limit: usize) -> Self { Self { docs: Vec::with_capacity(limit), seen: HashSet::new(), limit } }

    fn is_full(&self) -> bool { self.docs.len() >= self.limit }

    fn offer(&mut self, occ: &'a Occurrence) {
        if self.seen.insert(occ.document.as_str()) {
            self.docs.push(occ.document.clone());
        }
    }

    fn drain(&mut self, rest: &'a [Occurrence]) {
        for occ in rest {
            if self.is_full() {
                break;
            }
            self.offer(occ);
        }
    }
}

impl InvertedIndex {
    /// Documents containing `kw1` or `kw2`, best first, at most [`MAX_RESULTS`].
    pub fn search(&self, kw1: &str, kw2: &str) -> Vec<String> {
        self.search_top(kw1, kw2, MAX_RESULTS)
    }

    /// Merge the two keywords' occurrence lists into one ranking of up to `limit`
    /// documents.
    ///
    /// Both lists are walked head to head. When the heads name the same document it
    /// is taken once and both lists advance; otherwise the higher frequency wins, with
    /// ties going to `kw1`. A document already in the result is never repeated.
    /// Whatever is left of either list is appended in order. An unknown keyword
    /// behaves like an empty list.
    pub fn search_top(&self, kw1: &str, kw2: &str, limit: usize) -> Vec<String> {
        let first = self.occurrences(kw1).unwrap_or(&[]);
        let second = self.occurrences(kw2).unwrap_or(&[]);

        let mut top = TopDocs::new(limit);
        let (mut i, mut j) = (0, 0);
        while i < first.len() && j < second.len() && !top.is_full() {
            let (a, b) = (&first[i], &second[j]);
            if a.document == b.document {
                top.offer(a);
                i += 1;
                j += 1;
            } else if a.frequency >= b.frequency {
                top.offer(a);
                i += 1;
            } else {
                top.offer(b);
                j += 1;
            }
        }
        top.drain(&first[i..]);
        top.drain(&second[j..]);

        tracing::debug!(kw1, kw2, hits = top.docs.len(), "search");
        top.docs
    }
}
