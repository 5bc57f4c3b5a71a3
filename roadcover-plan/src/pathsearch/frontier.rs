//! Priority frontier for least-cost searches.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Map a finite `f64` to an integer with the same ordering.
/// Same bit trick as `f64::total_cmp()`; the result is only good for comparisons.
fn cost_key(cost: f64) -> i64 {
    debug_assert!(cost.is_finite(), "Non-finite cost detected: {}", cost);
    let bits = cost.to_bits() as i64;
    bits ^ (((bits >> 63) as u64) >> 1) as i64
}

/// Priority frontier over `f64` costs with decrease-key support.
///
/// Backed by a cost-sorted vector (binary-search insertion) plus a position
/// index per tag. Equal-cost entries pop lowest tag first, so a search over
/// a fixed graph always expands nodes in the same order.
pub struct Frontier<T> {
    /// Sorted worst-to-best; the cheapest entry sits at the end.
    queue: Vec<(T, f64)>,
    /// Current position of every queued tag inside `queue`.
    position: HashMap<T, usize>,
}

impl<T: Copy + Ord + Hash> Frontier<T> {
    /// Create new empty instance.
    pub fn new() -> Self {
        Frontier {
            queue: Vec::new(),
            position: HashMap::new(),
        }
    }

    /// Queue ordering: descending cost, then descending tag, so popping from
    /// the end yields the cheapest entry with the lowest tag.
    fn sort_key(entry: &(T, f64)) -> (Reverse<i64>, Reverse<T>) {
        let (tag, cost) = *entry;
        (Reverse(cost_key(cost)), Reverse(tag))
    }

    /// Queue a tag that is not present yet.
    pub fn push(&mut self, tag: T, cost: f64) {
        debug_assert!(!self.position.contains_key(&tag), "Tag queued twice");
        let entry = (tag, cost);
        let at = match self.queue.binary_search_by_key(&Self::sort_key(&entry), Self::sort_key) {
            Ok(at) | Err(at) => at,
        };
        self.queue.insert(at, entry);
        for pos in self.position.values_mut() {
            if *pos >= at {
                *pos += 1;
            }
        }
        self.position.insert(tag, at);
    }

    /// Remove and return the cheapest entry.
    pub fn pop(&mut self) -> Option<(T, f64)> {
        let (tag, cost) = self.queue.pop()?;
        // The popped entry held the highest index, so no other positions shift.
        self.position.remove(&tag);
        Some((tag, cost))
    }

    /// Queue `tag` at `cost`, or lower its queued cost if `cost` improves on
    /// it. Returns `false` when the queued cost was already as good.
    pub fn offer(&mut self, tag: T, cost: f64) -> bool {
        match self.position.get(&tag) {
            Some(&at) if cost < self.queue[at].1 => {
                self.queue.remove(at);
                self.position.remove(&tag);
                for pos in self.position.values_mut() {
                    if *pos > at {
                        *pos -= 1;
                    }
                }
                self.push(tag, cost);
                true
            }
            Some(_) => false,
            None => {
                self.push(tag, cost);
                true
            }
        }
    }
}
