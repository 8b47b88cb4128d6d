// src/rank.rs

//! Stable orderings for aggregated entities.
//!
//! Equal-ranked entries always keep the order they were handed in, so running
//! the pipeline twice over the same input gives the same report.

use crate::model::Actor;
use std::cmp::Reverse;

/// Sorts by `metric` descending; ties keep their current relative order.
pub fn rank_by_count<T>(items: &mut [T], metric: impl Fn(&T) -> u64) {
    items.sort_by_key(|item| Reverse(metric(item)));
}

/// Stable sort driven by a "ranks before" predicate.
///
/// `before` does not have to be a total order: an element only moves ahead of
/// another one when `before(moving, other)` holds, everything else keeps its
/// input order. `slice::sort_by` may panic on such predicates, so this is a
/// plain top-down merge sort.
pub fn stable_sort_by_less<T: Clone>(items: &mut [T], before: &impl Fn(&T, &T) -> bool) {
    if items.len() < 2 {
        return;
    }
    let mid = items.len() / 2;
    stable_sort_by_less(&mut items[..mid], before);
    stable_sort_by_less(&mut items[mid..], before);

    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // Take from the right only when it strictly ranks before the left head.
        let take_right = j < right.len() && (i == left.len() || before(&right[j], &left[i]));
        if take_right {
            *slot = right[j].clone();
            j += 1;
        } else {
            *slot = left[i].clone();
            i += 1;
        }
    }
}

/// Actor dominance: `a` ranks before `b` only if it has strictly more pushes
/// AND strictly more creates. Ties or partial dominance are left in the order
/// produced by the create-count ranking.
pub fn outranks(a: &Actor, b: &Actor) -> bool {
    a.commit_count > b.commit_count && a.create_count > b.create_count
}
