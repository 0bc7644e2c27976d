//! Reconciling region lists from independent detectors.
//!
//! Each gatherer sees only its own construct, so two gatherers can claim
//! overlapping or duplicate spans of the same text. Merging sweeps both lists
//! from the largest end position down, keeping a cursor at the start of the
//! most recently accepted region: a candidate ending at or before the cursor
//! is accepted as-is, a candidate reaching past it is clipped to end at the
//! cursor, and a candidate starting inside already-claimed space is dropped.
//! Clipping rather than dropping on partial overlap matters -- dropping would
//! leave unrelated text unclaimed.

use crate::Region;

/// Merge two end-sorted, disjoint-or-nested region lists into one
/// end-sorted, pairwise-disjoint list.
///
/// The result covers the union of both inputs' spans. Adjacent output
/// regions always satisfy `r[i].end <= r[i + 1].start`, the only shape
/// [`strip_regions`](crate::strip_regions) is specified against.
#[must_use]
pub fn merge_regions(a: &[Region], b: &[Region]) -> Vec<Region> {
    let mut ia = a.len();
    let mut ib = b.len();
    let mut merged = Vec::with_capacity(ia + ib);

    // Start of the most recently accepted region; everything at or past it
    // is already claimed.
    let mut claimed_from: Option<usize> = None;

    while ia > 0 || ib > 0 {
        // Take whichever list's rearmost region ends later.
        let take_a = match (ia > 0, ib > 0) {
            (true, true) => a[ia - 1].end >= b[ib - 1].end,
            (true, false) => true,
            _ => false,
        };
        let candidate = if take_a {
            ia -= 1;
            a[ia]
        } else {
            ib -= 1;
            b[ib]
        };

        match claimed_from {
            Some(cursor) if candidate.start >= cursor => {
                // Wholly inside claimed space (a duplicate, or nested in an
                // already-accepted region): drop it.
            }
            Some(cursor) => {
                merged.push(Region::new(candidate.start, candidate.end.min(cursor)));
                claimed_from = Some(candidate.start);
            }
            None => {
                merged.push(candidate);
                claimed_from = Some(candidate.start);
            }
        }
    }

    merged.reverse();
    merged
}

/// Collapse one end-sorted, disjoint-or-nested region list by discarding
/// every region contained in another, leaving a disjoint set.
#[must_use]
pub fn collapse_regions(regions: &[Region]) -> Vec<Region> {
    merge_regions(regions, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn r(start: usize, end: usize) -> Region {
        Region::new(start, end)
    }

    fn assert_disjoint(regions: &[Region]) {
        for pair in regions.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "{:?} overlaps {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_merge_with_empty_is_collapse() {
        let regions = vec![r(2, 4), r(0, 6), r(8, 10)];
        assert_eq!(merge_regions(&regions, &[]), vec![r(0, 6), r(8, 10)]);
        assert_eq!(collapse_regions(&regions), vec![r(0, 6), r(8, 10)]);
    }

    #[test]
    fn test_merge_both_empty() {
        assert_eq!(merge_regions(&[], &[]), vec![]);
    }

    #[test]
    fn test_containment_drops_inner() {
        assert_eq!(merge_regions(&[r(0, 10)], &[r(2, 5)]), vec![r(0, 10)]);
        assert_eq!(merge_regions(&[r(2, 5)], &[r(0, 10)]), vec![r(0, 10)]);
    }

    #[test]
    fn test_duplicate_region_kept_once() {
        assert_eq!(merge_regions(&[r(3, 7)], &[r(3, 7)]), vec![r(3, 7)]);
    }

    #[test]
    fn test_partial_overlap_is_clipped_not_dropped() {
        // The earlier region reaches into the later one; it is truncated so
        // the text before the overlap stays claimed.
        let merged = merge_regions(&[r(0, 6)], &[r(4, 10)]);
        assert_eq!(merged, vec![r(0, 4), r(4, 10)]);
        assert_disjoint(&merged);
    }

    #[test]
    fn test_interleaved_disjoint_lists() {
        let merged = merge_regions(&[r(0, 2), r(8, 9)], &[r(3, 5), r(12, 14)]);
        assert_eq!(merged, vec![r(0, 2), r(3, 5), r(8, 9), r(12, 14)]);
        assert_disjoint(&merged);
    }

    #[test]
    fn test_output_invariant_holds_for_nested_inputs() {
        // Gatherer-shaped input: end-sorted, inner before outer.
        let a = vec![r(4, 8), r(2, 12)];
        let b = vec![r(6, 10), r(14, 20)];
        let merged = merge_regions(&a, &b);
        assert_eq!(merged, vec![r(2, 12), r(14, 20)]);
        assert_disjoint(&merged);
    }
}
