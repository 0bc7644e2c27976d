//! The region primitive.

/// A half-open `[start, end)` byte span of some text.
///
/// A region carries no identity beyond its bounds; what it *means* (a
/// template, a comment, a link) is known only to whichever gatherer produced
/// it. Offsets are byte offsets into the text the region was gathered from
/// and always fall on character boundaries when produced by a gatherer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// First byte covered by the region.
    pub start: usize,
    /// First byte past the end of the region.
    pub end: usize,
}

impl Region {
    /// Create a region covering `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `start > end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "region start {start} past end {end}");
        Self { start, end }
    }

    /// Number of bytes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the region covers no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies entirely within this region.
    #[must_use]
    pub fn contains(&self, other: &Region) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Whether the byte at `offset` is covered.
    #[must_use]
    pub fn covers(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_len_and_empty() {
        assert_eq!(Region::new(3, 8).len(), 5);
        assert!(Region::new(4, 4).is_empty());
        assert!(!Region::new(4, 5).is_empty());
    }

    #[test]
    fn test_containment() {
        let outer = Region::new(2, 10);
        assert!(outer.contains(&Region::new(2, 10)));
        assert!(outer.contains(&Region::new(4, 6)));
        assert!(!outer.contains(&Region::new(1, 6)));
        assert!(!outer.contains(&Region::new(4, 11)));
    }

    #[test]
    fn test_covers_is_half_open() {
        let r = Region::new(2, 5);
        assert!(r.covers(2));
        assert!(r.covers(4));
        assert!(!r.covers(5));
        assert!(!r.covers(1));
    }
}
