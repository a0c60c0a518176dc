use core::cmp::Ordering::{self, Less, Greater, Equal};
use core::ops::{Range, RangeInclusive};




/**
 * A type that can be stored in an interval tree, or used as a query against
 * one. The tree orders stored intervals by `min`, and uses `overlap` to guide
 * lookups and to prune subtrees whose aggregate range cannot match.
 *
 * Given `c = a.overlap(&b)`:
 *
 * - `c == Less` if `a` lies entirely before `b`
 * - `c == Equal` if `a` and `b` intersect
 * - `c == Greater` if `a` lies entirely after `b`
 *
 * Whether touching endpoints count as intersecting (closed vs. half-open
 * intervals) is up to the implementation.
 */
pub trait Overlapper {
    type Endpoint: Ord + Clone;
    type Mutable: Mutable<Endpoint = Self::Endpoint>;

    fn min(&self) -> &Self::Endpoint;
    fn max(&self) -> &Self::Endpoint;
    fn overlap<O>(&self, other: &O) -> Ordering
    where
        O: Overlapper<Endpoint = Self::Endpoint> + ?Sized;

    /**
     * Return a copy of this interval whose endpoints can be reassigned. The
     * tree uses these copies to hold the aggregate range of each subtree.
     */
    fn mutable(&self) -> Self::Mutable;
}




/**
 * An interval whose endpoints can be reassigned.
 */
pub trait Mutable: Overlapper {
    fn set_min(&mut self, min: Self::Endpoint);
    fn set_max(&mut self, max: Self::Endpoint);
}




/**
 * An interval including both of its endpoints. Two closed intervals overlap
 * if they share at least one point, so `[1, 2]` and `[2, 3]` overlap.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Closed<T> {
    pub lo: T,
    pub hi: T,
}

impl<T> Closed<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }
}

impl<T: Ord + Clone> Overlapper for Closed<T> {
    type Endpoint = T;
    type Mutable = Self;

    fn min(&self) -> &T {
        &self.lo
    }

    fn max(&self) -> &T {
        &self.hi
    }

    fn overlap<O>(&self, other: &O) -> Ordering
    where
        O: Overlapper<Endpoint = T> + ?Sized
    {
        if &self.hi < other.min() {
            Less
        } else if &self.lo > other.max() {
            Greater
        } else {
            Equal
        }
    }

    fn mutable(&self) -> Self {
        self.clone()
    }
}

impl<T: Ord + Clone> Mutable for Closed<T> {
    fn set_min(&mut self, min: T) {
        self.lo = min
    }

    fn set_max(&mut self, max: T) {
        self.hi = max
    }
}

impl<T> From<RangeInclusive<T>> for Closed<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (lo, hi) = range.into_inner();
        Self { lo, hi }
    }
}




/**
 * An interval including its start but not its end. Half-open intervals that
 * line up end-to-end do not overlap, so `[1, 2)` and `[2, 3)` are disjoint.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HalfOpen<T> {
    pub start: T,
    pub end: T,
}

impl<T> HalfOpen<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: Ord + Clone> Overlapper for HalfOpen<T> {
    type Endpoint = T;
    type Mutable = Self;

    fn min(&self) -> &T {
        &self.start
    }

    fn max(&self) -> &T {
        &self.end
    }

    fn overlap<O>(&self, other: &O) -> Ordering
    where
        O: Overlapper<Endpoint = T> + ?Sized
    {
        if &self.end <= other.min() {
            Less
        } else if &self.start >= other.max() {
            Greater
        } else {
            Equal
        }
    }

    fn mutable(&self) -> Self {
        self.clone()
    }
}

impl<T: Ord + Clone> Mutable for HalfOpen<T> {
    fn set_min(&mut self, min: T) {
        self.start = min
    }

    fn set_max(&mut self, max: T) {
        self.end = max
    }
}

impl<T> From<Range<T>> for HalfOpen<T> {
    fn from(range: Range<T>) -> Self {
        Self { start: range.start, end: range.end }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use core::cmp::Ordering::{Less, Greater, Equal};
    use super::{Closed, HalfOpen, Mutable, Overlapper};

    #[test]
    fn closed_intervals_overlap_at_shared_endpoints() {
        let a = Closed::new(1, 2);
        assert_eq!(a.overlap(&Closed::new(2, 3)), Equal);
        assert_eq!(a.overlap(&Closed::new(0, 1)), Equal);
        assert_eq!(a.overlap(&Closed::new(3, 4)), Less);
        assert_eq!(a.overlap(&Closed::new(-2, 0)), Greater);
        assert_eq!(Closed::new(0, 10).overlap(&Closed::new(4, 5)), Equal);
    }

    #[test]
    fn half_open_intervals_touching_end_to_end_do_not_overlap() {
        let a = HalfOpen::new(1, 2);
        assert_eq!(a.overlap(&HalfOpen::new(2, 3)), Less);
        assert_eq!(a.overlap(&HalfOpen::new(0, 1)), Greater);
        assert_eq!(a.overlap(&HalfOpen::new(0, 5)), Equal);
        assert_eq!(HalfOpen::from(0..2).overlap(&HalfOpen::from(1..3)), Equal);
    }

    #[test]
    fn mutable_copy_can_be_widened_without_touching_its_source() {
        let a = Closed::from(3..=4);
        let mut b = a.mutable();
        b.set_min(1);
        b.set_max(9);
        assert_eq!(a, Closed::new(3, 4));
        assert_eq!((b.min(), b.max()), (&1, &9));
    }
}
