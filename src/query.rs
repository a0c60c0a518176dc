use core::cmp::Ordering::{Less, Greater, Equal};
use crate::node::{Link, Node};
use crate::overlap::Overlapper;




/**
 * Return true if the query could match something in the sub-tree under the
 * given link, judging by the sub-tree's aggregate range.
 */
fn may_contain<E, Q>(link: &Link<E>, q: &Q) -> bool
where
    E: Overlapper,
    Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
{
    link.as_ref().map_or(false, |n| q.overlap(&n.range) == Equal)
}




// ============================================================================
impl<E: Overlapper> Node<E> {




    /**
     * Return the greatest node that overlaps the query or lies before it,
     * according to `q.overlap`.
     */
    pub(crate) fn floor<Q>(&self, q: &Q) -> Option<&Self>
    where
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        match q.overlap(&self.elem) {
            Equal   => Some(self),
            Less    => self.l.as_ref().and_then(|l| l.floor(q)),
            Greater => self.r.as_ref().and_then(|r| r.floor(q)).or(Some(self)),
        }
    }




    /**
     * Return the smallest node that overlaps the query or lies after it,
     * according to `q.overlap`.
     */
    pub(crate) fn ceil<Q>(&self, q: &Q) -> Option<&Self>
    where
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        match q.overlap(&self.elem) {
            Equal   => Some(self),
            Greater => self.r.as_ref().and_then(|r| r.ceil(q)),
            Less    => self.l.as_ref().and_then(|l| l.ceil(q)).or(Some(self)),
        }
    }




    /**
     * Call `f` on every interval in this sub-tree, in order, until it returns
     * true. Return whether the traversal was stopped.
     */
    pub(crate) fn visit<'a, F>(&'a self, f: &mut F) -> bool
    where
        F: FnMut(&'a E) -> bool
    {
        if let Some(l) = &self.l {
            if l.visit(f) {
                return true
            }
        }
        if f(&self.elem) {
            return true
        }
        self.r.as_ref().map_or(false, |r| r.visit(f))
    }




    /**
     * Like `visit`, but in reverse order.
     */
    pub(crate) fn visit_rev<'a, F>(&'a self, f: &mut F) -> bool
    where
        F: FnMut(&'a E) -> bool
    {
        if let Some(r) = &self.r {
            if r.visit_rev(f) {
                return true
            }
        }
        if f(&self.elem) {
            return true
        }
        self.l.as_ref().map_or(false, |l| l.visit_rev(f))
    }




    /**
     * Call `f`, in order, on every interval in this sub-tree that overlaps the
     * query, until it returns true. Child sub-trees whose aggregate range does
     * not overlap the query are skipped. Return whether the traversal was
     * stopped.
     */
    pub(crate) fn visit_matching<'a, F, Q>(&'a self, f: &mut F, q: &Q) -> bool
    where
        F: FnMut(&'a E) -> bool,
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        if may_contain(&self.l, q) {
            if let Some(l) = &self.l {
                if l.visit_matching(f, q) {
                    return true
                }
            }
        }
        if q.overlap(&self.elem) == Equal && f(&self.elem) {
            return true
        }
        if may_contain(&self.r, q) {
            if let Some(r) = &self.r {
                return r.visit_matching(f, q)
            }
        }
        false
    }




    /**
     * Like `visit_matching`, but in reverse order.
     */
    pub(crate) fn visit_matching_rev<'a, F, Q>(&'a self, f: &mut F, q: &Q) -> bool
    where
        F: FnMut(&'a E) -> bool,
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        if may_contain(&self.r, q) {
            if let Some(r) = &self.r {
                if r.visit_matching_rev(f, q) {
                    return true
                }
            }
        }
        if q.overlap(&self.elem) == Equal && f(&self.elem) {
            return true
        }
        if may_contain(&self.l, q) {
            if let Some(l) = &self.l {
                return l.visit_matching_rev(f, q)
            }
        }
        false
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use crate::overlap::Closed;
    use crate::node::{Color, Link, Node};

    fn build(intervals: &[(i32, i32)]) -> Link<Closed<i32>> {
        let mut root = None;
        for &(lo, hi) in intervals {
            let mut n = Node::insert(root, Closed::new(lo, hi));
            n.color = Color::Black;
            root = Some(n);
        }
        root
    }

    #[test]
    fn floor_and_ceil_find_nearest_neighbours() {
        let root = build(&[(1, 3), (5, 6)]);
        let root = root.as_ref().unwrap();
        let q = Closed::new(4, 4);
        assert_eq!(root.floor(&q).map(|n| n.elem), Some(Closed::new(1, 3)));
        assert_eq!(root.ceil(&q).map(|n| n.elem), Some(Closed::new(5, 6)));
        assert!(root.floor(&Closed::new(-5, 0)).is_none());
        assert!(root.ceil(&Closed::new(7, 9)).is_none());
        assert_eq!(root.floor(&Closed::new(6, 9)).map(|n| n.elem), Some(Closed::new(5, 6)));
    }

    #[test]
    fn visit_stops_when_asked_to() {
        let root = build(&[(1, 2), (3, 4), (5, 6), (7, 8)]);
        let root = root.as_ref().unwrap();
        let mut seen = Vec::new();
        let stopped = root.visit(&mut |e: &Closed<i32>| {
            seen.push(e.lo);
            e.lo == 3
        });
        assert!(stopped);
        assert_eq!(seen, vec![1, 3]);

        seen.clear();
        let stopped = root.visit_rev(&mut |e: &Closed<i32>| {
            seen.push(e.lo);
            false
        });
        assert!(!stopped);
        assert_eq!(seen, vec![7, 5, 3, 1]);
    }

    #[test]
    fn visit_matching_skips_non_overlapping_intervals() {
        let root = build(&[(1, 3), (2, 4), (5, 6), (0, 10), (8, 9)]);
        let root = root.as_ref().unwrap();
        let mut seen = Vec::new();
        root.visit_matching(&mut |e: &Closed<i32>| { seen.push(*e); false }, &Closed::new(4, 5));
        assert_eq!(seen, vec![Closed::new(0, 10), Closed::new(2, 4), Closed::new(5, 6)]);

        seen.clear();
        root.visit_matching_rev(&mut |e: &Closed<i32>| { seen.push(*e); false }, &Closed::new(4, 5));
        assert_eq!(seen, vec![Closed::new(5, 6), Closed::new(2, 4), Closed::new(0, 10)]);
    }
}
