use core::cmp::{self, Ordering::{Less, Equal}};
use core::mem;
use core::ops::Not;
use crate::overlap::{Mutable, Overlapper};




/**
 * The two classical rebalancing disciplines for left-leaning red-black trees.
 * Both give the same asymptotic balance; they differ in where 4-nodes are
 * split.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Split 4-nodes eagerly while descending (2-3-4 tree).
    TopDown234,
    /// Split 4-nodes with color flips while ascending (2-3 tree).
    BottomUp23,
}

/// Rebalancing discipline compiled into this build of the crate.
#[cfg(feature = "top-down")]
pub const MODE: Mode = Mode::TopDown234;

/// Rebalancing discipline compiled into this build of the crate.
#[cfg(not(feature = "top-down"))]
pub const MODE: Mode = Mode::BottomUp23;




/**
 * Color of the link from a node's parent to the node. New nodes are red; the
 * root is forced black after every mutation.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}




pub(crate) type Link<E> = Option<Box<Node<E>>>;




/**
 * A node in a left-leaning red-black tree, augmented with the range spanned by
 * its whole subtree.
 */
pub(crate) struct Node<E: Overlapper> {
    pub(crate) elem: E,
    pub(crate) range: E::Mutable,
    pub(crate) color: Color,
    pub(crate) l: Link<E>,
    pub(crate) r: Link<E>,
}




/**
 * Return the effective color of a link. Missing nodes are black.
 */
pub(crate) fn is_red<E: Overlapper>(link: &Link<E>) -> bool {
    link.as_ref().map_or(false, |n| n.color == Color::Red)
}




/**
 * Return true if the link is black and so is its left child, meaning the
 * subtree root is a lone 2-node that cannot be deleted from directly.
 */
fn is_two_node<E: Overlapper>(link: &Link<E>) -> bool {
    !is_red(link) && !link.as_ref().map_or(false, |n| is_red(&n.l))
}




/**
 * Return true if a deletion heading right must first rotate the red left link
 * over. A 4-node already has a red right link, and rotating it would put two
 * red links in a row.
 */
fn lean_right_needed<E: Overlapper>(node: &Node<E>) -> bool {
    is_red(&node.l) && !is_red(&node.r)
}




// ============================================================================
impl<E: Overlapper> Node<E> {




    /**
     * Create a red leaf holding the given interval.
     */
    pub(crate) fn new(elem: E) -> Self {
        Self { range: elem.mutable(), elem, color: Color::Red, l: None, r: None }
    }




    /**
     * Return the height of this sub-tree.
     */
    pub(crate) fn height(&self) -> usize {
        self.l.as_ref().map_or(0, |l| l.height()).max(
        self.r.as_ref().map_or(0, |r| r.height())) + 1
    }




    /**
     * Return the leftmost node of this sub-tree.
     */
    pub(crate) fn lmost(&self) -> &Self {
        let mut n = self;
        while let Some(l) = &n.l {
            n = l
        }
        n
    }




    /**
     * Return the rightmost node of this sub-tree.
     */
    pub(crate) fn rmost(&self) -> &Self {
        let mut n = self;
        while let Some(r) = &n.r {
            n = r
        }
        n
    }




    /**
     * Re-derive the aggregate range of this node from its own interval and the
     * (assumed correct) aggregate ranges of its children.
     */
    pub(crate) fn adjust_range(&mut self) {
        let mut lo = self.elem.min();
        let mut hi = self.elem.max();

        for child in self.l.iter().chain(self.r.iter()) {
            lo = cmp::min(lo, child.range.min());
            hi = cmp::max(hi, child.range.max());
        }
        let (lo, hi) = (lo.clone(), hi.clone());

        self.range.set_min(lo);
        self.range.set_max(hi);
    }




    // ========================================================================
    // Balancing toolkit
    // ========================================================================




    /**
     * (a, c)b -> ((a, )b, )c
     *
     * The right child is promoted. A node without a right child is returned
     * unchanged.
     */
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut root = match self.r.take() {
            Some(r) => r,
            None => return self,
        };
        self.r = root.l.take();
        self.adjust_range();
        root.color = self.color;
        self.color = Color::Red;
        root.l = Some(self);
        root.adjust_range();
        root
    }




    /**
     * (a, c)b -> (, (, c)b)a
     *
     * The left child is promoted. A node without a left child is returned
     * unchanged.
     */
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut root = match self.l.take() {
            Some(l) => l,
            None => return self,
        };
        self.l = root.r.take();
        self.adjust_range();
        root.color = self.color;
        self.color = Color::Red;
        root.r = Some(self);
        root.adjust_range();
        root
    }




    /**
     * Toggle the color of this node and both of its children. Splits a 4-node
     * when this node is black with two red children, and merges the reverse.
     */
    pub(crate) fn flip_colors(&mut self) {
        self.color = !self.color;

        if let Some(l) = &mut self.l {
            l.color = !l.color
        }
        if let Some(r) = &mut self.r {
            r.color = !r.color
        }
    }




    /**
     * Restore left-leaning red links on the way back up from a mutation, and
     * re-derive this node's aggregate range.
     */
    pub(crate) fn fix_up(mut self: Box<Self>) -> Box<Self> {
        if is_red(&self.r) {
            if MODE == Mode::TopDown234 && self.r.as_ref().map_or(false, |r| is_red(&r.l)) {
                self.r = self.r.take().map(Self::rotate_right);
            }
            self = self.rotate_left();
        }
        if is_red(&self.l) && self.l.as_ref().map_or(false, |l| is_red(&l.l)) {
            self = self.rotate_right();
        }
        if MODE == Mode::BottomUp23 && is_red(&self.l) && is_red(&self.r) {
            self.flip_colors();
        }
        self.adjust_range();
        self
    }




    /**
     * Assuming this node is red and both its children are 2-nodes, make the
     * left child or one of its children red.
     */
    pub(crate) fn move_red_left(mut self: Box<Self>) -> Box<Self> {
        self.flip_colors();

        if self.r.as_ref().map_or(false, |r| is_red(&r.l)) {
            self.r = self.r.take().map(Self::rotate_right);
            self = self.rotate_left();
            self.flip_colors();

            if MODE == Mode::TopDown234 && self.r.as_ref().map_or(false, |r| is_red(&r.r)) {
                self.r = self.r.take().map(Self::rotate_left);
            }
        }
        self
    }




    /**
     * Assuming this node is red and both its children are 2-nodes, make the
     * right child or one of its children red.
     */
    pub(crate) fn move_red_right(mut self: Box<Self>) -> Box<Self> {
        self.flip_colors();

        if self.l.as_ref().map_or(false, |l| is_red(&l.l)) {
            self = self.rotate_right();
            self.flip_colors();
        }
        self
    }




    // ========================================================================
    // Insertion
    // ========================================================================




    /**
     * Insert an interval into this sub-tree and return the new sub-tree root.
     * Intervals are ordered by their minimum; an interval whose minimum equals
     * that of an existing node goes to its right, so duplicates are kept.
     */
    pub(crate) fn insert(node: Link<E>, elem: E) -> Box<Self> {
        let mut n = match node {
            Some(n) => n,
            None => return Box::new(Self::new(elem)),
        };

        if MODE == Mode::TopDown234 && is_red(&n.l) && is_red(&n.r) {
            n.flip_colors();
        }

        if elem.min() < n.elem.min() {
            n.l = Some(Self::insert(n.l.take(), elem));
        } else {
            n.r = Some(Self::insert(n.r.take(), elem));
        }

        if is_red(&n.r) && !is_red(&n.l) {
            n = n.rotate_left();
        }
        if is_red(&n.l) && n.l.as_ref().map_or(false, |l| is_red(&l.l)) {
            n = n.rotate_right();
        }
        if MODE == Mode::BottomUp23 && is_red(&n.l) && is_red(&n.r) {
            n.flip_colors();
        }

        n.adjust_range();
        n
    }




    // ========================================================================
    // Deletion
    // ========================================================================




    /**
     * Remove the leftmost node of this sub-tree. Return the new sub-tree root
     * and the removed interval.
     */
    pub(crate) fn delete_min(mut self: Box<Self>) -> (Link<E>, E) {
        if self.l.is_none() {
            return (self.r.take(), self.elem)
        }
        if is_two_node(&self.l) {
            self = self.move_red_left();
        }

        let (l, min) = match self.l.take() {
            Some(l) => l.delete_min(),
            None => return (self.r.take(), self.elem),
        };
        self.l = l;

        (Some(self.fix_up()), min)
    }




    /**
     * Remove the rightmost node of this sub-tree. Return the new sub-tree root
     * and the removed interval.
     */
    pub(crate) fn delete_max(mut self: Box<Self>) -> (Link<E>, E) {
        if lean_right_needed(&self) {
            self = self.rotate_right();
        }
        if self.r.is_none() {
            return (self.l.take(), self.elem)
        }
        if is_two_node(&self.r) {
            self = self.move_red_right();
        }

        let (r, max) = match self.r.take() {
            Some(r) => r.delete_max(),
            None => return (self.l.take(), self.elem),
        };
        self.r = r;

        (Some(self.fix_up()), max)
    }




    /**
     * Remove one node whose interval overlaps the query, if the descent guided
     * by `q.overlap` reaches one. Return the new sub-tree root and the removed
     * interval. When several stored intervals overlap the query, the one
     * removed is the first met along the descent.
     */
    pub(crate) fn delete<Q>(mut self: Box<Self>, q: &Q) -> (Link<E>, Option<E>)
    where
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        let removed = if q.overlap(&self.elem) == Less {
            if self.l.is_some() {
                if is_two_node(&self.l) {
                    self = self.move_red_left();
                }
                match self.l.take() {
                    Some(l) => {
                        let (l, removed) = l.delete(q);
                        self.l = l;
                        removed
                    }
                    None => None,
                }
            } else {
                None
            }
        } else {
            if lean_right_needed(&self) {
                self = self.rotate_right();
            }
            if q.overlap(&self.elem) == Equal && self.r.is_none() {
                return (self.l.take(), Some(self.elem))
            }
            if self.r.is_some() {
                let mut rotated = false;

                if is_two_node(&self.r) {
                    rotated = self.l.as_ref().map_or(false, |l| is_red(&l.l));
                    self = self.move_red_right();
                }

                // After a rotation the node here is the old left child, and the
                // right subtree is not ready for delete_min.
                let hit = !rotated && q.overlap(&self.elem) == Equal;

                match self.r.take() {
                    Some(r) if hit => {
                        let (r, min) = r.delete_min();
                        self.r = r;
                        Some(mem::replace(&mut self.elem, min))
                    }
                    Some(r) => {
                        let (r, removed) = r.delete(q);
                        self.r = r;
                        removed
                    }
                    None => None,
                }
            } else {
                None
            }
        };

        (Some(self.fix_up()), removed)
    }




    // ========================================================================
    // Validation, for testing purposes
    // ========================================================================




    /**
     * Panic unless the minimums are non-decreasing in order. Rotations can move
     * an equal minimum into the left subtree, so ties are allowed on both
     * sides.
     */
    #[cfg(test)]
    pub(crate) fn validate_order(&self) {
        if let Some(l) = &self.l {
            if l.rmost().elem.min() > self.elem.min() {
                panic!("unordered node: left subtree holds a minimum greater than its parent")
            }
            l.validate_order()
        }
        if let Some(r) = &self.r {
            if r.lmost().elem.min() < self.elem.min() {
                panic!("unordered node: right subtree holds a minimum less than its parent")
            }
            r.validate_order()
        }
    }




    /**
     * Panic unless every node's aggregate range is the union of its own
     * interval and its entire subtree.
     */
    #[cfg(test)]
    pub(crate) fn validate_range(&self) {
        let (lo, hi) = self.compute_range();

        if self.range.min() != lo || self.range.max() != hi {
            panic!("stored aggregate range out of sync with subtree")
        }
        if let Some(l) = &self.l {
            l.validate_range()
        }
        if let Some(r) = &self.r {
            r.validate_range()
        }
    }




    /**
     * Panic unless red links lean left, no red link follows another, and all
     * paths to a leaf cross the same number of black links. Return the black
     * height of this sub-tree.
     */
    #[cfg(test)]
    pub(crate) fn validate_balance(&self) -> usize {
        if is_red(&self.r) && !is_red(&self.l) {
            panic!("right-leaning red link")
        }
        if self.color == Color::Red && (is_red(&self.l) || is_red(&self.r)) {
            panic!("two red links in a row")
        }
        let hl = self.l.as_ref().map_or(0, |l| l.validate_balance());
        let hr = self.r.as_ref().map_or(0, |r| r.validate_balance());

        if hl != hr {
            panic!("unequal black height: {} on the left, {} on the right", hl, hr)
        }
        hl + if self.color == Color::Black { 1 } else { 0 }
    }




    /**
     * Return the minimum and maximum endpoint of this whole sub-tree, computed
     * without using the stored aggregate ranges.
     */
    #[cfg(test)]
    fn compute_range(&self) -> (&E::Endpoint, &E::Endpoint) {
        let mut lo = self.elem.min();
        let mut hi = self.elem.max();

        for child in self.l.iter().chain(self.r.iter()) {
            let (l, h) = child.compute_range();
            lo = cmp::min(lo, l);
            hi = cmp::max(hi, h);
        }
        (lo, hi)
    }
}




// ============================================================================
impl<E> Clone for Node<E>
where
    E: Overlapper + Clone,
    E::Mutable: Clone,
{
    fn clone(&self) -> Self {
        Self {
            elem: self.elem.clone(),
            range: self.range.clone(),
            color: self.color,
            l: self.l.clone(),
            r: self.r.clone(),
        }
    }
}
