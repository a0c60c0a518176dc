use core::fmt;
use log::{debug, trace};
use crate::error::Error;
use crate::iter;
use crate::node::{Color, Link, Node};
use crate::overlap::Overlapper;




/**
 * An ordered collection of intervals, kept in a left-leaning red-black tree
 * whose nodes record the range spanned by their sub-trees. Intervals are
 * ordered by their minimum endpoint. Identical intervals are stored as
 * separate entries.
 *
 * Every operation that takes an interval argument rejects one whose minimum
 * exceeds its maximum with `Error::InvertedRange`, leaving the tree
 * untouched.
 */
pub struct IntervalTree<E: Overlapper> {
    root: Link<E>,
    count: usize,
}




/**
 * Return an error if the interval's minimum is greater than its maximum.
 */
fn check<Q: Overlapper + ?Sized>(q: &Q) -> Result<(), Error> {
    if q.min() > q.max() {
        debug!("rejecting interval with inverted range");
        Err(Error::InvertedRange)
    } else {
        Ok(())
    }
}




// ============================================================================
impl<E: Overlapper> IntervalTree<E> {

    /**
     * Create an empty tree.
     */
    pub fn new() -> Self {
        Self { root: None, count: 0 }
    }

    /**
     * Return the number of intervals stored, counting duplicates.
     */
    pub fn len(&self) -> usize {
        self.count
    }

    /**
     * Return true if the tree holds no intervals.
     */
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /**
     * Return the number of nodes on the longest path from the root to a leaf.
     */
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /**
     * Remove all intervals.
     */
    pub fn clear(&mut self) {
        self.root = None;
        self.count = 0;
    }




    /**
     * Insert an interval. Insertion never replaces an existing interval, even
     * an identical one.
     */
    pub fn insert(&mut self, elem: E) -> Result<(), Error> {
        check(&elem)?;

        let mut root = Node::insert(self.root.take(), elem);
        root.color = Color::Black;
        self.root = Some(root);
        self.count += 1;

        trace!("inserted interval, len = {}", self.count);
        Ok(())
    }




    /**
     * Remove one interval overlapping the query and return it. Which interval
     * is removed, when several overlap the query, depends on the shape of the
     * tree. Some overlapping intervals are not reachable by the overlap-guided
     * descent, in which case nothing is removed.
     */
    pub fn delete<Q>(&mut self, q: &Q) -> Result<Option<E>, Error>
    where
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        check(q)?;

        let removed = match self.root.take() {
            Some(root) => {
                let (root, removed) = root.delete(q);
                self.replace_root(root);
                removed
            }
            None => None,
        };
        if removed.is_some() {
            self.count -= 1;
            trace!("deleted interval, len = {}", self.count);
        }
        Ok(removed)
    }




    /**
     * Remove the interval with the smallest minimum and return it.
     */
    pub fn delete_min(&mut self) -> Option<E> {
        let (root, min) = self.root.take()?.delete_min();
        self.replace_root(root);
        self.count -= 1;

        trace!("deleted minimum interval, len = {}", self.count);
        Some(min)
    }




    /**
     * Remove the interval with the greatest minimum and return it.
     */
    pub fn delete_max(&mut self) -> Option<E> {
        let (root, max) = self.root.take()?.delete_max();
        self.replace_root(root);
        self.count -= 1;

        trace!("deleted maximum interval, len = {}", self.count);
        Some(max)
    }




    /**
     * Return all intervals overlapping the query, in order.
     */
    pub fn get<Q>(&self, q: &Q) -> Result<Vec<&E>, Error>
    where
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        let mut found = Vec::new();
        self.visit_matching(|e| { found.push(e); false }, q)?;
        Ok(found)
    }




    /**
     * Return the greatest interval that overlaps the query or lies before it.
     */
    pub fn floor<Q>(&self, q: &Q) -> Result<Option<&E>, Error>
    where
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        check(q)?;
        Ok(self.root.as_ref().and_then(|root| root.floor(q)).map(|n| &n.elem))
    }




    /**
     * Return the smallest interval that overlaps the query or lies after it.
     */
    pub fn ceil<Q>(&self, q: &Q) -> Result<Option<&E>, Error>
    where
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        check(q)?;
        Ok(self.root.as_ref().and_then(|root| root.ceil(q)).map(|n| &n.elem))
    }

    pub fn min(&self) -> Option<&E> {
        self.root.as_ref().map(|root| &root.lmost().elem)
    }

    pub fn max(&self) -> Option<&E> {
        self.root.as_ref().map(|root| &root.rmost().elem)
    }




    /**
     * Call `f` on every interval in order. Traversal stops as soon as `f`
     * returns true. Return whether the traversal was stopped early. `f` must
     * not change the endpoints of the intervals it is handed.
     */
    pub fn visit<'a, F>(&'a self, mut f: F) -> bool
    where
        F: FnMut(&'a E) -> bool
    {
        self.root.as_ref().map_or(false, |root| root.visit(&mut f))
    }

    pub fn visit_rev<'a, F>(&'a self, mut f: F) -> bool
    where
        F: FnMut(&'a E) -> bool
    {
        self.root.as_ref().map_or(false, |root| root.visit_rev(&mut f))
    }




    /**
     * Like `visit`, but only for intervals overlapping the query. Sub-trees
     * that cannot hold an overlapping interval are not entered.
     */
    pub fn visit_matching<'a, F, Q>(&'a self, mut f: F, q: &Q) -> Result<bool, Error>
    where
        F: FnMut(&'a E) -> bool,
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        check(q)?;
        Ok(self.root.as_ref().map_or(false, |root| root.visit_matching(&mut f, q)))
    }

    pub fn visit_matching_rev<'a, F, Q>(&'a self, mut f: F, q: &Q) -> Result<bool, Error>
    where
        F: FnMut(&'a E) -> bool,
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        check(q)?;
        Ok(self.root.as_ref().map_or(false, |root| root.visit_matching_rev(&mut f, q)))
    }

    pub fn iter(&self) -> iter::Iter<'_, E> {
        iter::traversal(&self.root)
    }

    /**
     * Return a lazy iterator over the intervals overlapping the query, in
     * order.
     */
    pub fn query<'a, Q>(&'a self, q: &'a Q) -> Result<impl Iterator<Item = &'a E>, Error>
    where
        Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
    {
        check(q)?;
        Ok(iter::query(&self.root, q))
    }

    fn replace_root(&mut self, root: Link<E>) {
        self.root = root.map(|mut root| {
            root.color = Color::Black;
            root
        });
    }




    // ========================================================================
    #[cfg(test)]
    fn validate(&self) {
        if let Some(root) = &self.root {
            assert_eq!(root.color, Color::Black, "root must be black");
            root.validate_order();
            root.validate_range();
            root.validate_balance();
        }
        assert_eq!(self.iter().count(), self.count);
    }
}




// ============================================================================
impl<E: Overlapper> Default for IntervalTree<E> {
    fn default() -> Self {
        Self::new()
    }
}




// ============================================================================
impl<E> Clone for IntervalTree<E>
where
    E: Overlapper + Clone,
    E::Mutable: Clone,
{
    fn clone(&self) -> Self {
        Self { root: self.root.clone(), count: self.count }
    }
}




// ============================================================================
impl<E: Overlapper + fmt::Debug> fmt::Debug for IntervalTree<E> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}




// ============================================================================
impl<'a, E: Overlapper> IntoIterator for &'a IntervalTree<E> {
    type Item = &'a E;
    type IntoIter = iter::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
