use core::cmp::Ordering::Equal;
use crate::node::{Link, Node};
use crate::overlap::Overlapper;




/**
 * By-reference iterator that traverses a sub-tree in-order. The `descend`
 * predicate decides whether a sub-tree is entered at all, and `predicate`
 * whether a visited node is yielded. Used for whole-tree iteration and for
 * range-pruned queries.
 */
pub(crate) struct NodeIter<'a, E: Overlapper, F, G> {
    nodes: Vec<&'a Node<E>>,
    descend: F,
    predicate: G,
}




// ============================================================================
impl<'a, E, F, G> NodeIter<'a, E, F, G>
where
    E: Overlapper,
    F: Fn(&Node<E>) -> bool,
    G: Fn(&Node<E>) -> bool,
{
    pub(crate) fn new(root: &'a Link<E>, descend: F, predicate: G) -> Self {
        let mut iter = Self { nodes: Vec::new(), descend, predicate };
        iter.push_lmost_path(root);
        iter
    }




    /**
     * Push the path from the given node to its leftmost descendant, stopping
     * at the first node the `descend` predicate rejects.
     */
    fn push_lmost_path(&mut self, mut link: &'a Link<E>) {
        while let Some(n) = link {
            if !(self.descend)(n) {
                break
            }
            self.nodes.push(n);
            link = &n.l;
        }
    }
}




// ============================================================================
impl<'a, E, F, G> Iterator for NodeIter<'a, E, F, G>
where
    E: Overlapper,
    F: Fn(&Node<E>) -> bool,
    G: Fn(&Node<E>) -> bool,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {

        /*
         * Pop the last node on the stack (A).
         *
         * If A has a right child (B) then push the path from B to its minimum
         * node, as far as the descend predicate allows.
         *
         * Yield the interval of A if it satisfies the predicate, otherwise
         * keep popping.
         */

        while let Some(a) = self.nodes.pop() {
            self.push_lmost_path(&a.r);

            if (self.predicate)(a) {
                return Some(&a.elem)
            }
        }
        None
    }
}




/**
 * By-reference iterator over a whole tree, in order of interval minimum.
 */
pub struct Iter<'a, E: Overlapper> {
    inner: NodeIter<'a, E, fn(&Node<E>) -> bool, fn(&Node<E>) -> bool>,
}

impl<'a, E: Overlapper> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

fn always<E: Overlapper>(_: &Node<E>) -> bool {
    true
}




/**
 * Return an iterator that traverses the whole tree by reference.
 */
pub(crate) fn traversal<E: Overlapper>(root: &Link<E>) -> Iter<'_, E> {
    let always: fn(&Node<E>) -> bool = always::<E>;
    Iter { inner: NodeIter::new(root, always, always) }
}




/**
 * Return an iterator that visits (by reference) only those intervals which
 * overlap the query, skipping sub-trees whose aggregate range does not.
 */
pub(crate) fn query<'a, E, Q>(root: &'a Link<E>, q: &'a Q) -> impl Iterator<Item = &'a E>
where
    E: Overlapper,
    Q: Overlapper<Endpoint = E::Endpoint> + ?Sized
{
    let descend = move |a: &Node<E>| q.overlap(&a.range) == Equal;
    let predicate = move |a: &Node<E>| q.overlap(&a.elem) == Equal;

    NodeIter::new(root, descend, predicate)
}
