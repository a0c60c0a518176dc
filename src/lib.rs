//! An interval tree built on an augmented left-leaning red-black tree.
//! Intervals are ordered by their minimum endpoint, and every node records
//! the range spanned by its sub-tree, so that overlap queries can skip whole
//! sub-trees. Insertion, deletion, overlap lookup, floor / ceil queries and
//! ordered traversal all run in logarithmic time (plus the size of the
//! output).
//!
//! The tree is generic over any interval type implementing [`Overlapper`];
//! [`Closed`] and [`HalfOpen`] are provided for the common cases.
//!
//! ```
//! use llrb_interval::{Closed, IntervalTree};
//!
//! let mut tree = IntervalTree::new();
//! tree.insert(Closed::new(1, 3)).unwrap();
//! tree.insert(Closed::new(2, 4)).unwrap();
//! tree.insert(Closed::new(5, 6)).unwrap();
//!
//! let hits = tree.get(&Closed::new(2, 2)).unwrap();
//! assert_eq!(hits, vec![&Closed::new(1, 3), &Closed::new(2, 4)]);
//! ```
//!
//! Balancing uses the bottom-up 2-3 discipline by default. Enabling the
//! `top-down` feature switches to the top-down 2-3-4 discipline; see
//! [`MODE`].

mod iter;
mod node;
mod query;

pub mod error;
pub mod overlap;
pub mod tree;

pub use error::Error;
pub use iter::Iter;
pub use node::{Mode, MODE};
pub use overlap::{Closed, HalfOpen, Mutable, Overlapper};
pub use tree::IntervalTree;
