#![feature(test)]
extern crate test;

use llrb_interval::{Closed, IntervalTree};

const NUM_INTERVALS: usize = 100_000;
const NUM_QUERIES: usize = 1000;




fn stupid_random_intervals(len: usize, mut seed: u64) -> Vec<Closed<u64>> {
    let mut values = Vec::new();
    for _ in 0..len {
        seed = (1103515245 * seed + 12345) % (1 << 31);
        values.push(Closed::new(seed % 1_000_000, seed % 1_000_000 + seed % 100))
    }
    values
}

fn build_tree(intervals: &[Closed<u64>]) -> IntervalTree<Closed<u64>> {
    let mut tree = IntervalTree::new();
    for x in intervals {
        tree.insert(*x).unwrap();
    }
    tree
}




// ============================================================================
#[bench]
fn insertion_of_random_intervals(b: &mut test::Bencher) {

    let intervals = stupid_random_intervals(NUM_INTERVALS, 666);

    b.iter(|| {
        let tree = build_tree(&intervals);
        assert_eq!(tree.len(), NUM_INTERVALS);
    });
}




// ============================================================================
#[bench]
fn overlap_queries_with_pruning(b: &mut test::Bencher) {

    let tree = build_tree(&stupid_random_intervals(NUM_INTERVALS, 666));
    let queries = stupid_random_intervals(NUM_QUERIES, 12345);

    b.iter(|| {
        let mut total = 0;
        for q in &queries {
            tree.visit_matching(|_| { total += 1; false }, q).unwrap();
        }
        total
    });
}




// ============================================================================
#[bench]
fn overlap_queries_with_full_traversal(b: &mut test::Bencher) {

    use core::cmp::Ordering::Equal;
    use llrb_interval::Overlapper;

    let tree = build_tree(&stupid_random_intervals(NUM_INTERVALS, 666));
    let queries = stupid_random_intervals(NUM_QUERIES / 100, 12345);

    b.iter(|| {
        let mut total = 0;
        for q in &queries {
            tree.visit(|e| { if q.overlap(e) == Equal { total += 1 } false });
        }
        total
    });
}




// ============================================================================
#[bench]
fn draining_with_delete_min(b: &mut test::Bencher) {

    let intervals = stupid_random_intervals(NUM_INTERVALS / 10, 666);

    b.iter(|| {
        let mut tree = build_tree(&intervals);
        while tree.delete_min().is_some() {}
        assert!(tree.is_empty());
    });
}
