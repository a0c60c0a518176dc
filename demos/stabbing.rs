use clap::Parser;
use llrb_interval::{Closed, IntervalTree, MODE};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

#[derive(Debug, Parser)]
#[clap(version = "1.0", author = "J. Zrake <jzrake@clemson.edu>")]
struct Opts {
    #[clap(short = 'n', long, default_value = "100000")]
    num_intervals: usize,

    #[clap(short = 'w', long, default_value = "100")]
    max_width: u64,

    #[clap(short = 'q', long, default_value = "10000")]
    num_queries: usize,

    #[clap(short = 's', long, default_value = "666")]
    seed: u64,

    #[clap(short = 'v', long)]
    verbose: bool,
}

/**
 * A simple deterministic linear congruential generator, yielding closed
 * intervals with random start and width.
 */
struct Intervals {
    seed: u64,
    max_width: u64,
}

impl Iterator for Intervals {
    type Item = Closed<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.seed = (1103515245 * self.seed + 12345) % (1 << 31);
        let lo = self.seed % 1_000_000;
        Some(Closed::new(lo, lo + self.seed % (self.max_width + 1)))
    }
}

fn main() {
    let opts = Opts::parse();

    SimpleLogger::new()
        .with_level(if opts.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .init()
        .unwrap();

    info!("{:?}", opts);
    info!("balancing mode is {:?}", MODE);

    let mut intervals = Intervals { seed: opts.seed % (1 << 31), max_width: opts.max_width };
    let mut tree = IntervalTree::new();

    let start = std::time::Instant::now();
    for x in intervals.by_ref().take(opts.num_intervals) {
        tree.insert(x).unwrap();
    }
    info!("inserted {} intervals in {:.3}s, height {}", tree.len(), start.elapsed().as_secs_f64(), tree.height());

    let start = std::time::Instant::now();
    let mut hits = 0;
    let mut visited = 0;
    for x in intervals.by_ref().take(opts.num_queries) {
        let point = Closed::new(x.lo, x.lo);
        hits += tree.get(&point).unwrap().len();
        tree.visit_matching(|_| { visited += 1; false }, &x).unwrap();
    }
    assert!(visited >= hits);
    info!("{} stabbing queries found {} intervals in {:.3}s", opts.num_queries, hits, start.elapsed().as_secs_f64());

    if let Some(q) = intervals.next() {
        info!("floor of {:?} is {:?}", q, tree.floor(&q).unwrap());
        info!("ceil of {:?} is {:?}", q, tree.ceil(&q).unwrap());
    }

    let start = std::time::Instant::now();
    let mut drained = 0;
    while let Some(x) = tree.delete_min() {
        if drained == 0 {
            info!("first interval removed was {:?}", x);
        }
        drained += 1;
    }
    info!("drained {} intervals in {:.3}s", drained, start.elapsed().as_secs_f64());
}
