//! Chainstore workload driver

use chainstore::HashTable;
use chrono::Local;
use clap::Parser;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

mod metrics;
mod scenarios;

use metrics::Metrics;
use scenarios::{Scenario, SharedTable};

#[derive(Parser, Debug, Clone)]
#[command(name = "chainstore-bench")]
#[command(about = "Chainstore hash table workload driver")]
struct Args {
    #[arg(short = 't', long, default_value = "4")]
    threads: usize,

    #[arg(short = 'd', long, default_value = "10")]
    duration: u64,

    #[arg(short = 's', long, default_value = "point_get")]
    scenario: String,

    #[arg(short = 'k', long, default_value = "10000")]
    keys: usize,

    #[arg(short = 'b', long, default_value = "8")]
    buckets: usize,

    #[arg(long, default_value = "0")]
    seed: u64,
}

fn run_thread(
    thread_id: usize,
    scenario: Arc<dyn Scenario>,
    table: Arc<SharedTable>,
    stop_flag: Arc<AtomicBool>,
    metrics: Arc<Metrics>,
    seed: u64,
) {
    // Spread the worker seeds with the golden-ratio constant
    let seed = seed.wrapping_add(thread_id as u64 * 0x9e3779b97f4a7c15);
    let mut rng = StdRng::seed_from_u64(seed);

    while !stop_flag.load(Ordering::Relaxed) {
        let start = Instant::now();
        let result = scenario.execute(&table, &mut rng);
        let elapsed = start.elapsed().as_nanos() as u64;

        metrics.record_op(elapsed);
        if result.is_err() {
            metrics.record_miss();
        }
    }
}

fn main() {
    let args = Args::parse();

    let scenario: Arc<dyn Scenario> = match args.scenario.as_str() {
        "point_get" => Arc::new(scenarios::PointGet::new(args.keys)),
        "read_write" => Arc::new(scenarios::ReadWrite::new(args.keys)),
        "write_only" => Arc::new(scenarios::WriteOnly::new(args.keys)),
        "update" => Arc::new(scenarios::Update::new(args.keys)),
        "insert_delete" => Arc::new(scenarios::InsertDelete::new(args.keys)),
        "mixed" => Arc::new(scenarios::Mixed::new(args.keys)),
        _ => {
            eprintln!("Unknown scenario: {}", args.scenario);
            std::process::exit(1);
        }
    };

    println!("Chainstore Workload Driver");
    println!("==========================");
    println!("Scenario: {}", scenario.name());
    println!("Threads: {}", args.threads);
    println!("Duration: {}s", args.duration);
    println!("Keys: {}", args.keys);
    println!("Initial buckets: {}", args.buckets);
    println!();

    println!("Preparing table...");
    let table: Arc<SharedTable> = Arc::new(Mutex::new(HashTable::with_buckets(args.buckets)));
    scenario.prepare(&table);
    {
        let table = table.lock();
        println!(
            "Prepared {} entries in {} buckets.",
            table.len(),
            table.bucket_count()
        );
    }
    println!();

    let stop_flag = Arc::new(AtomicBool::new(false));
    let metrics = Arc::new(Metrics::new());

    println!("Started at: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let start = Instant::now();

    let handles: Vec<_> = (0..args.threads)
        .map(|thread_id| {
            let scenario = Arc::clone(&scenario);
            let table = Arc::clone(&table);
            let stop_flag = Arc::clone(&stop_flag);
            let metrics = Arc::clone(&metrics);
            let seed = args.seed;
            thread::spawn(move || run_thread(thread_id, scenario, table, stop_flag, metrics, seed))
        })
        .collect();

    thread::sleep(Duration::from_secs(args.duration));
    stop_flag.store(true, Ordering::Relaxed);

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    let elapsed = start.elapsed();
    println!("Finished at: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!();

    let total_ops = metrics.total_ops();

    println!("Results");
    println!("-------");
    println!("Elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("Total ops: {}", total_ops);
    println!(
        "Throughput: {:.0} ops/sec",
        total_ops as f64 / elapsed.as_secs_f64()
    );
    if total_ops > 0 {
        println!(
            "Avg latency: {:.2} us",
            metrics.total_latency_ns() as f64 / total_ops as f64 / 1000.0
        );
        println!("Max latency: {:.2} us", metrics.max_latency_ns() as f64 / 1000.0);
        println!(
            "Miss rate: {:.2}%",
            100.0 * metrics.total_misses() as f64 / total_ops as f64
        );
    }

    let table = table.lock();
    println!();
    println!(
        "Final table: {} entries, {} buckets, load factor {:.3}",
        table.len(),
        table.bucket_count(),
        table.load_factor()
    );
}
