//! XRP Ledger Vanity Seed Generator CLI
//!
//! Usage:
//!   xrp_vanity -p abc            # Find secrets reading "s?abc..."
//!   xrp_vanity -p abc -n 1       # Stop at the first match
//!   xrp_vanity -p abc -a 500000  # Cap the search at 500k attempts

use std::process;
use std::time::Duration;

use clap::Parser;

use xrp_vanity::{Config, Pattern, WorkerPool};

fn main() {
    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    // Create the pattern
    let pattern = Pattern::new(config.normalized_prefix());

    // Print startup info
    println!("XRP Ledger Vanity Seed Generator");
    println!("=================================");
    println!("Prefix:     {:?} (matched after the leading symbols)", pattern.prefix());
    println!("Difficulty: {}", pattern.difficulty_description());
    println!("Workers:    {}", config.worker_count());
    println!("Budget:     {} attempts", format_number(config.max_attempts));
    if config.count > 0 {
        println!("Target:     {} secret(s)", config.count);
    }
    println!();

    let unmatchable = pattern.unmatchable_symbols();
    if !unmatchable.is_empty() {
        eprintln!(
            "Warning: prefix symbol(s) {:?} never appear in the alphabet; \
             the search will scan the full budget without matching.",
            unmatchable
        );
    }

    // Create worker pool
    let pool = WorkerPool::new(config.worker_count(), pattern, config.max_attempts);

    // Set up ctrl-c handler
    let stop_flag = pool.stop_flag_clone();
    ctrlc_handler(stop_flag);

    println!("Searching... (Press Ctrl+C to stop)\n");

    let mut found = 0;
    let report_interval = Duration::from_secs(config.report_interval);

    loop {
        // Wait for result or timeout for progress report
        match pool.wait_for_result(report_interval) {
            Some(result) => {
                found += 1;
                print_result(&result, found);

                if config.count > 0 && found >= config.count {
                    println!("\nTarget reached! Found {} secret(s).", found);
                    break;
                }
            }
            None => {
                if pool.is_finished() {
                    println!("\nAttempt budget exhausted.");
                    break;
                }
                // Timeout - print progress
                print_progress(&pool);
            }
        }

        // Check if we should stop (ctrl-c was pressed)
        if pool.is_stopped() {
            println!("\nStopped by user.");
            break;
        }
    }

    // Print final stats
    println!("\n--- Final Statistics ---");
    println!("Total attempts:      {}", format_number(pool.total_attempts()));
    println!("Total matches found: {}", pool.total_matches());
    println!("Time elapsed:        {:.2}s", pool.elapsed().as_secs_f64());
    println!(
        "Average speed:       {}/s",
        format_number(pool.seeds_per_second() as u64)
    );

    pool.join();
}

fn print_result(result: &xrp_vanity::VanityResult, index: usize) {
    println!("=== Match #{} ===", index);
    println!("Secret:    {}", result.secret);
    println!("Seed body: {}", result.seed_hex);
    println!("Worker:    {}", result.worker_id);
    println!();
}

fn print_progress(pool: &WorkerPool) {
    let attempts = pool.total_attempts();
    let rate = pool.seeds_per_second();
    let elapsed = pool.elapsed().as_secs();

    println!(
        "[{:>4}s] Tested {} seeds ({}/s)",
        elapsed,
        format_number(attempts),
        format_number(rate as u64)
    );
}

fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn ctrlc_handler(stop_flag: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    ctrlc::set_handler(move || {
        stop_flag.store(true, std::sync::atomic::Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");
}
