//! filter_bench launcher
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌───────────┐
//! │  Config  │───▶│  Setup   │───▶│  Verify  │───▶│ Criterion │
//! │  (YAML)  │    │ (1M i32) │    │ (agree?) │    │ + allocs  │
//! └──────────┘    └──────────┘    └──────────┘    └───────────┘
//! ```
//!
//! Usage: `filter_bench [--env <name>] [--seed <u64>]`

use alloc_tracker::{Allocator, Session};
use anyhow::Context;

use filter_bench::benchmark::FilterBenchmark;
use filter_bench::config::AppConfig;
use filter_bench::logging::init_logging;

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get seed override from command line (--seed argument)
fn get_seed_override() -> Option<u64> {
    let args: Vec<String> = std::env::args().collect();
    seed_override_from(&args)
}

/// An unparsable value is ignored with a warning; the config seed stays.
fn seed_override_from(args: &[String]) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == "--seed" && i + 1 < args.len() {
            return match args[i + 1].parse() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    tracing::warn!(value = %args[i + 1], error = %e, "Ignoring invalid --seed");
                    None
                }
            };
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config =
        AppConfig::load(&env).with_context(|| format!("loading config for env '{}'", env))?;
    let _log_guard = init_logging(&app_config);
    // after logging init so a bad --seed is reported
    if let Some(seed) = get_seed_override() {
        app_config.bench.seed = Some(seed);
    }

    let bench_config = &app_config.bench;
    tracing::info!(
        env = %env,
        seed = ?bench_config.seed,
        sample_size = bench_config.sample_size,
        track_allocations = bench_config.track_allocations,
        "Starting filter_bench"
    );

    let bench = FilterBenchmark::setup(bench_config.seed);
    bench
        .verify_equivalence()
        .context("declarative and manual filters disagree")?;

    let allocs = Session::new();
    let mut criterion = bench_config.criterion();
    bench.register(
        &mut criterion,
        bench_config.track_allocations.then_some(&allocs),
    );
    criterion.final_summary();

    if bench_config.track_allocations {
        println!("\n=== Allocations per iteration ===");
        allocs.print_to_stdout();
    }

    tracing::info!("Benchmark run complete");
    Ok(())
}
