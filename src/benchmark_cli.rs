// src/benchmark_cli.rs
// CLI benchmark runner - separated to avoid polluting main.rs

use chrono::Utc;
use log::error;
use phone_mnemonic::benchmark::{compare_benchmarks, BenchmarkRunner};
use phone_mnemonic::config::MnemonicConfig;

/// `benchmark [NUMBER ...]` or `benchmark compare BASELINE CURRENT`
pub fn run_benchmarks(args: &[String], config: &MnemonicConfig) -> bool {
    if args.get(2).map(String::as_str) == Some("compare") {
        return match (args.get(3), args.get(4)) {
            (Some(baseline), Some(current)) => match compare_benchmarks(baseline, current) {
                Ok(()) => true,
                Err(e) => {
                    error!("Error comparing benchmarks: {}", e);
                    false
                }
            },
            _ => {
                eprintln!("Usage: phone-mnemonic benchmark compare <baseline.json> <current.json>");
                false
            }
        };
    }

    println!("\n{}", "=".repeat(80));
    println!("PHONE MNEMONIC BENCHMARK SUITE");
    println!("{}", "=".repeat(80));

    // Phone numbers from the command line, or the configured defaults
    let phone_numbers: Vec<String> = if args.len() > 2 {
        args[2..].to_vec()
    } else {
        config.phone_numbers.clone()
    };

    println!("\nBenchmarking phone numbers: {:?}", phone_numbers);

    let mut runner = BenchmarkRunner::new(config.benchmark.iterations);
    runner.run_generation_benchmarks(&phone_numbers);
    runner.print_summary();

    let filename = config.benchmark.output_path.clone().unwrap_or_else(|| {
        format!("benchmark_results_{}.json", Utc::now().format("%Y%m%d_%H%M%S"))
    });

    if config.benchmark.output_path.is_some() {
        match runner.save_results(&filename) {
            Ok(_) => println!("\nResults saved to: {}", filename),
            Err(e) => {
                error!("Error saving results: {}", e);
                return false;
            }
        }
    } else {
        println!("\nSet MNEMONIC_BENCHMARK__OUTPUT_PATH to save a JSON report, e.g. {}", filename);
    }

    runner.get_suite().rejected_inputs.is_empty()
}
