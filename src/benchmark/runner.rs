// src/benchmark/runner.rs

use std::time::Instant;
use log::{info, warn};

use crate::algorithms::MnemonicAlgorithm;
use crate::benchmark::results::{BenchmarkSuite, AlgorithmTiming, GenerationBenchmark};
use crate::core::PhoneNumber;

pub struct BenchmarkRunner {
    suite: BenchmarkSuite,
    iterations: u64,
}

impl BenchmarkRunner {
    pub fn new(iterations: u64) -> Self {
        BenchmarkRunner {
            suite: BenchmarkSuite::new(),
            iterations: iterations.max(1),
        }
    }

    /// Run generation benchmarks for every phone number
    pub fn run_generation_benchmarks(&mut self, phone_numbers: &[String]) {
        println!("\n{}", "=".repeat(80));
        println!("Running Mnemonic Generation Benchmarks ({} iterations each)", self.iterations);
        println!("{}", "=".repeat(80));

        for input in phone_numbers {
            match PhoneNumber::parse(input) {
                Ok(number) => {
                    println!("\nBenchmarking {}", number);
                    let result = self.benchmark_single_number(&number);
                    self.suite.add_generation_benchmark(result);
                }
                Err(e) => {
                    warn!("Skipping {:?}: {}", input, e);
                    self.suite.add_rejected_input(input, e.to_string());
                }
            }
        }
    }

    /// Time every algorithm on one number and check they agree
    pub fn benchmark_single_number(&self, number: &PhoneNumber) -> GenerationBenchmark {
        let mut timings = Vec::with_capacity(MnemonicAlgorithm::ALL.len());
        let mut outputs: Vec<Vec<String>> = Vec::with_capacity(MnemonicAlgorithm::ALL.len());

        for algorithm in MnemonicAlgorithm::ALL {
            let mut samples = Vec::with_capacity(self.iterations as usize);
            let mut last = Vec::new();

            for _ in 0..self.iterations {
                let start = Instant::now();
                last = algorithm.run(number);
                samples.push(start.elapsed().as_nanos() as u64);
            }

            let timing = AlgorithmTiming::from_samples(algorithm, &samples, last.len());
            println!("  {:<14} mean {} ns over {} runs ({})", algorithm.name(), timing.mean_time_ns, timing.iterations, timing.complexity);
            timings.push(timing);
            outputs.push(last);
        }

        let algorithms_agree = outputs.windows(2).all(|pair| pair[0] == pair[1]);
        if !algorithms_agree {
            warn!("Algorithms disagree on {}", number);
        }

        let mnemonic_count = outputs.first().map(Vec::len).unwrap_or(0);
        info!("{}: {} mnemonics", number, mnemonic_count);

        GenerationBenchmark {
            phone_number: number.to_string(),
            mnemonic_count,
            mnemonic_length: number.mnemonic_length(),
            timings,
            algorithms_agree,
        }
    }

    /// Save results to JSON file
    pub fn save_results(&self, path: &str) -> std::io::Result<()> {
        self.suite.save_to_file(path)
    }

    /// Print summary to console
    pub fn print_summary(&self) {
        self.suite.print_summary();
    }

    /// Get the benchmark suite
    pub fn get_suite(&self) -> &BenchmarkSuite {
        &self.suite
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Compare two benchmark suites
pub fn compare_benchmarks(baseline_path: &str, current_path: &str) -> std::io::Result<()> {
    let baseline = BenchmarkSuite::load_from_file(baseline_path)?;
    let current = BenchmarkSuite::load_from_file(current_path)?;

    println!("\n{}", "=".repeat(80));
    println!("BENCHMARK COMPARISON");
    println!("{}", "=".repeat(80));
    println!("\nBaseline: {} ({})", baseline.timestamp, baseline.system_info.short_commit());
    println!("Current:  {} ({})", current.timestamp, current.system_info.short_commit());

    println!("\n{}", "-".repeat(80));
    println!("{:<12} {:<14} {:>15} {:>15} {:>15}", "Number", "Algorithm", "Baseline (ns)", "Current (ns)", "Speedup");
    println!("{}", "-".repeat(80));

    for current_bench in &current.generation_benchmarks {
        let Some(baseline_bench) = baseline.generation_benchmarks.iter()
            .find(|b| b.phone_number == current_bench.phone_number) else {
            continue;
        };

        for timing in &current_bench.timings {
            let Some(base) = baseline_bench.timing_for(&timing.algorithm) else {
                continue;
            };
            println!("{:<12} {:<14} {:>15} {:>15} {:>15}",
                current_bench.phone_number,
                timing.algorithm,
                base.mean_time_ns,
                timing.mean_time_ns,
                speedup_label(base.mean_time_ns, timing.mean_time_ns)
            );
        }
    }

    println!("{}", "=".repeat(80));
    Ok(())
}

fn speedup_label(baseline_ns: u64, current_ns: u64) -> String {
    if baseline_ns == 0 || current_ns == 0 {
        return "-".to_string();
    }
    let speedup = baseline_ns as f64 / current_ns as f64;
    if speedup >= 1.0 {
        format!("{:.2}x faster", speedup)
    } else {
        format!("{:.2}x slower", 1.0 / speedup)
    }
}
