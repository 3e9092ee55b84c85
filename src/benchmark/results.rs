// src/benchmark/results.rs

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::algorithms::MnemonicAlgorithm;
use crate::benchmark::system_info::SystemInfo;

/// Timing of one algorithm over repeated runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmTiming {
    pub algorithm: String,
    #[serde(default)]
    pub complexity: String,
    pub mean_time_ns: u64,
    pub std_dev_ns: u64,
    pub iterations: u64,
    /// Mnemonics produced per second at the mean time
    pub mnemonics_per_sec: f64,
}

impl AlgorithmTiming {
    /// Summarises per-run durations in nanoseconds.
    pub fn from_samples(algorithm: MnemonicAlgorithm, samples_ns: &[u64], mnemonic_count: usize) -> Self {
        let iterations = samples_ns.len() as u64;
        let mean = if samples_ns.is_empty() {
            0.0
        } else {
            samples_ns.iter().sum::<u64>() as f64 / samples_ns.len() as f64
        };
        let variance = if samples_ns.len() > 1 {
            samples_ns.iter()
                .map(|&s| (s as f64 - mean).powi(2))
                .sum::<f64>() / (samples_ns.len() - 1) as f64
        } else {
            0.0
        };
        let mnemonics_per_sec = if mean > 0.0 {
            mnemonic_count as f64 * 1_000_000_000.0 / mean
        } else {
            0.0
        };

        AlgorithmTiming {
            algorithm: algorithm.name().to_string(),
            complexity: algorithm.complexity().to_string(),
            mean_time_ns: mean.round() as u64,
            std_dev_ns: variance.sqrt().round() as u64,
            iterations,
            mnemonics_per_sec,
        }
    }
}

/// Both algorithms timed on one phone number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationBenchmark {
    pub phone_number: String,
    pub mnemonic_count: usize,
    pub mnemonic_length: usize,
    pub timings: Vec<AlgorithmTiming>,
    /// Whether every algorithm produced the same sequence
    pub algorithms_agree: bool,
}

impl GenerationBenchmark {
    pub fn timing_for(&self, algorithm: &str) -> Option<&AlgorithmTiming> {
        self.timings.iter().find(|t| t.algorithm == algorithm)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
    pub generation_benchmarks: Vec<GenerationBenchmark>,
    /// Inputs that failed validation, with the error message
    pub rejected_inputs: Vec<(String, String)>,
}

impl BenchmarkSuite {
    pub fn new() -> Self {
        BenchmarkSuite {
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            generation_benchmarks: Vec::new(),
            rejected_inputs: Vec::new(),
        }
    }

    pub fn add_generation_benchmark(&mut self, result: GenerationBenchmark) {
        self.generation_benchmarks.push(result);
    }

    pub fn add_rejected_input(&mut self, input: &str, reason: String) {
        self.rejected_inputs.push((input.to_string(), reason));
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let suite = serde_json::from_str(&json)?;
        Ok(suite)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(80));
        println!("BENCHMARK SUITE RESULTS");
        println!("{}", "=".repeat(80));
        println!("\nTimestamp: {}", self.timestamp);
        println!("{}", self.system_info.to_string_pretty());

        if !self.generation_benchmarks.is_empty() {
            println!("{}", "-".repeat(80));
            println!("{:<12} {:<14} {:>15} {:>15} {:>18}", "Number", "Algorithm", "Mean Time", "Std Dev", "Mnemonics/s");
            println!("{}", "-".repeat(80));

            for bench in &self.generation_benchmarks {
                for timing in &bench.timings {
                    println!("{:<12} {:<14} {:>15} {:>15} {:>18.0}",
                        bench.phone_number,
                        timing.algorithm,
                        format_duration(timing.mean_time_ns),
                        format_duration(timing.std_dev_ns),
                        timing.mnemonics_per_sec);
                }
                println!("{:<12} {} mnemonics of length {}{}",
                    "",
                    bench.mnemonic_count,
                    bench.mnemonic_length,
                    if bench.algorithms_agree { "" } else { "  [ALGORITHMS DISAGREE]" });
            }
        }

        if !self.rejected_inputs.is_empty() {
            println!("\n{}", "-".repeat(80));
            println!("REJECTED INPUTS");
            println!("{}", "-".repeat(80));
            for (input, reason) in &self.rejected_inputs {
                println!("{:<12} {}", input, reason);
            }
        }

        println!("\n{}", "=".repeat(80));
    }
}

impl Default for BenchmarkSuite {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_duration(ns: u64) -> String {
    if ns < 1_000 {
        format!("{} ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2} µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2} ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", ns as f64 / 1_000_000_000.0)
    }
}
