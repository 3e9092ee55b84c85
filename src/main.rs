// src/main.rs

mod benchmark_cli;

use std::process::ExitCode;
use std::time::Instant;

use log::{info, warn, debug, error};
use env_logger::Env;

use phone_mnemonic::algorithms::{expected_mnemonic_count, MnemonicAlgorithm};
use phone_mnemonic::config::MnemonicConfig;
use phone_mnemonic::core::PhoneNumber;

fn main() -> ExitCode {
    // Configuration comes first so it can set the default log level
    let config_result = MnemonicConfig::load();
    let config = config_result.as_ref().cloned().unwrap_or_default();

    // Initialize the logger
    let env = Env::default()
        .filter_or("MNEMONIC_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("MNEMONIC_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    if let Err(e) = &config_result {
        warn!("Failed to load configuration, using defaults: {}", e);
    }
    debug!("Configuration: {:?}", config);

    let args: Vec<String> = std::env::args().collect();

    let ok = if args.get(1).map(String::as_str) == Some("benchmark") {
        benchmark_cli::run_benchmarks(&args, &config)
    } else {
        let phone_numbers: Vec<String> = if args.len() > 1 {
            args[1..].to_vec()
        } else {
            config.phone_numbers.clone()
        };
        run_demo(&phone_numbers, &config)
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Times both algorithms on each number and prints the results.
fn run_demo(phone_numbers: &[String], config: &MnemonicConfig) -> bool {
    let mut all_valid = true;

    for input in phone_numbers {
        let number = match PhoneNumber::parse(input) {
            Ok(number) => number,
            Err(e) => {
                error!("{:?}: {}", input, e);
                all_valid = false;
                continue;
            }
        };

        info!("Phone number {} should yield {} mnemonics", number, expected_mnemonic_count(&number));

        let start = Instant::now();
        let slow = MnemonicAlgorithm::Accumulating.run(&number);
        let slow_us = start.elapsed().as_micros();

        let start = Instant::now();
        let fast = MnemonicAlgorithm::Backtracking.run(&number);
        let fast_us = start.elapsed().as_micros();

        println!("\nPhone number: {}", number);
        println!("Less efficient execution time (us): {}", slow_us);
        println!("More efficient execution time (us): {}", fast_us);
        println!("Mnemonics generated: {}", fast.len());

        if slow != fast {
            warn!("{} and {} disagree on {}", MnemonicAlgorithm::Accumulating.name(), MnemonicAlgorithm::Backtracking.name(), number);
        }

        if config.print_results {
            for mnemonic in fast.iter().take(config.max_printed) {
                println!("  {}", mnemonic);
            }
            if fast.len() > config.max_printed {
                println!("  ... and {} more", fast.len() - config.max_printed);
            }
        }
    }

    all_valid
}
