// src/config/mnemonic_config.rs

use serde::{Deserialize, Deserializer, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Main configuration for the mnemonic demo and benchmark binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MnemonicConfig {
    /// Phone numbers to expand when none are given on the command line.
    /// Accepts a list, or a comma-separated string as set from the environment.
    #[serde(deserialize_with = "deserialize_phone_numbers")]
    pub phone_numbers: Vec<String>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Print generated mnemonics, not just counts and timings
    pub print_results: bool,

    /// Upper bound on mnemonics printed per number
    pub max_printed: usize,

    /// Benchmark harness settings
    pub benchmark: BenchmarkConfig,
}

/// Benchmark harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Timed runs per algorithm per number (default: 100)
    pub iterations: u64,

    /// Where to write the JSON report; no report when unset
    pub output_path: Option<String>,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        MnemonicConfig {
            phone_numbers: vec!["2276696".to_string(), "1234567".to_string()],
            log_level: "info".to_string(),
            print_results: false,
            max_printed: 20,
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            iterations: 100,
            output_path: None,
        }
    }
}

impl MnemonicConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("mnemonic.toml").exists() {
            builder = builder.add_source(File::with_name("mnemonic.toml"));
        } else if Path::new("mnemonic.yaml").exists() {
            builder = builder.add_source(File::with_name("mnemonic.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("phone_numbers", vec!["2276696", "1234567"])?
            .set_default("log_level", "info")?
            .set_default("print_results", false)?
            .set_default("max_printed", 20)?
            .set_default("benchmark.iterations", 100)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: MNEMONIC_, nested keys use __).
        // Values stay strings so numbers like 0123456 keep their leading zero.
        let builder = builder.add_source(
            Environment::with_prefix("MNEMONIC")
                .prefix_separator("_")
                .separator("__")
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PhoneNumberList {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_phone_numbers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PhoneNumberList::deserialize(deserializer)? {
        PhoneNumberList::List(numbers) => numbers,
        PhoneNumberList::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}
