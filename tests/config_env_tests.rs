// tests/config_env_tests.rs
//
// Environment overrides for MnemonicConfig. Kept in its own test binary with a
// single test because environment variables are process-wide.

use phone_mnemonic::config::MnemonicConfig;

#[cfg(test)]
mod config_env_tests {
    use super::*;

    fn load() -> MnemonicConfig {
        MnemonicConfig::load_from_file("no-such-mnemonic-config.toml").unwrap()
    }

    #[test]
    fn test_environment_overrides() {
        // One number with a leading zero stays a single string
        std::env::set_var("MNEMONIC_PHONE_NUMBERS", "0123456");
        assert_eq!(load().phone_numbers, vec!["0123456"]);

        // A plain numeric value is not turned into an integer
        std::env::set_var("MNEMONIC_PHONE_NUMBERS", "8675309");
        assert_eq!(load().phone_numbers, vec!["8675309"]);

        // Comma-separated list
        std::env::set_var("MNEMONIC_PHONE_NUMBERS", "0123456,2276696");
        assert_eq!(load().phone_numbers, vec!["0123456", "2276696"]);

        // Scalar and nested overrides still deserialize from strings
        std::env::set_var("MNEMONIC_PRINT_RESULTS", "true");
        std::env::set_var("MNEMONIC_MAX_PRINTED", "5");
        std::env::set_var("MNEMONIC_BENCHMARK__ITERATIONS", "7");
        std::env::set_var("MNEMONIC_BENCHMARK__OUTPUT_PATH", "report.json");
        let config = load();
        assert!(config.print_results);
        assert_eq!(config.max_printed, 5);
        assert_eq!(config.benchmark.iterations, 7);
        assert_eq!(config.benchmark.output_path.as_deref(), Some("report.json"));

        for key in [
            "MNEMONIC_PHONE_NUMBERS",
            "MNEMONIC_PRINT_RESULTS",
            "MNEMONIC_MAX_PRINTED",
            "MNEMONIC_BENCHMARK__ITERATIONS",
            "MNEMONIC_BENCHMARK__OUTPUT_PATH",
        ] {
            std::env::remove_var(key);
        }

        assert_eq!(load().phone_numbers, vec!["2276696", "1234567"]);
    }
}
