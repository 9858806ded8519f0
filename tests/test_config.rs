//! Comprehensive tests for configuration parsing
//!
//! This file tests the config and architecture modules including:
//! - Loading the bundled JSON config files
//! - Handling invalid JSON and missing files
//! - Validation of numeric fields and names
//! - Architecture loading and initialization

use rust_feedforward::architecture::{initialize_parameters, load_architecture};
use rust_feedforward::config::load_config;
use rust_feedforward::utils::lr_scheduler::DecayMode;
use rust_feedforward::{CostFunction, NetworkError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp config");
    file
}

// ============================================================================
// Valid Config Loading Tests
// ============================================================================

mod valid_config_tests {
    use super::*;

    #[test]
    fn test_load_and_gate_config() {
        let config = load_config("config/and_gate.json").expect("Failed to load and_gate config");

        assert_eq!(config.cost_function, "cross-entropy");
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.num_iterations, 2000);
        assert_eq!(config.logging_interval, 200);
        assert_eq!(config.decay_rate, Some(0.0001));
        assert!(config.verbose);

        let options = config.to_options().unwrap();
        assert_eq!(options.cost_function, CostFunction::CrossEntropy);
        assert_eq!(options.decay_mode, DecayMode::FromInitial);
        assert_eq!(options.decay_rate, Some(0.0001));
    }

    #[test]
    fn test_load_quadratic_config_defaults() {
        let config = load_config("config/and_gate_quadratic.json")
            .expect("Failed to load quadratic config");

        let options = config.to_options().unwrap();
        assert_eq!(options.cost_function, CostFunction::Quadratic);
        assert_eq!(options.decay_rate, None);
        assert_eq!(options.decay_mode, DecayMode::Compounding);
        assert!(!options.verbose);
    }

    #[test]
    fn test_load_temp_config() {
        let temp = write_temp_config(
            r#"{
  "cost_function": "quadratic",
  "learning_rate": 0.2,
  "num_iterations": 40,
  "logging_interval": 8,
  "decay_rate": 0.01
}"#,
        );
        let options = load_config(temp.path()).unwrap().to_options().unwrap();

        assert_eq!(options.learning_rate, 0.2);
        assert_eq!(options.num_iterations, 40);
        assert_eq!(options.logging_interval, 8);
        assert_eq!(options.decay_rate, Some(0.01));
    }
}

// ============================================================================
// Invalid Config Tests
// ============================================================================

mod invalid_config_tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = load_config("config/does_not_exist.json").unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }

    #[test]
    fn test_malformed_json() {
        let temp = write_temp_config("{ \"cost_function\": ");
        let err = load_config(temp.path()).unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let temp = write_temp_config(r#"{"cost_function": "quadratic", "learning_rate": 0.1}"#);
        assert!(matches!(load_config(temp.path()), Err(NetworkError::Json(_))));
    }

    #[test]
    fn test_unsupported_cost_function() {
        let temp = write_temp_config(
            r#"{"cost_function": "mse-typo", "learning_rate": 0.1, "num_iterations": 5}"#,
        );
        let err = load_config(temp.path()).unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedCostFunction(name) if name == "mse-typo"));
    }

    #[test]
    fn test_non_positive_learning_rate() {
        let temp = write_temp_config(
            r#"{"cost_function": "quadratic", "learning_rate": 0.0, "num_iterations": 5}"#,
        );
        assert!(matches!(load_config(temp.path()), Err(NetworkError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_logging_interval() {
        let temp = write_temp_config(
            r#"{"cost_function": "quadratic", "learning_rate": 0.1, "num_iterations": 5,
                "logging_interval": 0}"#,
        );
        assert!(matches!(load_config(temp.path()), Err(NetworkError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_decay_mode() {
        let temp = write_temp_config(
            r#"{"cost_function": "quadratic", "learning_rate": 0.1, "num_iterations": 5,
                "decay_rate": 0.1, "decay_mode": "linear"}"#,
        );
        assert!(matches!(load_config(temp.path()), Err(NetworkError::InvalidConfig(_))));
    }
}

// ============================================================================
// Architecture Config Tests
// ============================================================================

mod architecture_config_tests {
    use super::*;

    #[test]
    fn test_load_and_gate_architecture() {
        let arch = load_architecture("config/and_gate_architecture.json").unwrap();
        assert_eq!(arch.layer_dims, vec![2, 3, 1]);
        assert_eq!(arch.seed, Some(42));

        let params = initialize_parameters(&arch).unwrap();
        assert_eq!(params.num_layers(), 2);
        assert_eq!(params.input_size(), 2);
        assert_eq!(params.output_size(), 1);
    }

    #[test]
    fn test_architecture_unsupported_activation() {
        let temp = write_temp_config(r#"{"layer_dims": [2, 2, 1], "output_activation": "softmax"}"#);
        let err = load_architecture(temp.path()).unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedActivation(_)));
    }

    #[test]
    fn test_architecture_unknown_initialization() {
        let temp = write_temp_config(r#"{"layer_dims": [2, 1], "initialization": "orthogonal"}"#);
        assert!(matches!(
            load_architecture(temp.path()),
            Err(NetworkError::InvalidConfig(_))
        ));
    }
}
