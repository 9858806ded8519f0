use clap::Parser;
use ndarray::{array, Array2};
use rust_feedforward::architecture::{initialize_parameters, load_architecture, ArchitectureConfig};
use rust_feedforward::config::load_config;
use rust_feedforward::propagation::{accuracy, predict};
use rust_feedforward::{train, CostFunction, Parameters, TrainOptions};
use std::error::Error;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Small network learning the AND gate (2 inputs -> 3 ReLU units -> 1 sigmoid output).
const LAYER_DIMS: [usize; 3] = [2, 3, 1];
const SEED: u64 = 42;
// Training hyperparameters used when no config file is given.
const LEARNING_RATE: f64 = 0.5;
const ITERATIONS: usize = 2000;
const LOGGING_INTERVAL: usize = 200;

/// Train a small network on the AND gate
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "train_and_gate", version)]
struct Args {
    /// Training configuration JSON (cost function, learning rate, iterations, decay)
    #[arg(long)]
    training_config: Option<PathBuf>,

    /// Architecture JSON (layer sizes, initialization, seed)
    #[arg(long)]
    architecture_config: Option<PathBuf>,

    /// Write the trained parameters here as a JSON checkpoint
    #[arg(long)]
    checkpoint: Option<PathBuf>,
}

// AND gate dataset, one example per column.
fn and_gate() -> (Array2<f64>, Array2<f64>) {
    let x = array![[0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]];
    let y = array![[0.0, 0.0, 0.0, 1.0]];
    (x, y)
}

fn options_from_args(args: &Args) -> Result<TrainOptions, Box<dyn Error>> {
    match args.training_config {
        Some(ref path) => Ok(load_config(path)?.to_options()?),
        None => Ok(TrainOptions::new(
            CostFunction::CrossEntropy,
            LEARNING_RATE,
            ITERATIONS,
            LOGGING_INTERVAL,
        )
        .verbose(true)),
    }
}

fn initial_parameters(args: &Args) -> Result<Parameters, Box<dyn Error>> {
    let architecture = match args.architecture_config {
        Some(ref path) => load_architecture(path)?,
        None => {
            let mut config = ArchitectureConfig::from_dims(LAYER_DIMS.to_vec());
            config.seed = Some(SEED);
            config
        }
    };
    Ok(initialize_parameters(&architecture)?)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let (x, y) = and_gate();
    let options = options_from_args(args)?;
    let parameters = initial_parameters(args)?;

    info!(
        layers = parameters.num_layers(),
        cost_function = %options.cost_function,
        iterations = options.num_iterations,
        "training AND gate"
    );
    let outcome = train(&x, &y, &parameters, &options, None)?;

    if let (Some(first), Some(last)) = (outcome.costs.first(), outcome.costs.last()) {
        info!(
            "cost {:.6} (iteration {}) -> {:.6} (iteration {})",
            first.cost, first.epoch, last.cost, last.epoch
        );
    }

    let predictions = predict(&x, &outcome.parameters)?;
    for (column, prediction) in predictions.row(0).iter().enumerate() {
        info!(
            "Input: {:.1}, {:.1}, Expected Output: {:.1}, Predicted Output: {:.1}",
            x[[0, column]],
            x[[1, column]],
            y[[0, column]],
            prediction
        );
    }
    info!("accuracy {:.2}", accuracy(&predictions, &y)?);

    if let Some(ref path) = args.checkpoint {
        outcome.parameters.save_json(path)?;
        info!(path = %path.display(), "parameters saved");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Args {
        Args::try_parse_from(["train_and_gate"]).unwrap()
    }

    #[test]
    fn test_parse_args_defaults() {
        let args = defaults();
        assert!(args.training_config.is_none());
        assert!(args.architecture_config.is_none());
        assert!(args.checkpoint.is_none());
    }

    #[test]
    fn test_checkpoint_alone() {
        let args = Args::try_parse_from(["train_and_gate", "--checkpoint", "out.json"]).unwrap();
        assert!(args.training_config.is_none());
        assert!(args.architecture_config.is_none());
        assert_eq!(args.checkpoint, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "train_and_gate",
            "--training-config",
            "config/and_gate.json",
            "--architecture-config",
            "config/and_gate_architecture.json",
        ])
        .unwrap();
        assert_eq!(args.training_config, Some(PathBuf::from("config/and_gate.json")));
        assert_eq!(
            args.architecture_config,
            Some(PathBuf::from("config/and_gate_architecture.json"))
        );
    }

    #[test]
    fn test_unknown_and_positional_arguments_rejected() {
        assert!(Args::try_parse_from(["train_and_gate", "--epochs", "5"]).is_err());
        assert!(Args::try_parse_from(["train_and_gate", "config/and_gate.json"]).is_err());
    }

    #[test]
    fn test_default_parameters_match_layer_dims() {
        let params = initial_parameters(&defaults()).unwrap();
        assert_eq!(params.num_layers(), LAYER_DIMS.len() - 1);
        assert_eq!(params.input_size(), 2);
        assert_eq!(params.output_size(), 1);
    }

    #[test]
    fn test_default_options() {
        let options = options_from_args(&defaults()).unwrap();
        assert_eq!(options.cost_function, CostFunction::CrossEntropy);
        assert_eq!(options.num_iterations, ITERATIONS);
        assert!(options.verbose);
    }

    #[test]
    fn test_options_from_config_flag() {
        let args = Args::try_parse_from([
            "train_and_gate",
            "--training-config",
            "config/and_gate_quadratic.json",
        ])
        .unwrap();
        let options = options_from_args(&args).unwrap();
        assert_eq!(options.cost_function, CostFunction::Quadratic);
    }
}
