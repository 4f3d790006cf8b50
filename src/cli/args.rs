use crate::strategy::BatchConfig;
use crate::types::RawDepositRequest;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Calculate the final balance of a term deposit
#[derive(Parser, Debug)]
#[command(name = "deposit-calculator")]
#[command(about = "Calculate the final balance of a term deposit", long_about = None)]
pub struct CliArgs {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do; prompts interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for the deposit details one at a time
    Interactive,

    /// Calculate a single deposit from command-line values
    Calculate(CalculateArgs),

    /// Calculate every deposit in a CSV file and write results to stdout
    Batch(BatchArgs),
}

#[derive(clap::Args, Debug)]
pub struct CalculateArgs {
    /// Start deposit amount
    #[arg(long = "amount", value_name = "AMOUNT", allow_negative_numbers = true)]
    pub start_amount: f64,

    /// Annual interest rate as a percentage (1.1 means 1.1%)
    #[arg(long = "rate", value_name = "PERCENT", allow_negative_numbers = true)]
    pub interest_rate: f64,

    /// Investment term in years, fractions allowed (1.5 = 18 months)
    #[arg(long = "term", value_name = "YEARS", allow_negative_numbers = true)]
    pub investment_term: f64,

    /// Interest payment frequency: monthly, quarterly, annually or "at maturity"
    #[arg(long = "interest-paid", value_name = "FREQUENCY")]
    pub interest_paid: String,
}

impl CalculateArgs {
    /// Build the request exactly as given; validation is the calculator's job
    pub fn to_request(&self) -> RawDepositRequest {
        RawDepositRequest {
            start_amount: self.start_amount,
            interest_rate: self.interest_rate,
            investment_term: self.investment_term,
            interest_paid: self.interest_paid.clone(),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    /// Input CSV file path containing deposit records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads calculating each batch (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

/// Available processing strategies for batch files
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl BatchArgs {
    /// Create a BatchConfig from CLI arguments, falling back to defaults
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn batch_args(args: &[&str]) -> BatchArgs {
        match CliArgs::try_parse_from(args).unwrap().command {
            Some(Command::Batch(batch)) => batch,
            other => panic!("Expected batch command, got {:?}", other),
        }
    }

    #[rstest]
    #[case::no_command(&["program"], false)]
    #[case::verbose_without_command(&["program", "--verbose"], true)]
    fn test_default_is_interactive(#[case] args: &[&str], #[case] verbose: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert!(parsed.command.is_none());
        assert_eq!(parsed.verbose, verbose);
    }

    #[test]
    fn test_explicit_interactive() {
        let parsed = CliArgs::try_parse_from(["program", "interactive"]).unwrap();
        assert!(matches!(parsed.command, Some(Command::Interactive)));
    }

    #[test]
    fn test_calculate_accepts_negative_and_unknown_values() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "calculate",
            "--amount",
            "-10000",
            "--rate",
            "1.1",
            "--term",
            "3",
            "--interest-paid",
            "invalid",
        ])
        .unwrap();

        let Some(Command::Calculate(calculate)) = parsed.command else {
            panic!("Expected calculate command");
        };
        assert_eq!(
            calculate.to_request(),
            RawDepositRequest {
                start_amount: -10000.0,
                interest_rate: 1.1,
                investment_term: 3.0,
                interest_paid: "invalid".to_string(),
            }
        );
    }

    #[rstest]
    #[case::default_strategy(&["program", "batch", "input.csv"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "batch", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "batch", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = batch_args(args);
        match (&parsed.strategy, &expected) {
            (StrategyType::Sync, StrategyType::Sync) => (),
            (StrategyType::Async, StrategyType::Async) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    #[rstest]
    #[case::all_defaults(&["program", "batch", "input.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "batch", "--batch-size", "2000", "input.csv"], 2000, num_cpus::get())]
    #[case::custom_max_concurrent(&["program", "batch", "--max-concurrent", "8", "input.csv"], 1000, 8)]
    #[case::zero_batch_size(&["program", "batch", "--batch-size", "0", "input.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_max_concurrent: usize,
    ) {
        let config = batch_args(args).to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.max_concurrent_batches, expected_max_concurrent);
    }

    #[rstest]
    #[case::batch_missing_input(&["program", "batch"])]
    #[case::invalid_strategy(&["program", "batch", "--strategy", "invalid", "input.csv"])]
    #[case::calculate_missing_rate(&["program", "calculate", "--amount", "1", "--term", "1", "--interest-paid", "monthly"])]
    #[case::calculate_non_numeric(&["program", "calculate", "--amount", "lots", "--rate", "1", "--term", "1", "--interest-paid", "monthly"])]
    #[case::unknown_command(&["program", "withdraw"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
