//! Term Deposit Calculator CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- calculate --amount 10000 --rate 1.1 --term 3 --interest-paid monthly
//! cargo run -- batch deposits.csv > balances.csv
//! cargo run -- batch --strategy async --batch-size 2000 --max-concurrent 8 deposits.csv > balances.csv
//! ```
//!
//! Without a subcommand the calculator prompts for each value.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid deposit values, unreadable file, prompt failure, etc.)

use std::process;
use term_deposit_calculator::cli::{self, Command};
use term_deposit_calculator::interactive::{present, Session, TerminalPrompter};
use term_deposit_calculator::{calculate_raw, logging, strategy, DepositError};

fn main() {
    let args = cli::parse_args();
    logging::init_cli_logger(args.verbose);

    if let Err(e) = run(args.command.unwrap_or(Command::Interactive)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), DepositError> {
    match command {
        Command::Interactive => {
            let result = Session::new(TerminalPrompter::new()).run()?;
            println!(
                "{}",
                present(result.final_balance, result.request.interest_paid)
            );
        }
        Command::Calculate(calculate) => {
            let request = calculate.to_request();
            let final_balance = calculate_raw(&request)?;
            // calculate_raw only succeeds once the frequency has parsed
            let interest_paid = request.interest_paid.parse()?;
            println!("{}", present(final_balance, interest_paid));
        }
        Command::Batch(batch) => {
            let config = matches!(batch.strategy, cli::StrategyType::Async)
                .then(|| batch.to_batch_config());
            let strategy = strategy::create_strategy(batch.strategy.clone(), config);

            let mut output = std::io::stdout().lock();
            strategy.process(&batch.input_file, &mut output)?;
        }
    }

    Ok(())
}
