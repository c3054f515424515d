use anyhow::{Context, Result};
use clap::Parser;
use u_apriori_ga::apriori::{AprioriConfig, AprioriRunner, TransactionSet};
use u_apriori_ga::cli::{AprioriArgs, Cli, Command, QueensArgs};
use u_apriori_ga::ga::GaRunner;
use u_apriori_ga::nqueens::render_board;
use u_apriori_ga::report;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run_apriori(args: &AprioriArgs) -> Result<()> {
    let transactions = TransactionSet::from_path(&args.file)?;
    print!("{}", report::transactions_table(&transactions));

    let config = AprioriConfig::default()
        .with_min_support(args.support)
        .with_rules(!args.no_rules);
    AprioriRunner::run_with(&transactions, &config, |level| {
        print!("{}", report::item_set_table(&level.item_sets));
        print!("{}", report::rules_table(&level.rules));
    })
    .context("itemset mining failed")?;
    Ok(())
}

fn run_queens(args: &QueensArgs) -> Result<()> {
    let problem = args.problem();
    let config = args.ga_config();
    let result = GaRunner::run(&problem, &config).context("invalid genetic search settings")?;

    print!("{}", render_board(&result.best.queens));
    println!();
    if result.solved() {
        println!("Solved in {} generations", result.generations);
    } else {
        println!(
            "No solution within {} generations (best: {} collisions)",
            result.generations, result.best_fitness
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match &cli.command {
        Command::Apriori(args) => run_apriori(args),
        Command::Queens(args) => run_queens(args),
    }
}
