//! Bulls and Cows Solver - CLI
//!
//! Adaptive Bulls and Cows solver with TUI and CLI modes.

use anyhow::Result;
use bulls_cows::{
    commands::{
        SolveConfig, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        score_guess, solve_secret,
    },
    core::Guess,
    output::{print_benchmark_result, print_score_result, print_solve_result},
    secrets::{all_secrets, loader::load_from_file, sample_secrets},
};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows solver that deduces the secret one change at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible guesses (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Force the opening guess (four distinct digits 1-9)
    #[arg(short = 'f', long, global = true)]
    first_guess: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific secret
    Solve {
        /// The secret to solve
        secret: String,

        /// Give up after this many turns
        #[arg(long, default_value_t = bulls_cows::commands::MAX_TURNS)]
        max_turns: usize,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a guess against a secret
    Score {
        /// The secret
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Read secrets from a file (one per line) instead of all 3024
        #[arg(short, long)]
        secrets: Option<String>,
    },
}

fn parse_first_guess(first_guess: Option<&str>) -> Result<Option<Guess>> {
    first_guess
        .map(|code| {
            code.parse::<Guess>()
                .map_err(|e| anyhow::anyhow!("Invalid first guess '{code}': {e}"))
        })
        .transpose()
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let first_guess = parse_first_guess(cli.first_guess.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.seed, first_guess),
        Commands::Simple => run_simple(cli.seed, first_guess).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve {
            secret,
            max_turns,
            verbose,
        } => run_solve_command(secret, max_turns, verbose, cli.seed, first_guess),
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(count, cli.seed, first_guess);
            Ok(())
        }
        Commands::TestAll { limit, secrets } => {
            run_test_all_command(limit, secrets.as_deref(), cli.seed, first_guess)
        }
    }
}

fn run_solve_command(
    secret: String,
    max_turns: usize,
    verbose: bool,
    seed: Option<u64>,
    first_guess: Option<Guess>,
) -> Result<()> {
    let mut config = SolveConfig::new(secret);
    config.max_turns = max_turns;
    config.seed = seed;
    config.first_guess = first_guess;

    let result = solve_secret(config).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: Option<u64>, first_guess: Option<Guess>) {
    let seed = seed.unwrap_or_else(rand::random);
    if let Some(first) = first_guess {
        println!("Running benchmark on {count} random secrets with forced first guess: {first}...");
    } else {
        println!("Running benchmark on {count} random secrets...");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let secrets = sample_secrets(&mut rng, count);

    let result = run_benchmark(&secrets, seed, first_guess);
    print_benchmark_result(&result);
}

fn run_test_all_command(
    limit: Option<usize>,
    secrets_path: Option<&str>,
    seed: Option<u64>,
    first_guess: Option<Guess>,
) -> Result<()> {
    let secrets = match secrets_path {
        Some(path) => load_from_file(path)?,
        None => all_secrets(),
    };
    if secrets.is_empty() {
        anyhow::bail!("No valid secrets to test");
    }
    let seed = seed.unwrap_or_else(rand::random);

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Bulls and Cows Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible secrets", secrets.len());
    println!("Seed: {seed}");
    if let Some(first) = first_guess {
        println!("Forced first guess: {first}");
    }
    println!();

    let stats = run_test_all(&secrets, limit, seed, first_guess);
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(seed: Option<u64>, first_guess: Option<Guess>) -> Result<()> {
    use bulls_cows::interactive::{App, run_tui};

    let app = App::new(seed, first_guess);
    run_tui(app)
}
