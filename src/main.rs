//! Word Guess - CLI
//!
//! Hangman-style word guessing with TUI and CLI modes, plus a solver that
//! can play and benchmark the game on its own.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use word_guess::{
    commands::{SimpleConfig, run_benchmark, run_simple, solve_word},
    core::{Difficulty, SecretWord},
    engine::RandomPicker,
    output::{print_benchmark_result, print_solve_result},
    session::{FileScoreStore, MemoryScoreStore, ScoreStore, Session},
    solver::{Solver, StrategyType},
    wordlists::{Categories, CategorySource, EmbeddedCategories},
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the hidden word one letter at a time before you run out of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (10 attempts), medium (7) or hard (5). Asked per round if omitted
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Player name used for the high score (prompted if omitted)
    #[arg(short, long, global = true)]
    player: Option<String>,

    /// Seed for word and hint selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory holding the high score files
    #[arg(long, global = true, default_value = FileScoreStore::DEFAULT_DIR)]
    score_dir: PathBuf,

    /// Keep scores in memory only
    #[arg(long, global = true)]
    no_save: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Keep the scrollback instead of clearing the screen each turn
        #[arg(long)]
        no_clear: bool,
    },

    /// Let the solver play a specific word
    Solve {
        /// The word to solve
        word: String,

        /// Show candidate counts for every step
        #[arg(short, long)]
        verbose: bool,

        /// Strategy: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },

    /// Benchmark the solver on the built-in words
    Benchmark {
        /// Strategy: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,

        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Never spend the hint
        #[arg(long)]
        no_hints: bool,
    },

    /// List the built-in categories
    Categories,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let categories = EmbeddedCategories.categories();
    log::debug!(
        "loaded {} categories, {} words",
        categories.len(),
        categories.total_words()
    );

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, &categories),
        Commands::Simple { no_clear } => run_simple_command(&cli, &categories, no_clear),
        Commands::Solve {
            word,
            verbose,
            strategy,
        } => run_solve_command(&cli, &categories, &word, verbose, &strategy),
        Commands::Benchmark {
            strategy,
            limit,
            no_hints,
        } => run_benchmark_command(&cli, &categories, &strategy, limit, no_hints),
        Commands::Categories => {
            print_categories(&categories);
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn make_store(cli: &Cli) -> Box<dyn ScoreStore> {
    if cli.no_save {
        Box::new(MemoryScoreStore::default())
    } else {
        Box::new(FileScoreStore::new(cli.score_dir.clone()))
    }
}

/// Ask for a player name until the store accepts one
fn start_session(cli: &Cli) -> Result<Session<Box<dyn ScoreStore>>> {
    if let Some(player) = &cli.player {
        return Session::new(player.trim(), make_store(cli))
            .with_context(|| format!("Could not start a session for {player:?}"));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("Enter your name: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("No player name given");
        }

        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        match Session::new(name, make_store(cli)) {
            Ok(session) => return Ok(session),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }
}

fn run_play_command(cli: &Cli, categories: &Categories) -> Result<()> {
    use word_guess::interactive::{App, run_tui};

    let session = start_session(cli)?;
    let app = App::new(categories, session, make_rng(cli.seed), cli.difficulty)?;
    run_tui(app)
}

fn run_simple_command(cli: &Cli, categories: &Categories, no_clear: bool) -> Result<()> {
    let mut session = start_session(cli)?;
    let config = SimpleConfig {
        difficulty: cli.difficulty,
        clear_screen: !no_clear,
    };
    run_simple(&mut session, categories, config, &mut make_rng(cli.seed))
}

fn run_solve_command(
    cli: &Cli,
    categories: &Categories,
    word: &str,
    verbose: bool,
    strategy_name: &str,
) -> Result<()> {
    let target = SecretWord::new(word).with_context(|| format!("Cannot solve {word:?}"))?;

    let mut words: Vec<SecretWord> = categories.iter().map(|(_, w)| w.clone()).collect();
    if !words.contains(&target) {
        words.push(target.clone());
    }

    let solver = Solver::new(StrategyType::from_name(strategy_name), &words);
    let mut rng = make_rng(cli.seed);
    let mut picker = RandomPicker::new(StdRng::from_rng(&mut rng));
    let result = solve_word(
        &target,
        cli.difficulty.unwrap_or_default(),
        &solver,
        &mut picker,
        &mut rng,
    )?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    cli: &Cli,
    categories: &Categories,
    strategy_name: &str,
    limit: Option<usize>,
    no_hints: bool,
) -> Result<()> {
    let words: Vec<SecretWord> = categories.iter().map(|(_, w)| w.clone()).collect();
    let test_words = &words[..limit.unwrap_or(words.len()).min(words.len())];

    let solver =
        Solver::new(StrategyType::from_name(strategy_name), &words).with_hint(!no_hints);
    let difficulties = cli
        .difficulty
        .map_or_else(|| Difficulty::ALL.to_vec(), |d| vec![d]);
    let seed = cli.seed.unwrap_or(0);

    println!(
        "Running benchmark on {} words with the {strategy_name} strategy...",
        test_words.len()
    );
    for difficulty in difficulties {
        let result = run_benchmark(&solver, test_words, difficulty, seed, true)?;
        print_benchmark_result(&result);
    }
    Ok(())
}

fn print_categories(categories: &Categories) {
    println!("\n{}", "Categories:".bright_cyan().bold());
    for name in categories.names() {
        let count = categories.words(name).map_or(0, <[SecretWord]>::len);
        println!("   {name:<12} {count:3} words");
    }
    println!("\n   Total: {} words", categories.total_words());
}
