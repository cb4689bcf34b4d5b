//! Wordle Minimax - CLI
//!
//! Streak-optimal Wordle solver: worst-case minimax search over the
//! candidate set, with entropy ranking as the fallback for large sets.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_minimax::{
    commands::{
        DEFAULT_EXHAUSTIVE_BELOW, Observation, Picker, SolveConfig, parse_observation, run_bench,
        run_play, run_rank, run_suggest, solve_word,
    },
    core::Corpus,
    output::{print_bench_result, print_rank_result, print_solve_result, print_suggest_result},
    solver::Solver,
    wordlists::{
        WORDS,
        loader::{corpus_from_slice, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Streak-optimal Wordle solver using worst-case minimax search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Picker: auto (default), minimax, entropy
    #[arg(short, long, global = true, default_value = "auto")]
    picker: String,

    /// Wordlist: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Candidate counts below this get exhaustive minimax in auto mode
    #[arg(long, global = true, default_value_t = DEFAULT_EXHAUSTIVE_BELOW)]
    exhaustive_below: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver loop (default)
    Play,

    /// Suggest the next guess for a sequence of observations
    Suggest {
        /// Observed turns as GUESS=PATTERN, e.g. crane=BYGBB
        observations: Vec<String>,

        /// Total guess budget for the game
        #[arg(short, long, default_value_t = 6)]
        budget: u32,
    },

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank the current candidate set by entropy
    Rank {
        /// Observed turns as GUESS=PATTERN, narrowing the set first
        observations: Vec<String>,

        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Bench solver performance over sampled targets
    Bench {
        /// Number of random target words to test
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,

        /// Force a specific opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

/// Load the corpus selected by the -w flag
fn load_corpus(wordlist_mode: &str) -> Result<Corpus> {
    let corpus = match wordlist_mode {
        "embedded" => corpus_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}"))?,
    };

    if corpus.is_empty() {
        bail!("Wordlist '{wordlist_mode}' contains no valid 5-letter words");
    }
    Ok(corpus)
}

fn parse_observations(args: &[String]) -> Result<Vec<Observation>> {
    args.iter()
        .map(|arg| parse_observation(arg).map_err(|e| anyhow::anyhow!(e)))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist)?;
    let picker = Picker::from_name(&cli.picker, cli.exhaustive_below);

    // Default to interactive play if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&corpus, &picker).map_err(|e| anyhow::anyhow!(e)),
        Commands::Suggest {
            observations,
            budget,
        } => {
            let observations = parse_observations(&observations)?;
            let result = run_suggest(&corpus, &observations, budget, &picker);
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let mut solver = Solver::new(&corpus);
            let config = SolveConfig::new(word);
            let result =
                solve_word(&config, &picker, &mut solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Rank {
            observations,
            count,
        } => {
            let observations = parse_observations(&observations)?;
            let history: Vec<_> = observations
                .into_iter()
                .map(|o| (o.guess, o.pattern))
                .collect();
            let set = wordle_minimax::solver::reduce_possible(&corpus, &history);
            let result = run_rank(&corpus, &set, count);
            print_rank_result(&result);
            Ok(())
        }
        Commands::Bench { count, first_word } => {
            run_bench_command(&corpus, &picker, count, first_word.as_deref());
            Ok(())
        }
    }
}

fn run_bench_command(corpus: &Corpus, picker: &Picker, count: usize, first_word: Option<&str>) {
    use rand::prelude::IndexedRandom;

    let all_ids = corpus.all_ids();
    let targets: Vec<u32> = if count >= corpus.len() {
        all_ids.clone()
    } else {
        all_ids
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect()
    };

    // Derive the opening once; every game would repeat the same full-set
    // search otherwise
    let forced_first = match first_word {
        Some(word) => corpus.id_of(word),
        None => {
            let mut solver = Solver::new(corpus);
            picker.next_guess(&mut solver, &all_ids, 6)
        }
    };

    if let Some(id) = forced_first {
        println!(
            "Running bench on {} words with opening guess {}...",
            targets.len(),
            corpus.word(id).text().to_uppercase()
        );
    } else {
        println!("Running bench on {} words...", targets.len());
    }

    let result = run_bench(corpus, &targets, picker, forced_first);
    print_bench_result(&result);
}
