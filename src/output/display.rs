//! Display functions for command results

use super::formatters::{entropy_bar, pattern_to_squares};
use crate::commands::{BenchResult, RankResult, SolveResult, SuggestResult};
use colored::Colorize;

/// Print the result of a suggestion turn
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Candidates remaining: {}   Budget left: {}",
        result.candidates.len().to_string().bright_yellow(),
        result.depth_left.to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.candidates.len() <= 10 {
        for word in &result.candidates {
            println!("  • {}", word.to_uppercase());
        }
    }

    match &result.suggestion {
        Some(word) => {
            println!(
                "\nNext guess: {}",
                word.to_uppercase().bright_green().bold()
            );
            if let Some(report) = &result.report {
                println!(
                    "  Worst case:  {} total guesses",
                    report.best_score.to_string().bright_yellow()
                );
                println!(
                    "  Evaluated:   {} guesses in {:.1?}{}",
                    report.evaluated,
                    report.elapsed,
                    if report.early_stopped {
                        " (early stop)"
                    } else {
                        ""
                    }
                );
            }
        }
        None => {
            println!(
                "\n{}",
                "No guess can guarantee a solve within the budget.".red()
            );
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            pattern_to_squares(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print an entropy ranking
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} candidates ",
        "ENTROPY RANKING:".bright_cyan().bold(),
        result.total_candidates
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, entry) in result.entries.iter().enumerate() {
        let bar = entropy_bar(entry.entropy, 30);
        println!(
            "  {:>2}. {}  [{}] {}",
            i + 1,
            entry.word.to_uppercase().bright_white(),
            bar.green(),
            format!("{:.3} bits", entry.entropy).bright_yellow()
        );
    }
}

/// Print the result of a bench run
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    if result.failures > 0 {
        println!(
            "   Failures:         {}",
            result.failures.to_string().red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=6 {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
