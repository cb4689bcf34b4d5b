//! Interactive play mode
//!
//! Text-based loop: the solver suggests a guess, the user types the
//! feedback the game showed, and the candidate set narrows until solved.

use super::picker::Picker;
use crate::core::{Corpus, Pattern, Word};
use crate::output::formatters::pattern_to_squares;
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, Write as _};

const MAX_GUESSES: u32 = 6;

/// Run the interactive solver loop
///
/// # Errors
///
/// Returns an error on I/O failure reading user input.
pub fn run_play(corpus: &Corpus, picker: &Picker) -> Result<(), String> {
    println!("\n{}", "═".repeat(62).cyan());
    println!(" Wordle Minimax - Interactive Solver ");
    println!("{}", "═".repeat(62).cyan());

    println!("\nAfter each suggested guess, enter the feedback pattern:");
    println!("  - G/g for green (correct position)");
    println!("  - Y/y for yellow (wrong position)");
    println!("  - B/b/- for black (not in word)");
    println!("  - Or type 'win' if you got it right");
    println!("\nCommands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut solver = Solver::new(corpus);
    let mut history: Vec<(Word, Pattern)> = Vec::new();

    loop {
        let possible = solver.reduce_possible(&history);
        let turn = history.len() as u32 + 1;
        let depth_left = MAX_GUESSES.saturating_sub(history.len() as u32);

        if possible.is_empty() {
            println!(
                "\n{}",
                "No candidates remain - some feedback may be wrong.".red()
            );
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" | "u" => {
                    let _ = history.pop();
                }
                "new" | "n" => history.clear(),
                "quit" | "q" | "exit" => return Ok(()),
                _ => {}
            }
            continue;
        }

        let (pick, report) = picker.suggest(&mut solver, &possible, depth_left);

        println!("{}", "─".repeat(62));
        println!(
            "Turn {turn}: {} candidate{} remaining",
            possible.len(),
            if possible.len() == 1 { "" } else { "s" }
        );
        println!("{}", "─".repeat(62));

        let Some(guess_id) = pick else {
            println!(
                "\n{}",
                "No guess can guarantee a solve within the remaining budget.".yellow()
            );
            println!("Best effort: try one of the remaining candidates.\n");
            match get_user_input("Command ('new', 'undo' or 'quit')")?.as_str() {
                "undo" | "u" => {
                    let _ = history.pop();
                }
                "new" | "n" => history.clear(),
                _ => return Ok(()),
            }
            continue;
        };

        let guess = corpus.word(guess_id).clone();
        println!(
            "\nSuggested guess: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        );
        if let Some(report) = report {
            println!(
                "  Worst case:   {} total guesses ({} evaluated{})",
                report.best_score,
                report.evaluated,
                if report.early_stopped {
                    ", early stop"
                } else {
                    ""
                }
            );
        }

        if possible.len() <= 10 {
            println!("  Candidates:   ");
            for &id in &possible {
                println!("    • {}", corpus.word(id).text().to_uppercase());
            }
        }
        println!();

        loop {
            let input = get_user_input("Enter feedback (G/Y/B, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    println!("\nNew game started.\n");
                    break;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        println!("Undone.\n");
                        break;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "solved" => {
                    history.push((guess.clone(), Pattern::PERFECT));
                    print_victory(&history);
                    match get_user_input("Play again? (yes/no)")?.as_str() {
                        "yes" | "y" => {
                            history.clear();
                            println!("\nNew game started.\n");
                            break;
                        }
                        _ => {
                            println!("\nThanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
                _ => {
                    if let Some(pattern) = Pattern::parse(&input) {
                        history.push((guess.clone(), pattern));
                        if pattern.is_perfect() {
                            print_victory(&history);
                            match get_user_input("Play again? (yes/no)")?.as_str() {
                                "yes" | "y" => {
                                    history.clear();
                                    println!("\nNew game started.\n");
                                }
                                _ => {
                                    println!("\nThanks for playing!\n");
                                    return Ok(());
                                }
                            }
                        }
                        break;
                    }
                    println!("{}", "Invalid pattern! Use five of G/Y/B, or 'win'.".red());
                }
            }
        }
    }
}

fn print_victory(history: &[(Word, Pattern)]) {
    let turns = history.len();

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        format!(
            "  Solved in {turns} {}!",
            if turns == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    println!("\n  Guess history:");
    for (i, (word, pattern)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            i + 1,
            word.text().to_uppercase().bright_white().bold(),
            pattern_to_squares(*pattern)
        );
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_lowercase())
}
