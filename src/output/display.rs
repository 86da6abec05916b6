//! Display functions for command results

use super::formatters::{create_progress_bar, percentage};
use crate::commands::{ScoreResult, SimulationResult, SolveResult};
use crate::solver::GameOutcome;
use colored::Colorize;

/// Print the aggregate of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    let tally = &result.tally;
    let total = tally.total();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {total}");
    println!(
        "   Won:              {} {}",
        tally.wins,
        format!("({})", percentage(tally.wins, total)).green()
    );
    if tally.losses > 0 {
        println!(
            "   Lost:             {} {}",
            tally.losses,
            format!("({})", percentage(tally.losses, total)).red()
        );
    }
    if tally.failures > 0 {
        println!(
            "   No candidates:    {} {}",
            tally.failures,
            format!("({})", percentage(tally.failures, total)).yellow()
        );
    }
    println!(
        "   Win ratio:        {}",
        format!("{:.4}", tally.win_ratio()).bright_yellow().bold()
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", tally.average_rounds())
            .bright_yellow()
            .bold()
    );
    println!("   Round budget:     {}", result.max_rounds);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Seed:             {}", result.seed);

    if tally.wins > 0 {
        println!("\n📈 {}", "Rounds to win:".bright_cyan().bold());
        let max_count = tally.distribution.values().copied().max().unwrap_or(1);
        for rounds in 1..=result.max_rounds {
            let count = tally.distribution.get(&rounds).copied().unwrap_or(0);
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!(
                "   {rounds}: {} {count:5} ({:>6})",
                bar.green(),
                percentage(count, tally.wins)
            );
        }
    }
}

/// Print every turn of a solved (or failed) game
pub fn print_solve_result(result: &SolveResult) {
    let report = &result.report;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.answer.text().to_uppercase().bright_yellow().bold()
    );
    if !result.in_dictionary {
        println!("{}", "  (answer is not in the dictionary)".yellow());
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in report.turns.iter().enumerate() {
        println!(
            "\nRound {}: {} {} {}",
            i + 1,
            turn.guess.text().to_uppercase(),
            turn.feedback.to_emoji(),
            turn.feedback
        );
        println!(
            "  Candidates: {} → {}",
            turn.candidates_before, turn.candidates_after
        );
    }

    println!();
    match report.outcome {
        GameOutcome::Won { rounds } => println!(
            "{}",
            format!("✅ Solved in {rounds} guesses!").green().bold()
        ),
        GameOutcome::Lost => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", report.turns.len())
                .red()
                .bold()
        ),
        GameOutcome::NoCandidates { round } => println!(
            "{}",
            format!("⚠️  No candidates left after round {round}")
                .yellow()
                .bold()
        ),
    }
    println!("Seed: {}", result.seed);
}

/// Print the heuristic score of a word
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER SCORE:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!();
    for (letter, frequency) in &result.letters {
        let bar = create_progress_bar(*frequency, 0.15, 30);
        println!(
            "   {}  [{}] {:.4}",
            letter.to_ascii_uppercase(),
            bar.green(),
            frequency
        );
    }

    println!(
        "\n   Score:       {}",
        format!("{:.4}", result.score).bright_yellow()
    );
    println!("   Rank:        {} of {}", result.rank, result.total_words);
    if !result.in_dictionary {
        println!("   {}", "Not in the dictionary".yellow());
    }
}
