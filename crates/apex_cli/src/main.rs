//! Championship host CLI
//!
//! Owns the user-facing command loop around apex_core: runs race weekends,
//! closes seasons and prints the resulting tables. All randomness comes from
//! one seeded generator, so a run is reproducible from its seed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use apex_core::{
    advance_season, generate_commentary, ChampionshipState, RaceOutcome, Tone,
};

#[derive(Parser)]
#[command(name = "apex_cli")]
#[command(about = "Run a deterministic racing championship simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one or more complete seasons
    Simulate {
        /// Number of seasons to run
        #[arg(long, default_value_t = 1)]
        seasons: u32,

        /// RNG seed; omit for a random championship
        #[arg(long)]
        seed: Option<u64>,

        /// First championship year
        #[arg(long, default_value_t = 2025)]
        year: u32,

        /// Print every race classification instead of winners only
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Simulate {
            seasons,
            seed,
            year,
            verbose,
        } => simulate(seasons, seed, year, verbose),
    }
}

fn simulate(seasons: u32, seed: Option<u64>, first_year: u32, verbose: bool) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    println!("Championship seed: {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = ChampionshipState::new(first_year, &mut rng)?;

    for _ in 0..seasons {
        println!("\n=== Season {} ===", state.year);
        print_transition_reports(&state);

        let interview_round = state.circuits.len() / 2;
        while !state.season_complete() {
            let round = state.race_index + 1;
            let outcome = state.run_next_race(&mut rng)?;
            print_race(round, &outcome, verbose);

            if state.race_index == interview_round {
                print_interviews(&state, &mut rng);
            }
        }

        print_standings(&state);
        let report = advance_season(&mut state, &mut rng)?;
        println!(
            "\nChampion {}: {} ({}) with {} points",
            report.closed_year,
            report.hall_of_fame_entry.champion,
            report.hall_of_fame_entry.team,
            report.hall_of_fame_entry.points
        );
    }

    print_all_time(&state);
    Ok(())
}

fn print_transition_reports(state: &ChampionshipState) {
    if !state.transfer_log.is_empty() {
        println!("-- Transfer and retirement news --");
        for news in &state.transfer_log {
            println!("  {news}");
        }
    }
    if !state.development_log.is_empty() {
        println!("-- Pre-season development --");
        for change in &state.development_log {
            println!(
                "  {:<10} {:<8} {:<28} power {:.1}",
                change.driver,
                change.category.to_string(),
                change.summary,
                change.new_power
            );
        }
    }
}

fn print_race(round: usize, outcome: &RaceOutcome, verbose: bool) {
    let weather = if outcome.rainy { "rain" } else { "dry" };
    let winner = outcome.winner.as_deref().unwrap_or("nobody (all retired)");
    println!(
        "R{round:02} {:<14} [{weather}] pole {:<10} winner {winner}",
        outcome.circuit, outcome.pole_sitter
    );
    if verbose {
        for row in &outcome.classification {
            let rank = row
                .rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "    {:>2} {:<10} {:<8} {:>2} pts  {:?}",
                rank, row.driver, row.team, row.points, row.status
            );
        }
    }
}

fn print_interviews(state: &ChampionshipState, rng: &mut ChaCha8Rng) {
    println!("-- Mid-season interviews --");
    for comment in generate_commentary(&state.drivers, &state.power_rank_map, rng) {
        let mark = match comment.tone {
            Tone::Positive => "+",
            Tone::Negative => "-",
            Tone::Neutral => "=",
        };
        println!("  [{mark}] {}: {}", comment.driver, comment.message);
    }
}

fn print_standings(state: &ChampionshipState) {
    println!("\n-- Drivers' championship --");
    for (i, d) in state.standings().iter().enumerate() {
        println!(
            "  {:>2}. {:<10} {:<8} {:>3} pts  W{} P{} Pod{} DNF{}",
            i + 1,
            d.name,
            d.team,
            d.season.points,
            d.season.wins,
            d.season.poles,
            d.season.podiums,
            d.season.dnfs
        );
    }
    println!("-- Constructors' championship --");
    for (i, t) in state.team_standings().iter().enumerate() {
        println!(
            "  {:>2}. {:<8} {:>3} pts ({})",
            i + 1,
            t.name,
            t.season_points,
            t.drivers.join(", ")
        );
    }
}

fn print_all_time(state: &ChampionshipState) {
    println!("\n=== Hall of fame ===");
    for entry in &state.hall_of_fame {
        println!(
            "  {}: {} ({}) {} pts",
            entry.year, entry.champion, entry.team, entry.points
        );
    }

    println!("=== All-time wins ===");
    for row in state.career_top(5, |d| d.career.wins) {
        println!("  {:>2}. {:<10} {}", row.rank, row.driver, row.value);
    }
    println!("=== All-time titles ===");
    for row in state.career_top(5, |d| d.career.titles) {
        println!("  {:>2}. {:<10} {}", row.rank, row.driver, row.value);
    }

    println!("=== Historic circuit kings ===");
    for board in state.historic_kings() {
        if board.leaders.is_empty() {
            println!("  {:<14} ({}) - no king yet", board.circuit, board.title);
        } else {
            println!(
                "  {:<14} ({}) - {} with {} wins",
                board.circuit,
                board.title,
                board.leaders.join(", "),
                board.wins
            );
        }
    }
}
