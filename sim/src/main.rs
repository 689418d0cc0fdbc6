use anyhow::Context;
use clap::Parser;
use hotsweep_core::{Coord, GameStatus, Level, Mode, Player};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod play;
mod policy;
mod settings;

use play::GameReport;
use settings::Settings;

/// Plays batches of hotsweep games with a scripted player and reports how they went
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML settings file, command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board size preset: easy, medium, hard or expert
    #[arg(short, long)]
    preset: Option<Level>,

    /// Board side length, overrides the preset
    #[arg(short, long)]
    level: Option<Coord>,

    /// single-player or multi-player
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Number of games to play
    #[arg(short = 'n', long)]
    games: Option<u32>,

    /// Force a base seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only guess, never flag or open proven cells
    #[arg(long)]
    no_deduce: bool,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: u32,
    won: u32,
    lost: u32,
    first_player_leads: u32,
    second_player_leads: u32,
    ties: u32,
    total_moves: u64,
}

impl Summary {
    fn record(&mut self, report: &GameReport) {
        self.games += 1;
        self.total_moves += u64::from(report.moves);
        match report.status {
            GameStatus::Won => self.won += 1,
            GameStatus::Lost => self.lost += 1,
            GameStatus::Idle | GameStatus::Playing => {
                log::warn!("seed {} did not finish", report.seed);
            }
        }
        if report.first_player_mines + report.second_player_mines > 0 {
            match report.leader {
                Some(Player::First) => self.first_player_leads += 1,
                Some(Player::Second) => self.second_player_leads += 1,
                None => self.ties += 1,
            }
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    settings: &'a Settings,
    summary: &'a Summary,
    reports: &'a [GameReport],
}

fn random_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(args.verbose.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = settings.apply(&args)?;
    let base_seed = settings.seed.unwrap_or_else(random_seed);
    log::debug!("settings: {:?}, base seed: {}", settings, base_seed);

    let mut summary = Summary::default();
    let mut reports = Vec::with_capacity(settings.games as usize);
    for index in 0..settings.games {
        let seed = base_seed.wrapping_add(u64::from(index));
        let report = play::play(settings.game, seed, settings.deduce)
            .with_context(|| format!("playing game {index}"))?;
        summary.record(&report);
        reports.push(report);
    }

    if args.json {
        let output = Output {
            settings: &settings,
            summary: &summary,
            reports: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let level = settings.game.level;
    println!(
        "{}: {} games on a {}x{} board ({} mines)",
        settings.game.mode.label(),
        summary.games,
        level,
        level,
        settings.game.mine_count()
    );
    match settings.game.mode {
        Mode::SinglePlayer => {
            println!("won: {}, lost: {}", summary.won, summary.lost);
        }
        Mode::MultiPlayer => {
            println!(
                "first player ahead: {}, second player ahead: {}, ties: {}",
                summary.first_player_leads, summary.second_player_leads, summary.ties
            );
        }
    }
    if summary.games > 0 {
        println!(
            "average moves: {:.1}",
            summary.total_moves as f64 / f64::from(summary.games)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: GameStatus, first: u16, second: u16) -> GameReport {
        let leader = match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Player::First),
            std::cmp::Ordering::Less => Some(Player::Second),
            std::cmp::Ordering::Equal => None,
        };
        GameReport {
            seed: 0,
            status,
            moves: 4,
            flags: 0,
            first_player_mines: first,
            second_player_mines: second,
            leader,
            elapsed_ms: 0,
        }
    }

    #[test]
    fn summary_counts_outcomes_and_leaders() {
        let mut summary = Summary::default();
        summary.record(&report(GameStatus::Lost, 0, 0));
        summary.record(&report(GameStatus::Won, 6, 4));
        summary.record(&report(GameStatus::Won, 5, 5));

        assert_eq!(summary.games, 3);
        assert_eq!(summary.won, 2);
        assert_eq!(summary.lost, 1);
        assert_eq!(summary.first_player_leads, 1);
        assert_eq!(summary.ties, 1);
        assert_eq!(summary.total_moves, 12);
    }

    #[test]
    fn args_parse_mode_and_preset() {
        let args = Args::parse_from([
            "hotsweep-sim",
            "-m",
            "multi",
            "-p",
            "hard",
            "-s",
            "9",
            "--json",
        ]);

        assert_eq!(args.mode, Some(Mode::MultiPlayer));
        assert_eq!(args.preset, Some(Level::Hard));
        assert_eq!(args.seed, Some(9));
        assert!(args.json);
    }
}
