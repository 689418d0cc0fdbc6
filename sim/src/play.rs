use anyhow::{Context, bail};
use hotsweep_core::*;
use serde::Serialize;
use web_time::Instant;

use crate::policy::{Move, Policy};

/// Mixed into the board seed so the policy does not replay the generator's draws.
const POLICY_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameReport {
    pub seed: u64,
    pub status: GameStatus,
    pub moves: u32,
    pub flags: CellCount,
    pub first_player_mines: CellCount,
    pub second_player_mines: CellCount,
    pub leader: Option<Player>,
    pub elapsed_ms: u64,
}

pub fn play(config: GameConfig, seed: u64, deduce: bool) -> anyhow::Result<GameReport> {
    let mut game = Game::generate(config, RandomBoardGenerator::new(seed))
        .with_context(|| format!("generating board for seed {seed}"))?;
    let mut policy = Policy::new(seed ^ POLICY_SEED_SALT, deduce);
    let mut clock = GameClock::new();
    let mut moves = 0;

    while !game.settle().is_finished() {
        let Some(next) = policy.next_move(&game) else {
            bail!("no moves left on an unfinished board (seed {seed})");
        };

        let changed = match next {
            Move::Reveal(coords) => {
                let outcome = game.reveal(coords)?;
                log::trace!("reveal {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            Move::Flag(coords) => {
                let outcome = game.flag(coords)?;
                log::trace!("flag {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
        };
        if !changed {
            bail!("{next:?} changed nothing (seed {seed})");
        }
        moves += 1;
        clock.observe(game.status());
    }
    clock.observe(game.status());

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("final board for seed {}:\n{}", seed, render(&game)?);
    }

    let tallies = game.tallies();
    let elapsed = clock.elapsed(Instant::now());
    log::debug!(
        "seed {} ended {:?} after {} moves in {}",
        seed,
        game.status(),
        moves,
        clock.format_elapsed(Instant::now())
    );

    Ok(GameReport {
        seed,
        status: game.status(),
        moves,
        flags: game.flags_count(),
        first_player_mines: tallies.get(Player::First),
        second_player_mines: tallies.get(Player::Second),
        leader: tallies.leader(),
        elapsed_ms: elapsed.as_millis().try_into().unwrap_or(u64::MAX),
    })
}

fn glyph(view: TileView) -> char {
    match view {
        TileView::Hidden => '#',
        TileView::Empty => '.',
        TileView::Number(count) => char::from(b'0' + count),
        TileView::Flag => 'F',
        TileView::Mine { exploded: true } => 'X',
        TileView::Mine { exploded: false } => '*',
        TileView::FlaggedMine => 'f',
        TileView::ClaimedMine(Player::First) => 'A',
        TileView::ClaimedMine(Player::Second) => 'B',
    }
}

/// Plain-text dump of the board as its tile views, one row per line.
pub fn render(game: &Game) -> Result<String> {
    let level = game.level();
    let mut out = String::with_capacity(usize::from(level) * (usize::from(level) + 1));
    for row in 0..level {
        for col in 0..level {
            out.push(glyph(game.view_at((row, col))?));
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_player_game_finds_every_mine() {
        let config = GameConfig::preset(Level::Easy, Mode::MultiPlayer);
        let report = play(config, 3, true).unwrap();

        assert_eq!(report.status, GameStatus::Won);
        assert_eq!(report.first_player_mines + report.second_player_mines, 10);
        assert_eq!(report.flags, 0);
    }

    #[test]
    fn single_player_game_always_ends() {
        let config = GameConfig::preset(Level::Easy, Mode::SinglePlayer);
        for seed in 0..20 {
            let report = play(config, seed, true).unwrap();
            assert!(report.status.is_finished(), "seed {seed}");
            assert_eq!(report.leader, None);
        }
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let config = GameConfig::preset(Level::Medium, Mode::SinglePlayer);
        let first = play(config, 17, true).unwrap();
        let second = play(config, 17, true).unwrap();

        assert_eq!(first.status, second.status);
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.flags, second.flags);
    }

    #[test]
    fn render_shows_the_lost_board() {
        let config = GameConfig::new(3, Mode::SinglePlayer).unwrap();
        let mut game = Game::generate(config, FixedBoardGenerator::new([(0, 0)])).unwrap();
        game.reveal((0, 0)).unwrap();

        assert_eq!(render(&game).unwrap(), "X1.\n11.\n...\n");
    }
}
