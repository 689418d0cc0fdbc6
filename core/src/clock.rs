use alloc::format;
use alloc::string::String;
use core::time::Duration;
use web_time::Instant;

use crate::GameStatus;

/// Play-time stopwatch, owned alongside a single [`Game`](crate::Game) and driven by its status.
///
/// Starts on the first `Playing` status it observes and stops on `Won`/`Lost`. A new game gets a new clock, so
/// nothing keeps ticking across restarts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameClock {
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    pub fn observe(&mut self, status: GameStatus) {
        self.observe_at(status, Instant::now());
    }

    pub fn observe_at(&mut self, status: GameStatus, now: Instant) {
        match status {
            GameStatus::Idle => {}
            GameStatus::Playing => {
                if self.started_at.is_none() {
                    log::debug!("clock started");
                    self.started_at = Some(now);
                }
            }
            GameStatus::Won | GameStatus::Lost => {
                if self.ended_at.is_none() {
                    log::debug!("clock stopped");
                    // a game can end on its very first move
                    self.started_at.get_or_insert(now);
                    self.ended_at = Some(now);
                }
            }
        }
    }

    /// Time spent playing, zero before the game started.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .ended_at
                .unwrap_or(now)
                .saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }

    /// Elapsed time as `m:ss`.
    pub fn format_elapsed(&self, now: Instant) -> String {
        let secs = self.elapsed(now).as_secs();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
