use anyhow::Context;
use hotsweep_core::{GameConfig, Level};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Args;

/// Simulation settings, read from an optional TOML file and then overridden from the command line.
///
/// ```toml
/// games = 200
/// seed = 7
///
/// [game]
/// level = 20
/// mode = "multi-player"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub game: GameConfig,
    pub games: u32,
    pub seed: Option<u64>,
    /// Let the single-player policy flag and open cells it can prove, instead of only guessing.
    pub deduce: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            games: 100,
            seed: None,
            deduce: true,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply(mut self, args: &Args) -> anyhow::Result<Self> {
        if let Some(preset) = args.preset {
            self.game.level = preset.size();
        }
        if let Some(level) = args.level {
            self.game.level = level;
        }
        if let Some(mode) = args.mode {
            self.game.mode = mode;
        }
        if let Some(games) = args.games {
            self.games = games;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.no_deduce {
            self.deduce = false;
        }

        self.game = self.game.validate().context("invalid board level")?;
        if let Some(preset) = Level::from_size(self.game.level) {
            log::debug!("Using {} preset", preset.label());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use hotsweep_core::Mode;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn file_values_are_read() {
        let settings = Settings::parse(
            r#"
            games = 3
            seed = 11

            [game]
            level = 20
            mode = "multi-player"
            "#,
        )
        .unwrap();

        assert_eq!(settings.games, 3);
        assert_eq!(settings.seed, Some(11));
        assert_eq!(settings.game, GameConfig::preset(Level::Hard, Mode::MultiPlayer));
        assert!(settings.deduce);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::parse("speed = 3").is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let args = Args::parse_from([
            "hotsweep-sim",
            "--preset",
            "expert",
            "--mode",
            "multi-player",
            "-n",
            "5",
        ]);
        let settings = Settings::default().apply(&args).unwrap();

        assert_eq!(settings.game, GameConfig::preset(Level::Expert, Mode::MultiPlayer));
        assert_eq!(settings.games, 5);

        let args = Args::parse_from(["hotsweep-sim", "--preset", "easy", "--level", "12"]);
        let settings = Settings::default().apply(&args).unwrap();
        assert_eq!(settings.game.level, 12);
    }

    #[test]
    fn zero_level_is_rejected() {
        let args = Args::parse_from(["hotsweep-sim", "--level", "0"]);
        assert!(Settings::default().apply(&args).is_err());
    }
}
