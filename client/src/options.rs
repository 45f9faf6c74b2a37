use anyhow::{anyhow, Result};
use common::{Config, ConfigLoader};
use engine::{InvalidConfigurationError, Score};
use minimax::{
    Difficulty, Policy, SearchDepth, SearchOptions, DEFAULT_MIXED_RANDOM_PROBABILITY,
};
use serde::{Deserialize, Serialize};

use super::cli::{ConnectFourCommand, TicTacToeCommand};
use super::game::FirstMover;

pub const TIC_TAC_TOE_SCOPE: &str = "tic_tac_toe";
pub const CONNECT_FOUR_SCOPE: &str = "connect_four";

const DEFAULT_MAX_DEPTH: usize = 3;
const DEFAULT_DIFFICULTY: u8 = 3;

/// Settings shared by both games.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayOptions {
    pub human_first: bool,
    pub computer_first: bool,
    pub seed: Option<u64>,
    /// `None` when neither the command line nor the config set a depth.
    pub max_depth: Option<usize>,
    pub tie_tolerance: Option<Score>,
    pub transposition_table: bool,
    pub parallel: bool,
}

impl Config for PlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            human_first: config.get_bool("human_first")?.unwrap_or(false),
            computer_first: config.get_bool("computer_first")?.unwrap_or(false),
            seed: config.get_u64("seed")?,
            max_depth: config.get_usize("max_depth")?,
            tie_tolerance: config
                .get_usize("tie_tolerance")?
                .map(Score::try_from)
                .transpose()?,
            transposition_table: config.get_bool("transposition_table")?.unwrap_or(true),
            parallel: config.get_bool("parallel")?.unwrap_or(false),
        })
    }
}

impl PlayOptions {
    /// Flags given on the command line win over the config file.
    fn override_with(
        &mut self,
        human_first: bool,
        computer_first: bool,
        max_depth: Option<usize>,
        seed: Option<u64>,
    ) {
        if human_first {
            self.human_first = true;
            self.computer_first = false;
        }

        if computer_first {
            self.computer_first = true;
            self.human_first = false;
        }

        if max_depth.is_some() {
            self.max_depth = max_depth;
        }

        if seed.is_some() {
            self.seed = seed;
        }
    }

    pub fn first_mover(&self) -> Result<FirstMover, InvalidConfigurationError> {
        match (self.human_first, self.computer_first) {
            (true, true) => Err(InvalidConfigurationError::ConflictingFirstMover),
            (true, false) => Ok(FirstMover::Human),
            (false, true) => Ok(FirstMover::Computer),
            (false, false) => Ok(FirstMover::CoinToss),
        }
    }

    fn search_options(&self) -> SearchOptions {
        SearchOptions::new(true, self.transposition_table, self.tie_tolerance, self.parallel)
    }

    fn limited_depth(&self) -> Result<SearchDepth, InvalidConfigurationError> {
        match self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH) {
            0 => Err(InvalidConfigurationError::ZeroDepth),
            depth => Ok(SearchDepth::Limited(depth)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TicTacToeOptions {
    pub play_options: PlayOptions,
    pub difficulty: u8,
    pub mixed_random_probability: f32,
    pub random_ties: bool,
}

impl Config for TicTacToeOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let difficulty = match config.get_usize("difficulty")? {
            Some(level) => u8::try_from(level)
                .map_err(|_| anyhow!("unsupported difficulty level {}", level))?,
            None => DEFAULT_DIFFICULTY,
        };

        Ok(Self {
            play_options: PlayOptions::load(config)?,
            difficulty,
            mixed_random_probability: config
                .get_f32("mixed_random_probability")?
                .unwrap_or(DEFAULT_MIXED_RANDOM_PROBABILITY),
            random_ties: config.get_bool("random_ties")?.unwrap_or(false),
        })
    }
}

impl TicTacToeOptions {
    pub fn with_args(mut self, args: &TicTacToeCommand) -> Self {
        self.play_options
            .override_with(args.human_first, false, args.max_depth, args.seed);

        if let Some(difficulty) = args.difficulty {
            self.difficulty = difficulty;
        }

        self
    }

    /// Without an explicit `max_depth` the optimal difficulty solves the game.
    pub fn policy(&self) -> Result<Policy, InvalidConfigurationError> {
        let difficulty = Difficulty::try_from(self.difficulty)?;
        let limited_depth = self.play_options.limited_depth()?;

        let depth = match difficulty {
            Difficulty::Optimal if self.play_options.max_depth.is_none() => {
                SearchDepth::Exhaustive
            }
            _ => limited_depth,
        };

        Ok(Policy::new(difficulty, depth)?
            .with_mixed_random_probability(self.mixed_random_probability)?
            .with_random_ties(self.random_ties)
            .with_search_options(self.play_options.search_options()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConnectFourOptions {
    pub play_options: PlayOptions,
    pub random_ties: bool,
    pub random_opening: bool,
}

impl Config for ConnectFourOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            play_options: PlayOptions::load(config)?,
            random_ties: config.get_bool("random_ties")?.unwrap_or(true),
            random_opening: config.get_bool("random_opening")?.unwrap_or(true),
        })
    }
}

impl ConnectFourOptions {
    pub fn with_args(mut self, args: &ConnectFourCommand) -> Self {
        self.play_options.override_with(
            args.human_first,
            args.computer_first,
            args.max_depth,
            args.seed,
        );
        self
    }

    pub fn policy(&self) -> Result<Policy, InvalidConfigurationError> {
        let depth = self.play_options.limited_depth()?;

        Ok(Policy::new(Difficulty::Optimal, depth)?
            .with_random_ties(self.random_ties)
            .with_random_opening(self.random_opening)
            .with_search_options(self.play_options.search_options()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = "{}";

    fn load<T: Config>(contents: &str, scope: &str) -> T {
        ConfigLoader::from_hocon_str(contents, scope.to_string())
            .unwrap()
            .load()
            .unwrap()
    }

    #[test]
    fn test_tic_tac_toe_defaults() {
        let options: TicTacToeOptions = load(EMPTY, TIC_TAC_TOE_SCOPE);
        assert_eq!(options.difficulty, 3);
        assert_eq!(options.play_options.max_depth, None);
        assert!(!options.play_options.human_first);
        assert!(options.play_options.transposition_table);
        assert_eq!(options.play_options.first_mover().unwrap(), FirstMover::CoinToss);
        assert!(!options.random_ties);
        assert_eq!(options.mixed_random_probability, 0.5);

        let policy = options.policy().unwrap();
        assert_eq!(policy.difficulty(), Difficulty::Optimal);
        assert_eq!(policy.depth(), SearchDepth::Exhaustive);
    }

    #[test]
    fn test_connect_four_defaults() {
        let options: ConnectFourOptions = load(EMPTY, CONNECT_FOUR_SCOPE);
        assert!(options.random_ties);
        assert!(options.random_opening);

        let policy = options.policy().unwrap();
        assert_eq!(policy.difficulty(), Difficulty::Optimal);
        assert_eq!(policy.depth(), SearchDepth::Limited(3));
        assert!(policy.random_ties());
        assert!(policy.random_opening());
    }

    #[test]
    fn test_config_file_values_are_scoped() {
        let conf = r#"
            seed = 5
            tic_tac_toe { difficulty = 2, max_depth = 4, mixed_random_probability = 0.25 }
            connect_four { max_depth = 6, random_ties = false, parallel = true }
        "#;

        let tic_tac_toe: TicTacToeOptions = load(conf, TIC_TAC_TOE_SCOPE);
        assert_eq!(tic_tac_toe.difficulty, 2);
        assert_eq!(tic_tac_toe.play_options.max_depth, Some(4));
        assert_eq!(tic_tac_toe.play_options.seed, Some(5));
        assert_eq!(tic_tac_toe.mixed_random_probability, 0.25);

        let connect_four: ConnectFourOptions = load(conf, CONNECT_FOUR_SCOPE);
        assert_eq!(connect_four.play_options.max_depth, Some(6));
        assert_eq!(connect_four.play_options.seed, Some(5));
        assert!(connect_four.play_options.parallel);
        assert!(!connect_four.random_ties);
    }

    #[test]
    fn test_args_override_config() {
        let conf = "tic_tac_toe { difficulty = 1, max_depth = 4, seed = 3 }";
        let args = TicTacToeCommand {
            difficulty: Some(2),
            human_first: true,
            max_depth: None,
            seed: Some(8),
            config: None,
        };

        let options = load::<TicTacToeOptions>(conf, TIC_TAC_TOE_SCOPE).with_args(&args);
        assert_eq!(options.difficulty, 2);
        assert!(options.play_options.human_first);
        assert_eq!(options.play_options.max_depth, Some(4));
        assert_eq!(options.play_options.seed, Some(8));
    }

    #[test]
    fn test_optimal_respects_explicit_max_depth() {
        let args = TicTacToeCommand {
            difficulty: Some(3),
            max_depth: Some(2),
            ..Default::default()
        };
        let options = load::<TicTacToeOptions>(EMPTY, TIC_TAC_TOE_SCOPE).with_args(&args);
        let policy = options.policy().unwrap();
        assert_eq!(policy.difficulty(), Difficulty::Optimal);
        assert_eq!(policy.depth(), SearchDepth::Limited(2));

        let options: TicTacToeOptions = load("tic_tac_toe { max_depth = 4 }", TIC_TAC_TOE_SCOPE);
        assert_eq!(options.policy().unwrap().depth(), SearchDepth::Limited(4));
    }

    #[test]
    fn test_first_mover_from_args_and_config() {
        let args = ConnectFourCommand {
            computer_first: true,
            ..Default::default()
        };
        let options = load::<ConnectFourOptions>("human_first = true", CONNECT_FOUR_SCOPE).with_args(&args);
        assert_eq!(options.play_options.first_mover().unwrap(), FirstMover::Computer);

        let options: ConnectFourOptions = load("human_first = true", CONNECT_FOUR_SCOPE);
        assert_eq!(options.play_options.first_mover().unwrap(), FirstMover::Human);

        let options: ConnectFourOptions =
            load("human_first = true\ncomputer_first = true", CONNECT_FOUR_SCOPE);
        assert_eq!(
            options.play_options.first_mover().unwrap_err(),
            InvalidConfigurationError::ConflictingFirstMover
        );
    }

    #[test]
    fn test_transposition_table_can_be_disabled() {
        let options: ConnectFourOptions = load("connect_four { transposition_table = false }", CONNECT_FOUR_SCOPE);
        let policy = options.policy().unwrap();
        assert!(!policy.search_options().transposition_table);
    }

    #[test]
    fn test_mixed_uses_max_depth() {
        let options: TicTacToeOptions = load("tic_tac_toe { difficulty = 2, max_depth = 5 }", TIC_TAC_TOE_SCOPE);
        assert_eq!(options.policy().unwrap().depth(), SearchDepth::Limited(5));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let args = TicTacToeCommand {
            difficulty: Some(4),
            ..Default::default()
        };
        let options = load::<TicTacToeOptions>(EMPTY, TIC_TAC_TOE_SCOPE).with_args(&args);
        assert_eq!(
            options.policy().unwrap_err(),
            InvalidConfigurationError::UnsupportedDifficulty(4)
        );

        let args = ConnectFourCommand {
            max_depth: Some(0),
            ..Default::default()
        };
        let options = load::<ConnectFourOptions>(EMPTY, CONNECT_FOUR_SCOPE).with_args(&args);
        assert_eq!(options.policy().unwrap_err(), InvalidConfigurationError::ZeroDepth);

        let options: TicTacToeOptions = load("mixed_random_probability = 2.0", TIC_TAC_TOE_SCOPE);
        assert_eq!(
            options.policy().unwrap_err(),
            InvalidConfigurationError::InvalidProbability(2.0)
        );
    }

    #[test]
    fn test_wrongly_typed_config_is_error() {
        let res = ConfigLoader::from_hocon_str("connect_four { max_depth = deep }", CONNECT_FOUR_SCOPE.to_string())
            .unwrap()
            .load::<ConnectFourOptions>();
        assert!(res.is_err());
    }
}
