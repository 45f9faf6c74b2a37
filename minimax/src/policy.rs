use std::fmt::{self, Display, Formatter};

use engine::{Evaluator, GameRules, InvalidConfigurationError};
use log::debug;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use super::{Minimax, SearchOptions};

pub const DEFAULT_MIXED_RANDOM_PROBABILITY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Random,
    /// A coin toss between a random move and the best move.
    Mixed,
    Optimal,
}

impl TryFrom<u8> for Difficulty {
    type Error = InvalidConfigurationError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Random),
            2 => Ok(Difficulty::Mixed),
            3 => Ok(Difficulty::Optimal),
            _ => Err(InvalidConfigurationError::UnsupportedDifficulty(level)),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Random => "random",
            Difficulty::Mixed => "mixed",
            Difficulty::Optimal => "optimal",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchDepth {
    Limited(usize),
    /// As deep as the longest possible game.
    Exhaustive,
}

/// How the computer picks its moves. Built and validated once before a game.
#[derive(Clone, Debug)]
pub struct Policy {
    difficulty: Difficulty,
    depth: SearchDepth,
    mixed_random_probability: f32,
    random_ties: bool,
    random_opening: bool,
    search_options: SearchOptions,
}

impl Policy {
    pub fn new(
        difficulty: Difficulty,
        depth: SearchDepth,
    ) -> Result<Self, InvalidConfigurationError> {
        if depth == SearchDepth::Limited(0) {
            return Err(InvalidConfigurationError::ZeroDepth);
        }

        Ok(Self {
            difficulty,
            depth,
            mixed_random_probability: DEFAULT_MIXED_RANDOM_PROBABILITY,
            random_ties: false,
            random_opening: false,
            search_options: SearchOptions::default(),
        })
    }

    pub fn with_mixed_random_probability(
        mut self,
        probability: f32,
    ) -> Result<Self, InvalidConfigurationError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(InvalidConfigurationError::InvalidProbability(probability));
        }

        self.mixed_random_probability = probability;
        Ok(self)
    }

    /// Picks uniformly among the moves the search scores as best, within the
    /// search options' tie tolerance, instead of the first one enumerated.
    pub fn with_random_ties(mut self, random_ties: bool) -> Self {
        self.random_ties = random_ties;
        self
    }

    /// Plays a uniformly random move on an empty board.
    pub fn with_random_opening(mut self, random_opening: bool) -> Self {
        self.random_opening = random_opening;
        self
    }

    pub fn with_search_options(mut self, search_options: SearchOptions) -> Self {
        self.search_options = search_options;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    pub fn mixed_random_probability(&self) -> f32 {
        self.mixed_random_probability
    }

    pub fn random_ties(&self) -> bool {
        self.random_ties
    }

    pub fn random_opening(&self) -> bool {
        self.random_opening
    }

    pub fn search_options(&self) -> &SearchOptions {
        &self.search_options
    }

    fn resolve_depth<R: GameRules>(&self, rules: &R) -> usize {
        match self.depth {
            SearchDepth::Limited(depth) => depth,
            SearchDepth::Exhaustive => rules.max_moves(),
        }
    }

    fn resolve_search_options(&self) -> SearchOptions {
        let mut options = self.search_options.clone();
        if self.random_ties && options.tie_tolerance.is_none() {
            options.tie_tolerance = Some(0);
        }
        options
    }
}

/// Picks the computer's move for the player to move. `None` once the game is over.
///
/// The state is searched in place and left as it was.
pub fn choose_computer_move<R, E, G>(
    rules: &R,
    evaluator: &E,
    game_state: &mut R::State,
    policy: &Policy,
    rng: &mut G,
) -> Option<R::Action>
where
    R: GameRules + Sync,
    R::State: Send + Sync,
    R::Action: Send + Sync,
    E: Evaluator<State = R::State> + Sync,
    G: Rng,
{
    if rules.terminal_state(game_state).is_over() {
        return None;
    }

    if policy.random_opening && rules.move_number(game_state) == 1 {
        debug!("Playing a random opening move");
        return random_move(rules, game_state, rng);
    }

    match policy.difficulty {
        Difficulty::Random => {
            debug!("Playing a random move");
            random_move(rules, game_state, rng)
        }
        Difficulty::Mixed => {
            if rng.gen_bool(policy.mixed_random_probability as f64) {
                debug!("Mixed policy chose a random move");
                random_move(rules, game_state, rng)
            } else {
                debug!("Mixed policy chose a searched move");
                searched_move(rules, evaluator, game_state, policy, rng)
            }
        }
        Difficulty::Optimal => searched_move(rules, evaluator, game_state, policy, rng),
    }
}

fn random_move<R: GameRules, G: Rng>(
    rules: &R,
    game_state: &R::State,
    rng: &mut G,
) -> Option<R::Action> {
    rules.legal_moves(game_state).choose(rng)
}

fn searched_move<R, E, G>(
    rules: &R,
    evaluator: &E,
    game_state: &mut R::State,
    policy: &Policy,
    rng: &mut G,
) -> Option<R::Action>
where
    R: GameRules + Sync,
    R::State: Send + Sync,
    R::Action: Send + Sync,
    E: Evaluator<State = R::State> + Sync,
    G: Rng,
{
    let depth = policy.resolve_depth(rules);
    let maximizing = rules.player_to_move(game_state);
    let minimax = Minimax::new(rules, evaluator, policy.resolve_search_options());
    let result = minimax.search(game_state, depth, maximizing);

    if policy.random_ties && result.candidates.len() > 1 {
        debug!(
            "Choosing among {} moves scored {}",
            result.candidates.len(),
            result.score
        );
        return result.candidates.choose(rng).cloned();
    }

    result.best_move
}
