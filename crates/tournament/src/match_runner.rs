//! Match runner for playing games between engines

use mancala_core::{evaluate, random_move_with, Engine, Game, GameResult, Player, SearchLimits};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to swap sides each game
    pub alternate_sides: bool,
    /// Random plies played before the engines take over
    pub opening_plies: u32,
    /// Seed for the opening plies (None = fresh entropy)
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            alternate_sides: true,
            opening_plies: 0,
            seed: None,
        }
    }
}

impl MatchConfig {
    fn search_limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth)
    }
}

/// Result of a single game from one engine's point of view
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

/// One finished game, seen from Player A unless flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    /// Own store minus the opponent's store when the game stopped
    pub margin: i32,
    pub plies: usize,
}

impl GameSummary {
    /// The same game seen from the other side.
    pub fn flip(self) -> Self {
        let outcome = match self.outcome {
            GameOutcome::Win => GameOutcome::Loss,
            GameOutcome::Loss => GameOutcome::Win,
            GameOutcome::Draw => GameOutcome::Draw,
        };
        Self {
            outcome,
            margin: -self.margin,
            plies: self.plies,
        }
    }
}

/// Tally of a match from engine1's point of view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Sum of the per-game store margins
    pub store_margin: i64,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameSummary) {
        match game.outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.store_margin += i64::from(game.margin);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// 1 per win, 0.5 per draw, divided by games played
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }

    /// Average stores lead per game
    pub fn average_margin(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            n => self.store_margin as f64 / n as f64,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();
        let base_seed = self.config.seed.unwrap_or_else(rand::random);

        for game_num in 0..self.config.num_games {
            let engine1_is_a = !self.config.alternate_sides || game_num % 2 == 0;

            // Both games of a side-swapped pair share the same opening.
            let pair = if self.config.alternate_sides {
                game_num / 2
            } else {
                game_num
            };
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(pair as u64));

            let summary = if engine1_is_a {
                self.play_game(engine1, engine2, &mut rng)
            } else {
                self.play_game(engine2, engine1, &mut rng).flip()
            };
            result.record(summary);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1_side = if engine1_is_a { "A" } else { "B" },
                outcome = ?summary.outcome,
                margin = summary.margin,
                plies = summary.plies,
                "game finished"
            );
        }

        result
    }

    /// Play a single game, returns the summary from Player A's perspective
    pub fn play_game(
        &self,
        engine_a: &mut dyn Engine,
        engine_b: &mut dyn Engine,
        rng: &mut StdRng,
    ) -> GameSummary {
        let mut game = Game::new();
        engine_a.new_game();
        engine_b.new_game();

        for _ in 0..self.config.opening_plies {
            if game.is_over() {
                break;
            }
            let played = random_move_with(game.board(), game.to_move(), rng)
                .and_then(|pit| game.play(pit).map(|_| ()));
            if let Err(e) = played {
                warn!(error = %e, "opening ply failed");
                break;
            }
        }

        for _ in 0..self.config.max_moves {
            if game.is_over() {
                break;
            }

            let player = game.to_move();
            let engine: &mut dyn Engine = match player {
                Player::A => &mut *engine_a,
                Player::B => &mut *engine_b,
            };
            let result = engine.search(game.board(), player, self.config.search_limits());

            let Some(pit) = result.best_move else {
                warn!(%player, board = %game.board(), "engine returned no move");
                break;
            };
            if let Err(e) = game.play(pit) {
                // An illegal move forfeits the game.
                warn!(error = %e, engine = engine.name(), "illegal move, game forfeited");
                let outcome = match player {
                    Player::A => GameOutcome::Loss,
                    Player::B => GameOutcome::Win,
                };
                return summarize(&game, outcome);
            }
        }

        debug!(board = %game.board(), plies = game.history().len(), "game over");

        let outcome = match game.result() {
            Some(GameResult::PlayerAWins) => GameOutcome::Win,
            Some(GameResult::PlayerBWins) => GameOutcome::Loss,
            Some(GameResult::Tie) => GameOutcome::Draw,
            None => {
                warn!(max_moves = self.config.max_moves, "move limit reached, scoring as draw");
                GameOutcome::Draw
            }
        };
        summarize(&game, outcome)
    }
}

fn summarize(game: &Game, outcome: GameOutcome) -> GameSummary {
    GameSummary {
        outcome,
        margin: evaluate(game.board()),
        plies: game.history().len(),
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
