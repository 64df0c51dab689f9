//! Session state machine: IDLE -> PLAYING -> WON -> IDLE.
//!
//! Every transition into PLAYING bumps a generation counter. Timer ticks and
//! hint replies carry the generation they were issued for, and anything
//! tagged with an older generation is ignored.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

use super::{
    feedback::{Feedback, ValidationError, evaluate, parse_guess},
    record::Candidate,
    target::{MAX_GUESS, MIN_GUESS, new_target},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Playing,
    Won,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::Won => "won",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("player name must not be blank")]
    BlankPlayerName,

    #[error("cannot {action} while {from}")]
    InvalidTransition { from: Status, action: &'static str },

    #[error("target {0} is outside 1..=100")]
    InvalidTarget(u8),
}

/// One submitted guess. Never modified after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEntry {
    pub value: u8,
    pub feedback: Feedback,
    pub submitted_at: DateTime<Utc>,
}

/// Context handed to the hint provider after a miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintRequest {
    pub guess: u8,
    pub target: u8,
    pub attempt: u32,
    pub player_name: String,
}

impl HintRequest {
    pub fn is_high(&self) -> bool {
        self.guess > self.target
    }
}

/// Result of a valid guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Miss {
        feedback: Feedback,
        hint: HintRequest,
    },
    Won(Candidate),
}

#[derive(Debug)]
pub struct Game {
    status: Status,
    player_name: String,
    target: u8,
    guesses: Vec<GuessEntry>,
    elapsed_seconds: u64,
    generation: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            status: Status::Idle,
            player_name: String::new(),
            target: 0,
            guesses: Vec::new(),
            elapsed_seconds: 0,
            generation: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// The secret number, only while a session exists.
    pub fn target(&self) -> Option<u8> {
        match self.status {
            Status::Idle => None,
            Status::Playing | Status::Won => Some(self.target),
        }
    }

    /// Guess history, most recent first.
    pub fn guesses(&self) -> &[GuessEntry] {
        &self.guesses
    }

    pub fn attempts(&self) -> u32 {
        self.guesses.len() as u32
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a session with a freshly drawn target. Returns the new generation.
    pub fn start<R: Rng + ?Sized>(&mut self, player_name: &str, rng: &mut R) -> Result<u64, GameError> {
        self.check_can_start(player_name)?;
        let target = new_target(rng);
        self.start_with_target(player_name, target)
    }

    /// Start a session against a known target.
    pub fn start_with_target(&mut self, player_name: &str, target: u8) -> Result<u64, GameError> {
        self.check_can_start(player_name)?;
        if !(MIN_GUESS..=MAX_GUESS).contains(&target) {
            return Err(GameError::InvalidTarget(target));
        }

        self.generation += 1;
        self.status = Status::Playing;
        self.player_name = player_name.trim().to_string();
        self.target = target;
        self.guesses.clear();
        self.elapsed_seconds = 0;

        Ok(self.generation)
    }

    fn check_can_start(&self, player_name: &str) -> Result<(), GameError> {
        if self.status != Status::Idle {
            return Err(GameError::InvalidTransition {
                from: self.status,
                action: "start a game",
            });
        }
        if player_name.trim().is_empty() {
            return Err(GameError::BlankPlayerName);
        }
        Ok(())
    }

    /// Validate and record a guess.
    ///
    /// Rejected input leaves the history and attempt count untouched. A
    /// correct guess moves the session to WON and freezes the clock.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        if self.status != Status::Playing {
            return Err(GameError::InvalidTransition {
                from: self.status,
                action: "submit a guess",
            });
        }

        let value = parse_guess(input)?;
        let feedback = evaluate(value, self.target);

        self.guesses.insert(
            0,
            GuessEntry {
                value,
                feedback,
                submitted_at: Utc::now(),
            },
        );

        if feedback == Feedback::Correct {
            self.status = Status::Won;
            return Ok(GuessOutcome::Won(Candidate {
                attempts: self.attempts(),
                time_seconds: self.elapsed_seconds,
            }));
        }

        Ok(GuessOutcome::Miss {
            feedback,
            hint: HintRequest {
                guess: value,
                target: self.target,
                attempt: self.attempts(),
                player_name: self.player_name.clone(),
            },
        })
    }

    /// Advance the clock by one second. Returns false for stale or
    /// out-of-session ticks, which change nothing.
    pub fn tick(&mut self, generation: u64) -> bool {
        if self.status != Status::Playing || generation != self.generation {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Discard a finished session and return to IDLE.
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.status != Status::Won {
            return Err(GameError::InvalidTransition {
                from: self.status,
                action: "reset",
            });
        }

        self.status = Status::Idle;
        self.player_name.clear();
        self.target = 0;
        self.guesses.clear();
        self.elapsed_seconds = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn playing(target: u8) -> Game {
        let mut game = Game::new();
        game.start_with_target("Arthur", target).unwrap();
        game
    }

    #[test]
    fn test_new_game_is_idle() {
        let game = Game::new();
        assert_eq!(game.status(), Status::Idle);
        assert_eq!(game.player_name(), "");
        assert_eq!(game.target(), None);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn test_start_rejects_blank_name() {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(game.start("", &mut rng), Err(GameError::BlankPlayerName));
        assert_eq!(game.start("   \t", &mut rng), Err(GameError::BlankPlayerName));
        assert_eq!(game.status(), Status::Idle);
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn test_start_draws_target_in_range() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..2 {
            let mut game = Game::new();
            game.start("Lancelot", &mut rng).unwrap();
            let target = game.target().unwrap();
            assert!((MIN_GUESS..=MAX_GUESS).contains(&target));
        }
    }

    #[test]
    fn test_start_trims_player_name() {
        let game = {
            let mut game = Game::new();
            game.start_with_target("  Percival ", 10).unwrap();
            game
        };
        assert_eq!(game.player_name(), "Percival");
    }

    #[test]
    fn test_start_while_playing_is_rejected() {
        let mut game = playing(30);
        game.submit_guess("10").unwrap();

        let err = game.start_with_target("Gawain", 70).unwrap_err();
        assert!(matches!(err, GameError::InvalidTransition { from: Status::Playing, .. }));
        assert_eq!(game.target(), Some(30));
        assert_eq!(game.player_name(), "Arthur");
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_start_rejects_out_of_range_target() {
        let mut game = Game::new();
        assert_eq!(game.start_with_target("Arthur", 0), Err(GameError::InvalidTarget(0)));
        assert_eq!(game.start_with_target("Arthur", 101), Err(GameError::InvalidTarget(101)));
        assert_eq!(game.status(), Status::Idle);
    }

    #[test]
    fn test_guess_while_idle_is_rejected() {
        let mut game = Game::new();
        let err = game.submit_guess("50").unwrap_err();
        assert!(matches!(err, GameError::InvalidTransition { from: Status::Idle, .. }));
    }

    #[test]
    fn test_invalid_guess_leaves_state_untouched() {
        let mut game = playing(55);
        game.submit_guess("40").unwrap();

        for bad in ["", "abc", "0", "101", "5.5"] {
            let err = game.submit_guess(bad).unwrap_err();
            assert!(matches!(err, GameError::Validation(_)), "input {bad:?}");
        }

        assert_eq!(game.attempts(), 1);
        assert_eq!(game.guesses()[0].value, 40);
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut game = playing(55);
        game.submit_guess("40").unwrap();
        game.submit_guess("70").unwrap();
        game.submit_guess("55").unwrap();

        let history: Vec<(u8, Feedback)> =
            game.guesses().iter().map(|g| (g.value, g.feedback)).collect();
        assert_eq!(
            history,
            vec![(55, Feedback::Correct), (70, Feedback::High), (40, Feedback::Low)]
        );
    }

    #[test]
    fn test_miss_produces_hint_request() {
        let mut game = playing(50);

        let outcome = game.submit_guess("80").unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Miss {
                feedback: Feedback::High,
                hint: HintRequest {
                    guess: 80,
                    target: 50,
                    attempt: 1,
                    player_name: "Arthur".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_full_round_to_win() {
        let mut game = playing(50);
        let generation = game.generation();

        assert!(matches!(
            game.submit_guess("80").unwrap(),
            GuessOutcome::Miss { feedback: Feedback::High, .. }
        ));
        game.tick(generation);
        assert!(matches!(
            game.submit_guess("20").unwrap(),
            GuessOutcome::Miss { feedback: Feedback::Low, .. }
        ));
        game.tick(generation);

        let outcome = game.submit_guess("50").unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Won(Candidate {
                attempts: 3,
                time_seconds: 2,
            })
        );
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn test_clock_freezes_after_win() {
        let mut game = playing(50);
        let generation = game.generation();
        assert!(game.tick(generation));
        game.submit_guess("50").unwrap();

        assert!(!game.tick(generation));
        assert_eq!(game.elapsed_seconds(), 1);
    }

    #[test]
    fn test_guess_after_win_is_rejected() {
        let mut game = playing(50);
        game.submit_guess("50").unwrap();

        let err = game.submit_guess("50").unwrap_err();
        assert!(matches!(err, GameError::InvalidTransition { from: Status::Won, .. }));
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_reset_from_won_clears_session() {
        let mut game = playing(50);
        game.submit_guess("50").unwrap();

        game.reset().unwrap();

        assert_eq!(game.status(), Status::Idle);
        assert_eq!(game.player_name(), "");
        assert!(game.guesses().is_empty());
        assert_eq!(game.elapsed_seconds(), 0);
        assert_eq!(game.target(), None);
    }

    #[test]
    fn test_reset_only_from_won() {
        let mut game = Game::new();
        assert!(game.reset().is_err());

        let mut game = playing(50);
        assert!(game.reset().is_err());
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn test_stale_ticks_do_not_leak_into_next_session() {
        let mut game = playing(50);
        let old_generation = game.generation();
        game.submit_guess("50").unwrap();
        game.reset().unwrap();

        let new_generation = game.start_with_target("Bedivere", 10).unwrap();
        assert_ne!(old_generation, new_generation);

        assert!(!game.tick(old_generation));
        assert!(!game.tick(old_generation));
        assert_eq!(game.elapsed_seconds(), 0);

        assert!(game.tick(new_generation));
        assert_eq!(game.elapsed_seconds(), 1);
    }
}
