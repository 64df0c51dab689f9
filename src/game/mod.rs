//! Game core: target generation, guess evaluation, best-record ordering and the
//! session state machine.

pub mod feedback;
pub mod record;
pub mod state;
pub mod target;

pub use feedback::{Feedback, ValidationError, evaluate, parse_guess};
pub use record::{BestRecord, Candidate, is_improvement};
pub use state::{Game, GameError, GuessEntry, GuessOutcome, HintRequest, Status};
pub use target::{MAX_GUESS, MIN_GUESS, new_target};
