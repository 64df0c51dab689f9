/// The all-time best finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestRecord {
    pub player_name: String,
    pub attempts: u32,
    pub time_seconds: u64,
}

/// Score of a just-finished game, before it has a name attached.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub attempts: u32,
    pub time_seconds: u64,
}

impl Candidate {
    pub fn into_record(self, player_name: impl Into<String>) -> BestRecord {
        BestRecord {
            player_name: player_name.into(),
            attempts: self.attempts,
            time_seconds: self.time_seconds,
        }
    }
}

/// Whether `candidate` strictly beats `current`.
///
/// Fewer attempts wins; time only breaks ties on attempts. An identical
/// (attempts, time) pair is not an improvement.
pub fn is_improvement(candidate: Candidate, current: Option<&BestRecord>) -> bool {
    match current {
        None => true,
        Some(best) => {
            (candidate.attempts, candidate.time_seconds) < (best.attempts, best.time_seconds)
        }
    }
}
