//! Applies results coming back from background tasks.

use tracing::{error, warn};

use crate::game::{Candidate, Status, is_improvement};

use super::super::{app::App, types::AppEvent};

pub struct EventHandler<'a> {
    app: &'a mut App,
}

impl<'a> EventHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick { generation } => {
                self.app.game.tick(generation);
            }

            AppEvent::Hint {
                generation,
                attempt,
                text,
            } => self.apply_hint(generation, attempt, text),

            AppEvent::BestLoaded(Ok(Some(record))) => {
                let loaded = Candidate {
                    attempts: record.attempts,
                    time_seconds: record.time_seconds,
                };
                // A game may already have been won locally while the fetch was in flight.
                if is_improvement(loaded, self.app.best_record.as_ref()) {
                    self.app.log(format!(
                        "Best record: {} with {} guesses in {}s",
                        record.player_name, record.attempts, record.time_seconds
                    ));
                    self.app.best_record = Some(record);
                }
            }

            AppEvent::BestLoaded(Ok(None)) => {
                self.app.log("No record yet");
            }

            AppEvent::BestLoaded(Err(err)) => {
                error!(error = %err, "failed to load best record");
                self.app.logs.push(format!("Could not load best record: {}", err));
            }

            AppEvent::RecordSaved {
                record,
                result: Ok(()),
            } => {
                self.app.log(format!(
                    "Record saved for {} ({} guesses, {}s)",
                    record.player_name, record.attempts, record.time_seconds
                ));
            }

            AppEvent::RecordSaved {
                record,
                result: Err(err),
            } => {
                error!(error = %err, player = %record.player_name, "failed to save record");
                self.app.logs.push(format!("Could not save record: {}", err));
            }
        }
    }

    fn apply_hint(&mut self, generation: u64, attempt: u32, text: String) {
        let current = self.app.game.status() == Status::Playing
            && generation == self.app.game.generation()
            && attempt == self.app.game.attempts();

        if !current {
            warn!(generation, attempt, "dropping stale hint");
            return;
        }

        self.app.hint = text;
        self.app.hint_pending = false;
    }
}
