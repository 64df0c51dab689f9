//! Session lifecycle: start, guess, win, reset, plus the background tasks
//! each transition launches.

use std::{sync::Arc, time::Duration};

use tracing::debug;

use crate::{
    game::{Candidate, GameError, GuessOutcome, HintRequest, Status, is_improvement},
    hint,
};

use super::super::{app::App, app::WELCOME_MESSAGE, types::AppEvent};

pub(in crate::ui) const INVALID_GUESS_MESSAGE: &str =
    "Please enter a valid number between 1 and 100!";

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Helper struct for managing game-specific state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_game(&mut self) {
        let name = self.app.name_input.clone();

        match self.app.game.start(&name, &mut self.app.rng) {
            Ok(generation) => self.on_session_started(generation),
            Err(GameError::BlankPlayerName) => {
                self.app.log("Enter a challenger name to start");
            }
            Err(err) => self.app.log(format!("Cannot start: {}", err)),
        }
    }

    pub(in crate::ui) fn on_session_started(&mut self, generation: u64) {
        let name = self.app.game.player_name().to_string();
        tracing::info!(generation, player = %name, "new game started");

        self.app.guess_input.clear();
        self.app.input_error = false;
        self.app.hint_pending = false;
        self.app.is_new_record = false;
        self.app.hint = format!("I've picked a number between 1 and 100, {}. Good luck!", name);
        self.app.log(format!("{} entered the quest", name));

        self.start_ticker(generation);
    }

    pub fn submit_guess(&mut self) {
        if self.app.game.status() != Status::Playing {
            return;
        }

        if self.app.hint_pending {
            self.app.log("The host is still thinking, guess held back");
            return;
        }

        let input = self.app.guess_input.clone();

        match self.app.game.submit_guess(&input) {
            Ok(GuessOutcome::Miss { feedback, hint }) => {
                self.app.guess_input.clear();
                self.app.input_error = false;
                self.app
                    .log(format!("Guess #{}: {} ({})", hint.attempt, hint.guess, feedback));
                self.request_hint(hint);
            }
            Ok(GuessOutcome::Won(candidate)) => {
                self.app.guess_input.clear();
                self.app.input_error = false;
                self.finish_game(candidate);
            }
            Err(GameError::Validation(err)) => {
                self.app.input_error = true;
                self.app.hint = INVALID_GUESS_MESSAGE.to_string();
                self.app.log(format!("Input rejected: {:?} ({})", input, err));
            }
            Err(err) => self.app.log(format!("Guess ignored: {}", err)),
        }
    }

    fn request_hint(&mut self, request: HintRequest) {
        self.app.hint_pending = true;

        let generation = self.app.game.generation();
        let attempt = request.attempt;
        let provider = Arc::clone(&self.app.hints);
        let timeout = self.app.hint_timeout;
        let tx = self.app.events_tx.clone();

        tokio::spawn(async move {
            let text = hint::request_hint(provider.as_ref(), &request, timeout).await;
            let _ = tx.send(AppEvent::Hint {
                generation,
                attempt,
                text,
            });
        });
    }

    fn finish_game(&mut self, candidate: Candidate) {
        self.stop_ticker();

        let name = self.app.game.player_name().to_string();
        let target = self.app.game.target().unwrap_or_default();

        self.app.hint = format!("{} got it! The number was {}.", name, target);
        self.app.log(format!(
            "Game won by {} in {} attempts, {}s",
            name, candidate.attempts, candidate.time_seconds
        ));

        if !is_improvement(candidate, self.app.best_record.as_ref()) {
            debug!(?candidate, best = ?self.app.best_record, "not a new record");
            return;
        }

        let record = candidate.into_record(name);
        self.app.best_record = Some(record.clone());
        self.app.is_new_record = true;
        self.app.log("New record!");

        let store = Arc::clone(&self.app.store);
        let tx = self.app.events_tx.clone();

        tokio::spawn(async move {
            let result = store.save_record(record.clone()).await;
            let _ = tx.send(AppEvent::RecordSaved { record, result });
        });
    }

    pub fn reset_game(&mut self) {
        if let Err(err) = self.app.game.reset() {
            self.app.log(format!("Reset ignored: {}", err));
            return;
        }

        self.stop_ticker();
        self.app.name_input.clear();
        self.app.guess_input.clear();
        self.app.input_error = false;
        self.app.hint_pending = false;
        self.app.is_new_record = false;
        self.app.hint = WELCOME_MESSAGE.to_string();
        self.app.log("Back to the gate");
    }

    pub fn load_best_record(&mut self) {
        let store = Arc::clone(&self.app.store);
        let tx = self.app.events_tx.clone();

        tokio::spawn(async move {
            let result = store.fetch_best().await;
            let _ = tx.send(AppEvent::BestLoaded(result));
        });
    }

    fn start_ticker(&mut self, generation: u64) {
        self.stop_ticker();

        let tx = self.app.events_tx.clone();
        self.app.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    /// Abort the session ticker. Safe to call when none is running.
    pub fn stop_ticker(&mut self) {
        if let Some(handle) = self.app.ticker.take() {
            handle.abort();
            debug!("ticker stopped");
        }
    }
}

