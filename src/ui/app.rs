use std::{fmt::Display, io::Stdout, sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::info;

use crate::{
    game::{BestRecord, Game},
    hint::HintProvider,
    store::RecordStore,
};

use super::{
    handlers::{EventHandler, GameHandler, InputHandler},
    types::{AppEvent, LogBuffer},
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub(in crate::ui) const WELCOME_MESSAGE: &str = "Welcome to the Quest!";

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: Game,
    pub(in crate::ui) rng: StdRng,
    pub(in crate::ui) name_input: String,
    pub(in crate::ui) guess_input: String,
    pub(in crate::ui) hint: String,
    pub(in crate::ui) input_error: bool,
    pub(in crate::ui) hint_pending: bool,
    pub(in crate::ui) best_record: Option<BestRecord>,
    pub(in crate::ui) is_new_record: bool,
    pub(in crate::ui) logs: LogBuffer,
    pub(in crate::ui) store: Arc<dyn RecordStore>,
    pub(in crate::ui) hints: Arc<dyn HintProvider>,
    pub(in crate::ui) hint_timeout: Duration,
    pub(in crate::ui) events_tx: UnboundedSender<AppEvent>,
    pub(in crate::ui) events_rx: UnboundedReceiver<AppEvent>,
    pub(in crate::ui) ticker: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(
        store: Arc<dyn RecordStore>,
        hints: Arc<dyn HintProvider>,
        hint_timeout: Duration,
        logs: LogBuffer,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            game: Game::new(),
            rng: StdRng::from_entropy(),
            name_input: String::new(),
            guess_input: String::new(),
            hint: WELCOME_MESSAGE.to_string(),
            input_error: false,
            hint_pending: false,
            best_record: None,
            is_new_record: false,
            logs,
            store,
            hints,
            hint_timeout,
            events_tx,
            events_rx,
            ticker: None,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!(store = self.store.name(), hints = self.hints.name(), "UI started");
        self.log("UI started");

        GameHandler::new(self).load_best_record();

        let result = self.event_loop(terminal);

        GameHandler::new(self).stop_ticker();
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            self.drain_events();

            terminal.draw(|f| self.draw(f))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    /// Apply every event already queued by background tasks.
    pub(in crate::ui) fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            EventHandler::new(self).handle(event);
        }
    }

    /// Wait for the next background event without applying it.
    #[cfg(test)]
    pub(in crate::ui) async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
