//! Input handling and validation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Status, ValidationError, parse_guess};

use super::super::{app::App, types::InputStatus};
use super::GameHandler;

pub const MAX_NAME_LEN: usize = 24;
const MAX_GUESS_LEN: usize = 6;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q' | 'c' | 'C'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Enter, _) => match self.app.game.status() {
                Status::Idle => GameHandler::new(self.app).start_game(),
                Status::Playing => GameHandler::new(self.app).submit_guess(),
                Status::Won => GameHandler::new(self.app).reset_game(),
            },

            (KeyCode::Backspace, _) => {
                if let Some(field) = self.active_field() {
                    field.pop();
                }
                self.app.input_error = false;
            }

            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => self.push_char(c),

            _ => {}
        }
        false
    }

    fn active_field(&mut self) -> Option<&mut String> {
        match self.app.game.status() {
            Status::Idle => Some(&mut self.app.name_input),
            Status::Playing => Some(&mut self.app.guess_input),
            Status::Won => None,
        }
    }

    fn push_char(&mut self, c: char) {
        let limit = match self.app.game.status() {
            Status::Idle => MAX_NAME_LEN,
            Status::Playing => MAX_GUESS_LEN,
            Status::Won => return,
        };

        self.app.input_error = false;
        if let Some(field) = self.active_field() {
            if field.chars().count() < limit {
                field.push(c);
            }
        }
    }

}

/// Validation state of whichever field is active.
pub(in crate::ui) fn input_status(app: &App) -> InputStatus {
    match app.game.status() {
        Status::Idle => {
            if app.name_input.trim().is_empty() {
                InputStatus::Incomplete
            } else {
                InputStatus::Valid
            }
        }
        Status::Playing => match parse_guess(&app.guess_input) {
            Ok(_) => InputStatus::Valid,
            Err(ValidationError::Empty) => InputStatus::Incomplete,
            Err(ValidationError::NotANumber(_)) => InputStatus::Invalid("not a number"),
            Err(ValidationError::OutOfRange(_)) => InputStatus::Invalid("must be 1-100"),
        },
        Status::Won => InputStatus::Valid,
    }
}
