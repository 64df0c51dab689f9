//! Handler modules for keyboard input, game transitions and background events.

mod event_handler;
pub(in crate::ui) mod game_handler;
pub(in crate::ui) mod input_handler;

pub use event_handler::EventHandler;
pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
pub(in crate::ui) use input_handler::input_status;
