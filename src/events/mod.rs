pub mod controls;
pub mod keyboard;

pub use controls::{wire_ask_controls, wire_history, wire_settings};
pub use keyboard::wire_question_keydown;
