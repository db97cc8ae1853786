//! Input handling for the playback session.

mod keyboard;

pub use keyboard::handle_key_event;
