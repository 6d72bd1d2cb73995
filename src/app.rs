//! Overlay application
//!
//! Ties together the poller channel, suggestion state, and the
//! header/cards/footer frame.

mod app_events;
mod app_render;
mod app_state;
mod indicator;
mod mouse_click;
mod mouse_hover;

pub use app_state::App;
