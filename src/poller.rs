//! Background polling of the suggestion backend
//!
//! A dedicated thread fetches the backend on a fixed interval and hands
//! each result to the UI thread over a channel. Every failure mode of a
//! fetch collapses into the built-in fallback list, so the overlay
//! always has cards to show.

mod client;
mod worker;

pub use worker::{Shutdown, spawn_poller};
