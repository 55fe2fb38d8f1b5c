//! HTTP chat service for the Adventure front-end
//!
//! Forwards a player's chat message to a Gemini model and returns the reply.
//! Image generation is reserved in the model interface but not wired up yet.

pub mod ai;
pub mod api;
pub mod app;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod settings;

pub use error::{Error, Result};
