//! Backend for a Spanish vocabulary quiz - orchestrates AI generation per request
//!
//! Each request asks a chat-completion provider for a pool of candidate nouns,
//! samples four options and one correct answer locally, then fetches an
//! illustrative image and a single-word Japanese meaning for the answer.

pub mod ai;
pub mod error;
pub mod models;
pub mod prompts;
pub mod quiz;
pub mod server;

pub use error::{Error, Result};
