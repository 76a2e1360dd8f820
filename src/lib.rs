//! chatmark - chat-driven bookmarks for game server players.
//!
//! Players type `!mark ...` in chat to save, list, show, search and remove
//! named text snippets. This library exposes the core for the console relay
//! binary and for integration tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod marks;
pub mod persistence;
pub mod service;
