//! Murmur Library
//!
//! Speaks a line of text through a local, offline speech engine.

pub mod config;
pub mod error;
pub mod invoker;
pub mod tts;
pub mod utterance;
