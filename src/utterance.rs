//! Resolving the text to speak from the command line.

use crate::error::{SayError, SayResult};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Acknowledgement phrases used when no text is given.
pub const DEFAULT_PHRASES: &[&str] = &["mmm mmm"];

/// The text spoken in one run. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance(String);

impl Utterance {
    /// Join `args` with single spaces, or pick one of `phrases` when there are none.
    pub fn from_args<S, R>(args: &[S], phrases: &[String], rng: &mut R) -> SayResult<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let text = if args.is_empty() {
            phrases.choose(rng).cloned().ok_or(SayError::EmptyUtterance)?
        } else {
            args.iter()
                .map(|a| a.as_ref())
                .collect::<Vec<_>>()
                .join(" ")
        };

        if text.is_empty() {
            return Err(SayError::EmptyUtterance);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
