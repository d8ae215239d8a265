//! TTS (Text-to-Speech) Module
//!
//! Drives a locally installed, offline speech engine. Each backend wraps a
//! command line program and exposes the small contract Murmur needs: set a
//! property, queue text, then block until it has been spoken.

use crate::error::{SayError, SayResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::process::{Command, Output};
use tracing::{debug, info};

pub mod espeak;
pub mod spd_say;

/// A single engine setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Property {
    /// Words per minute
    Rate(u32),
    /// 0.0..=1.0
    Volume(f32),
    /// Index into the engine's voice list
    Voice(usize),
}

/// Trait for TTS engines
#[async_trait]
pub trait SpeechEngine: Send + fmt::Debug {
    /// Apply a setting to subsequent speech
    async fn set_property(&mut self, property: Property) -> SayResult<()>;

    /// Queue text to be spoken
    async fn say(&mut self, text: &str) -> SayResult<()>;

    /// Speak everything queued, returning once playback has finished
    async fn run_and_wait(&mut self) -> SayResult<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Offline engines Murmur knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    EspeakNg,
    SpdSay,
}

impl Backend {
    pub fn program(&self) -> &'static str {
        match self {
            Backend::EspeakNg => espeak::PROGRAM,
            Backend::SpdSay => spd_say::PROGRAM,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Acquire the first backend in `backends` that is installed.
pub async fn init(backends: &[Backend]) -> SayResult<Box<dyn SpeechEngine>> {
    for backend in backends {
        match probe(backend.program()).await {
            Ok(()) => {
                let engine: Box<dyn SpeechEngine> = match backend {
                    Backend::EspeakNg => Box::new(espeak::EspeakEngine::new()),
                    Backend::SpdSay => Box::new(spd_say::SpdSayEngine::new()),
                };
                info!("✅ TTS engine '{}' initialized", engine.name());
                return Ok(engine);
            }
            Err(SayError::EngineUnavailable(reason)) => {
                debug!("  - {} not usable: {}", backend, reason);
            }
            Err(e) => return Err(e),
        }
    }

    let tried: Vec<String> = backends.iter().map(|b| b.to_string()).collect();
    Err(SayError::EngineUnavailable(format!(
        "none of [{}] found on PATH",
        tried.join(", ")
    )))
}

/// Check that `program` can be launched at all.
async fn probe(program: &'static str) -> SayResult<()> {
    run_program(program, vec!["--version".to_string()])
        .await
        .map(|_| ())
}

/// Run `program` to completion on the blocking pool, capturing its output.
pub(crate) async fn run_program(program: &'static str, args: Vec<String>) -> SayResult<Output> {
    debug!("Running {} {:?}", program, args);
    tokio::task::spawn_blocking(move || Command::new(program).args(&args).output())
        .await
        .map_err(|e| SayError::Other(anyhow::anyhow!("Task join error: {}", e)))?
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SayError::EngineUnavailable(format!("{} is not installed", program))
            } else {
                SayError::Io(e)
            }
        })
}

/// Turn a finished speak command into a result.
pub(crate) fn check_status(program: &str, output: &Output) -> SayResult<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        Err(SayError::SynthesisFailed(format!(
            "{} failed with {}",
            program, output.status
        )))
    } else {
        Err(SayError::SynthesisFailed(format!(
            "{} failed with {}: {}",
            program, output.status, stderr
        )))
    }
}

/// Pick column `column` of row `index` from a voice table with one header line.
pub(crate) fn voice_from_table(listing: &str, index: usize, column: usize) -> Option<String> {
    listing
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .nth(index)
        .and_then(|line| line.split_whitespace().nth(column))
        .map(|s| s.to_string())
}
