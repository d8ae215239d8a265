use crate::error::{SayError, SayResult};
use crate::tts::Backend;
use crate::utterance::DEFAULT_PHRASES;
use serde::{Deserialize, Serialize};

/// Rate, volume and voice applied to the engine before speaking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Words per minute
    pub rate: u32,
    /// 0.0 (silent) to 1.0 (full)
    pub volume: f32,
    /// Index into the engine's voice list. Platform dependent, best effort.
    pub voice_index: usize,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            rate: 100,
            volume: 0.4,
            voice_index: 1,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub voice: VoiceConfig,

    /// Spoken when no text is given on the command line
    pub phrases: Vec<String>,

    /// Engines to try, in order
    pub backends: Vec<Backend>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            voice: VoiceConfig::default(),
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
            backends: vec![Backend::EspeakNg, Backend::SpdSay],
        }
    }
}

impl Config {
    pub fn validate(&self) -> SayResult<()> {
        if self.voice.rate == 0 {
            return Err(SayError::Config("rate must be positive".to_string()));
        }
        if !self.voice.volume.is_finite() || !(0.0..=1.0).contains(&self.voice.volume) {
            return Err(SayError::Config(format!(
                "volume {} outside 0.0..=1.0",
                self.voice.volume
            )));
        }
        if self.phrases.is_empty() {
            return Err(SayError::Config("no default phrases".to_string()));
        }
        if self.backends.is_empty() {
            return Err(SayError::Config("no speech backends".to_string()));
        }
        Ok(())
    }

    /// Single-line JSON dump for debug logging
    pub fn to_json(&self) -> SayResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
