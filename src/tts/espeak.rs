//! eSpeak NG backend calling the local `espeak-ng` binary

use super::{check_status, run_program, voice_from_table, Property, SpeechEngine};
use crate::error::SayResult;
use async_trait::async_trait;
use tracing::{debug, info, warn};

pub const PROGRAM: &str = "espeak-ng";

/// `File` column of `espeak-ng --voices`, which `-v` accepts.
const VOICE_COLUMN: usize = 4;

#[derive(Debug, Default)]
pub struct EspeakEngine {
    rate: Option<u32>,
    amplitude: Option<u32>,
    voice: Option<String>,
    queue: Vec<String>,
}

impl EspeakEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn args_for(&self, text: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(rate) = self.rate {
            args.push("-s".to_string());
            args.push(rate.to_string());
        }
        if let Some(amplitude) = self.amplitude {
            args.push("-a".to_string());
            args.push(amplitude.to_string());
        }
        if let Some(voice) = &self.voice {
            args.push("-v".to_string());
            args.push(voice.clone());
        }
        args.push("--".to_string());
        args.push(text.to_string());
        args
    }
}

/// espeak amplitude runs 0..=200 with 100 as normal loudness.
pub(crate) fn amplitude(volume: f32) -> u32 {
    (volume.clamp(0.0, 2.0) * 100.0).round() as u32
}

#[async_trait]
impl SpeechEngine for EspeakEngine {
    async fn set_property(&mut self, property: Property) -> SayResult<()> {
        match property {
            Property::Rate(wpm) => self.rate = Some(wpm),
            Property::Volume(volume) => self.amplitude = Some(amplitude(volume)),
            Property::Voice(index) => {
                let output = run_program(PROGRAM, vec!["--voices".to_string()]).await?;
                let listing = String::from_utf8_lossy(&output.stdout);
                match voice_from_table(&listing, index, VOICE_COLUMN) {
                    Some(voice) => {
                        info!("🗣️ Using espeak-ng voice #{}: {}", index, voice);
                        self.voice = Some(voice);
                    }
                    None => warn!(
                        "⚠️ espeak-ng has no voice #{}, keeping the default voice",
                        index
                    ),
                }
            }
        }
        Ok(())
    }

    async fn say(&mut self, text: &str) -> SayResult<()> {
        self.queue.push(text.to_string());
        Ok(())
    }

    async fn run_and_wait(&mut self) -> SayResult<()> {
        for text in std::mem::take(&mut self.queue) {
            debug!("espeak-ng speaking: {}", text);
            let output = run_program(PROGRAM, self.args_for(&text)).await?;
            check_status(PROGRAM, &output)?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        PROGRAM
    }
}
