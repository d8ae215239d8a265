//! speech-dispatcher backend through its `spd-say` client

use super::{check_status, run_program, voice_from_table, Property, SpeechEngine};
use crate::error::SayResult;
use async_trait::async_trait;
use tracing::{debug, info, warn};

pub const PROGRAM: &str = "spd-say";

/// `NAME` column of `spd-say -L`, which `-y` accepts.
const VOICE_COLUMN: usize = 0;

/// Words per minute that speech-dispatcher treats as rate 0.
const NORMAL_WPM: f32 = 175.0;
const SLOWEST_WPM: f32 = 80.0;
const FASTEST_WPM: f32 = 450.0;

#[derive(Debug, Default)]
pub struct SpdSayEngine {
    rate: Option<i32>,
    volume: Option<i32>,
    voice: Option<String>,
    queue: Vec<String>,
}

impl SpdSayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn args_for(&self, text: &str) -> Vec<String> {
        // -w blocks until the message has been spoken
        let mut args = vec!["-w".to_string()];
        if let Some(rate) = self.rate {
            args.push("-r".to_string());
            args.push(rate.to_string());
        }
        if let Some(volume) = self.volume {
            args.push("-i".to_string());
            args.push(volume.to_string());
        }
        if let Some(voice) = &self.voice {
            args.push("-y".to_string());
            args.push(voice.clone());
        }
        args.push("--".to_string());
        args.push(text.to_string());
        args
    }
}

/// Map words per minute onto speech-dispatcher's -100..=100 rate.
pub(crate) fn relative_rate(wpm: u32) -> i32 {
    let wpm = wpm as f32;
    let scaled = if wpm <= NORMAL_WPM {
        (wpm - NORMAL_WPM) / (NORMAL_WPM - SLOWEST_WPM) * 100.0
    } else {
        (wpm - NORMAL_WPM) / (FASTEST_WPM - NORMAL_WPM) * 100.0
    };
    scaled.round().clamp(-100.0, 100.0) as i32
}

/// Map 0.0..=1.0 onto speech-dispatcher's -100..=100 volume.
pub(crate) fn relative_volume(volume: f32) -> i32 {
    (volume * 200.0 - 100.0).round().clamp(-100.0, 100.0) as i32
}

#[async_trait]
impl SpeechEngine for SpdSayEngine {
    async fn set_property(&mut self, property: Property) -> SayResult<()> {
        match property {
            Property::Rate(wpm) => self.rate = Some(relative_rate(wpm)),
            Property::Volume(volume) => self.volume = Some(relative_volume(volume)),
            Property::Voice(index) => {
                let output = run_program(PROGRAM, vec!["-L".to_string()]).await?;
                let listing = String::from_utf8_lossy(&output.stdout);
                match voice_from_table(&listing, index, VOICE_COLUMN) {
                    Some(voice) => {
                        info!("🗣️ Using speech-dispatcher voice #{}: {}", index, voice);
                        self.voice = Some(voice);
                    }
                    None => warn!(
                        "⚠️ speech-dispatcher has no voice #{}, keeping the default voice",
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
            debug!("spd-say speaking: {}", text);
            let output = run_program(PROGRAM, self.args_for(&text)).await?;
            check_status(PROGRAM, &output)?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        PROGRAM
    }
}
