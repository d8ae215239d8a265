//! Speech invoker
//!
//! The whole run: acquire an engine, configure it, resolve the text, speak,
//! and report on the status stream. Every failure is terminal.

use crate::config::Config;
use crate::error::{SayError, SayResult};
use crate::tts::{Backend, Property, SpeechEngine};
use crate::utterance::Utterance;
use rand::Rng;
use std::future::Future;
use std::io::Write;
use tracing::{error, info, warn};

const HEADER: &str = "🎙️  murmur TTS";
const HEADER_RULE: usize = 15;

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Spoken(Utterance),
    Failed(SayError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Spoken(_))
    }

    /// 0 after playback finished, 1 for any failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Spoken(_) => 0,
            Outcome::Failed(_) => 1,
        }
    }
}

/// Runs one utterance through one engine, writing status lines to `out`.
pub struct Invoker<W: Write> {
    config: Config,
    out: W,
}

impl<W: Write> Invoker<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run<S, R, F, Fut>(&mut self, args: &[S], rng: &mut R, acquire: F) -> Outcome
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
        F: FnOnce(Vec<Backend>) -> Fut,
        Fut: Future<Output = SayResult<Box<dyn SpeechEngine>>>,
    {
        match self.speak(args, rng, acquire).await {
            Ok(utterance) => {
                self.line("✅ Playback complete!");
                Outcome::Spoken(utterance)
            }
            Err(SayError::EngineUnavailable(detail)) => {
                error!("❌ No speech engine: {}", detail);
                self.line(&format!("❌ Error: speech engine not installed ({})", detail));
                self.line("Install espeak-ng or speech-dispatcher (spd-say) and try again.");
                Outcome::Failed(SayError::EngineUnavailable(detail))
            }
            Err(e) => {
                error!("❌ {}", e);
                self.line(&format!("❌ Error: {}", e));
                Outcome::Failed(e)
            }
        }
    }

    async fn speak<S, R, F, Fut>(
        &mut self,
        args: &[S],
        rng: &mut R,
        acquire: F,
    ) -> SayResult<Utterance>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
        F: FnOnce(Vec<Backend>) -> Fut,
        Fut: Future<Output = SayResult<Box<dyn SpeechEngine>>>,
    {
        let mut engine = acquire(self.config.backends.clone()).await?;
        self.config.validate()?;

        let voice = self.config.voice.clone();
        engine.set_property(Property::Rate(voice.rate)).await?;
        engine.set_property(Property::Volume(voice.volume)).await?;
        engine.set_property(Property::Voice(voice.voice_index)).await?;

        self.line(HEADER);
        self.line(&"=".repeat(HEADER_RULE));

        let utterance = Utterance::from_args(args, &self.config.phrases, rng)?;
        self.line(&format!("🎯 Text: {}", utterance));
        self.line("🔊 Speaking...");
        info!("📢 {} speaking: '{}'", engine.name(), utterance);

        engine.say(utterance.as_str()).await?;
        engine.run_and_wait().await?;
        Ok(utterance)
    }

    fn line(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message).and_then(|_| self.out.flush()) {
            warn!("⚠️ Could not write status line: {}", e);
        }
    }
}
