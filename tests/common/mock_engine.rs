//! Mock speech engine for testing
//!
//! Records every property and utterance for verification.

use murmur::error::{SayError, SayResult};
use murmur::tts::{Property, SpeechEngine};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Shared view of what the engine was asked to do
#[derive(Debug, Default, Clone)]
pub struct Recording {
    pub properties: Arc<Mutex<Vec<Property>>>,
    pub queued: Arc<Mutex<Vec<String>>>,
    pub spoken: Arc<Mutex<Vec<String>>>,
}

impl Recording {
    pub fn properties(&self) -> Vec<Property> {
        self.properties.lock().unwrap().clone()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn touched(&self) -> bool {
        !self.properties.lock().unwrap().is_empty() || !self.queued.lock().unwrap().is_empty()
    }
}

/// Mock engine that records instead of speaking
#[derive(Debug)]
pub struct MockEngine {
    pub recording: Recording,
    /// Fail playback with this message
    pub fail_playback: Option<String>,
    /// Fail the voice property with this message
    pub fail_voice: Option<String>,
}

impl MockEngine {
    pub fn new(recording: Recording) -> Self {
        Self {
            recording,
            fail_playback: None,
            fail_voice: None,
        }
    }
}

#[async_trait]
impl SpeechEngine for MockEngine {
    async fn set_property(&mut self, property: Property) -> SayResult<()> {
        if let (Property::Voice(_), Some(msg)) = (property, &self.fail_voice) {
            return Err(SayError::SynthesisFailed(msg.clone()));
        }
        self.recording.properties.lock().unwrap().push(property);
        Ok(())
    }

    async fn say(&mut self, text: &str) -> SayResult<()> {
        self.recording.queued.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn run_and_wait(&mut self) -> SayResult<()> {
        if let Some(msg) = &self.fail_playback {
            return Err(SayError::SynthesisFailed(msg.clone()));
        }
        let queued: Vec<String> = self.recording.queued.lock().unwrap().drain(..).collect();
        self.recording.spoken.lock().unwrap().extend(queued);
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
