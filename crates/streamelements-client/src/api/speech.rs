use serde_json::json;

use super::routes;
use super::*;

/// Voice used by [`StreamElementsClient::generate_speech`] when none is given.
pub const DEFAULT_VOICE: &str = "Joanna";

impl StreamElementsClient {
    /// Synthesize `text` with a text-to-speech voice.
    pub async fn generate_speech(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let query = json!({ "text": text, "voice": voice.unwrap_or(DEFAULT_VOICE) });
        self.dispatch(&routes::GENERATE_SPEECH, None, &[], Some(query)).await
    }

    pub async fn get_speech_voices(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_SPEECH_VOICES, None, &[], None).await
    }
}
