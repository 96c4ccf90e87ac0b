use serde::Serialize;
use serde_json::json;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    pub async fn get_song_request_settings(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_SONG_REQUEST_SETTINGS, channel, &[], None).await
    }

    pub async fn update_song_request_settings(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_SONG_REQUEST_SETTINGS,
            channel,
            &[],
            to_payload(options)?,
        )
        .await
    }

    /// Settings visible to viewers on the public request page.
    pub async fn get_public_song_request_settings(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_PUBLIC_SONG_REQUEST_SETTINGS, channel, &[], None)
            .await
    }

    pub async fn get_song_request_queue(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_SONG_REQUEST_QUEUE, channel, &[], None).await
    }

    /// Queue a song by URL, video id or search term.
    pub async fn create_song_request(
        &self,
        song: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let body = json!({ "song": song });
        self.dispatch(&routes::CREATE_SONG_REQUEST, channel, &[], Some(body)).await
    }

    pub async fn get_song_request_history(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_SONG_REQUEST_HISTORY, channel, &[], None).await
    }

    pub async fn skip_current_song(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::SKIP_CURRENT_SONG, channel, &[], None).await
    }

    pub async fn delete_song_request(
        &self,
        song_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_SONG_REQUEST, channel, &[("song_id", song_id)], None)
            .await
    }

    pub async fn clear_song_request_queue(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CLEAR_SONG_REQUEST_QUEUE, channel, &[], None).await
    }

    pub async fn get_current_song(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CURRENT_SONG, channel, &[], None).await
    }
}
