use serde::Serialize;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    /// Per-stream session counters (latest follower, session tips, ...).
    pub async fn get_user_session_data(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_USER_SESSION_DATA, channel, &[], None).await
    }

    pub async fn update_user_session_data(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::UPDATE_USER_SESSION_DATA, channel, &[], to_payload(options)?)
            .await
    }

    pub async fn reset_user_session_data(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::RESET_USER_SESSION_DATA, channel, &[], None).await
    }

    pub async fn reload_user_session_data(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::RELOAD_USER_SESSION_DATA, channel, &[], None).await
    }
}
