use serde::Serialize;
use serde_json::json;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    /// Channel owned by the token holder.
    pub async fn get_current_channel(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CURRENT_CHANNEL, None, &[], None).await
    }

    pub async fn get_channel(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CHANNEL, channel, &[], None).await
    }

    pub async fn get_channel_emotes(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CHANNEL_EMOTES, channel, &[], None).await
    }

    pub async fn get_channel_details(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CHANNEL_DETAILS, channel, &[], None).await
    }

    pub async fn update_channel_profile(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::UPDATE_CHANNEL_PROFILE, channel, &[], to_payload(options)?)
            .await
    }

    /// Users with dashboard access to the channel.
    pub async fn get_channel_users(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CHANNEL_USERS, channel, &[], None).await
    }

    pub async fn update_user_access_level(
        &self,
        user_id: &str,
        role: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let body = json!({ "role": role });
        self.dispatch(
            &routes::UPDATE_USER_ACCESS_LEVEL,
            channel,
            &[("user_id", user_id)],
            Some(body),
        )
        .await
    }

    pub async fn delete_user_access(
        &self,
        user_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_USER_ACCESS, channel, &[("user_id", user_id)], None)
            .await
    }

    pub async fn roleplay_as_user(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::ROLEPLAY_AS_USER, channel, &[], None).await
    }

    /// Moderation and dashboard audit log.
    pub async fn get_logs(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_LOGS, channel, &[], None).await
    }

    // changelogs

    pub async fn get_latest_changelog(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_LATEST_CHANGELOG, None, &[], None).await
    }

    pub async fn get_first_changelog(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_FIRST_CHANGELOG, None, &[], None).await
    }

    // users

    pub async fn get_current_user(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CURRENT_USER, None, &[], None).await
    }

    /// Channels the current user belongs to.
    pub async fn get_user_channels(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_USER_CHANNELS, None, &[], None).await
    }

    pub async fn get_channel_access(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CHANNEL_ACCESS, None, &[], None).await
    }
}
