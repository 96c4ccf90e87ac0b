use serde::Serialize;
use serde_json::json;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    pub async fn get_bot_status(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_BOT_STATUS, channel, &[], None).await
    }

    /// Make the bot leave the channel's chat.
    pub async fn bot_part_channel(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::BOT_PART_CHANNEL, channel, &[], None).await
    }

    /// Send a chat message as the bot.
    pub async fn bot_say(
        &self,
        message: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let body = json!({ "message": message });
        self.dispatch(&routes::BOT_SAY, channel, &[], Some(body)).await
    }

    pub async fn bot_join_channel(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::BOT_JOIN_CHANNEL, channel, &[], None).await
    }

    pub async fn bot_mute(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::BOT_MUTE, channel, &[], None).await
    }

    pub async fn bot_unmute(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::BOT_UNMUTE, channel, &[], None).await
    }

    pub async fn get_bot_user_levels(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_BOT_USER_LEVELS, channel, &[], None).await
    }

    /// Grant a chat user a bot access level.
    pub async fn set_bot_user_level(
        &self,
        username: &str,
        level: u32,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let body = json!({ "username": username, "level": level });
        self.dispatch(&routes::SET_BOT_USER_LEVEL, channel, &[], Some(body)).await
    }

    /// Remove a user's custom bot level. The API expects `{"id":"levels"}`
    /// as the body of this DELETE.
    pub async fn delete_bot_user_level(
        &self,
        username: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let body = json!({ "id": "levels" });
        self.dispatch(
            &routes::DELETE_BOT_USER_LEVEL,
            channel,
            &[("username", username)],
            Some(body),
        )
        .await
    }

    // commands

    pub async fn get_bot_commands(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_BOT_COMMANDS, channel, &[], None).await
    }

    pub async fn create_bot_command(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CREATE_BOT_COMMAND, channel, &[], to_payload(options)?)
            .await
    }

    /// Built-in commands and their per-channel overrides.
    pub async fn get_default_bot_commands(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_DEFAULT_BOT_COMMANDS, channel, &[], None).await
    }

    pub async fn update_default_bot_command(
        &self,
        command_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_DEFAULT_BOT_COMMAND,
            channel,
            &[("command_id", command_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn get_bot_command(
        &self,
        command_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_BOT_COMMAND, channel, &[("command_id", command_id)], None)
            .await
    }

    pub async fn update_bot_command(
        &self,
        command_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_BOT_COMMAND,
            channel,
            &[("command_id", command_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn delete_bot_command(
        &self,
        command_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_BOT_COMMAND, channel, &[("command_id", command_id)], None)
            .await
    }

    // timers

    pub async fn get_bot_timers(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_BOT_TIMERS, channel, &[], None).await
    }

    pub async fn create_bot_timer(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CREATE_BOT_TIMER, channel, &[], to_payload(options)?)
            .await
    }

    pub async fn get_bot_timer(
        &self,
        timer_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_BOT_TIMER, channel, &[("timer_id", timer_id)], None)
            .await
    }

    pub async fn update_bot_timer(
        &self,
        timer_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_BOT_TIMER,
            channel,
            &[("timer_id", timer_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn delete_bot_timer(
        &self,
        timer_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_BOT_TIMER, channel, &[("timer_id", timer_id)], None)
            .await
    }
}
