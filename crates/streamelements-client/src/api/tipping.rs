use serde::Serialize;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    /// Currency exchange rates used to normalize tips.
    pub async fn get_tipping_exchange_rates(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_TIPPING_EXCHANGE_RATES, None, &[], None).await
    }

    pub async fn get_tipping_settings(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_TIPPING_SETTINGS, channel, &[], None).await
    }

    pub async fn update_tipping_settings(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::UPDATE_TIPPING_SETTINGS, channel, &[], to_payload(options)?)
            .await
    }

    // tips

    pub async fn get_tips(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_TIPS, channel, &[], None).await
    }

    /// Record a tip received outside StreamElements.
    pub async fn create_tip(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CREATE_TIP, channel, &[], to_payload(options)?)
            .await
    }

    pub async fn get_top_tippers(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_TOP_TIPPERS, channel, &[], None).await
    }

    pub async fn get_tip_leaderboard(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_TIP_LEADERBOARD, channel, &[], None).await
    }

    /// Tips waiting in the moderation queue.
    pub async fn get_recent_tips(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_RECENT_TIPS, channel, &[], None).await
    }

    pub async fn get_tip(
        &self,
        tip_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_TIP, channel, &[("tip_id", tip_id)], None).await
    }

    pub async fn update_tip(
        &self,
        tip_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::UPDATE_TIP, channel, &[("tip_id", tip_id)], to_payload(options)?)
            .await
    }

    pub async fn delete_tip(
        &self,
        tip_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_TIP, channel, &[("tip_id", tip_id)], None).await
    }
}
