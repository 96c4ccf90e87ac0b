use serde::Serialize;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    pub async fn get_loyalty_settings(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_LOYALTY_SETTINGS, channel, &[], None).await
    }

    pub async fn update_loyalty_settings(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::UPDATE_LOYALTY_SETTINGS, channel, &[], to_payload(options)?)
            .await
    }
}
