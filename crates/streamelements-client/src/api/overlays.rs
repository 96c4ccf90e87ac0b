use serde::Serialize;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    pub async fn get_overlays(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_OVERLAYS, channel, &[], None).await
    }

    pub async fn create_overlay(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CREATE_OVERLAY, channel, &[], to_payload(options)?)
            .await
    }

    pub async fn get_overlay(
        &self,
        overlay_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_OVERLAY, channel, &[("overlay_id", overlay_id)], None)
            .await
    }

    pub async fn update_overlay(
        &self,
        overlay_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_OVERLAY,
            channel,
            &[("overlay_id", overlay_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn delete_overlay(
        &self,
        overlay_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_OVERLAY, channel, &[("overlay_id", overlay_id)], None)
            .await
    }
}
