use serde::Serialize;

use super::dispatch::to_payload;
use super::routes;
use super::*;

/// Filters for [`StreamElementsClient::get_store_redemptions`]. Unset
/// fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedemptionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
}

impl StreamElementsClient {
    pub async fn get_store_items(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_STORE_ITEMS, channel, &[], None).await
    }

    pub async fn create_store_item(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CREATE_STORE_ITEM, channel, &[], to_payload(options)?)
            .await
    }

    pub async fn get_store_item(
        &self,
        item_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_STORE_ITEM, channel, &[("item_id", item_id)], None)
            .await
    }

    pub async fn update_store_item(
        &self,
        item_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_STORE_ITEM,
            channel,
            &[("item_id", item_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn delete_store_item(
        &self,
        item_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_STORE_ITEM, channel, &[("item_id", item_id)], None)
            .await
    }

    pub async fn get_store_redemptions(
        &self,
        filter: &RedemptionFilter,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_STORE_REDEMPTIONS, channel, &[], to_payload(filter)?)
            .await
    }

    pub async fn get_store_redemption(
        &self,
        redemption_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::GET_STORE_REDEMPTION,
            channel,
            &[("redemption_id", redemption_id)],
            None,
        )
        .await
    }

    /// Update a redemption, e.g. mark it completed.
    pub async fn update_store_redemption(
        &self,
        redemption_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_STORE_REDEMPTION,
            channel,
            &[("redemption_id", redemption_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn delete_store_redemption(
        &self,
        redemption_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::DELETE_STORE_REDEMPTION,
            channel,
            &[("redemption_id", redemption_id)],
            to_payload(options)?,
        )
        .await
    }

    /// Redeem a store item as the current user.
    pub async fn create_store_redemption(
        &self,
        item_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CREATE_STORE_REDEMPTION, channel, &[("item_id", item_id)], None)
            .await
    }
}
