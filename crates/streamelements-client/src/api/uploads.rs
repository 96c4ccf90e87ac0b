use super::routes;
use super::*;

impl StreamElementsClient {
    /// Uploaded media assets (images, sounds, videos).
    pub async fn get_assets(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_ASSETS, channel, &[], None).await
    }

    pub async fn delete_asset(
        &self,
        asset_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_ASSET, channel, &[("asset_id", asset_id)], None)
            .await
    }
}
