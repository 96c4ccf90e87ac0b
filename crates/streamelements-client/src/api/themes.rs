use serde::Serialize;
use serde_json::json;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    pub async fn get_themes(&self) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_THEMES, None, &[], None).await
    }

    pub async fn get_theme(&self, theme_id: &str) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_THEME, None, &[("theme_id", theme_id)], None)
            .await
    }

    /// Instantiate a theme as a new overlay.
    pub async fn create_overlay_from_theme(
        &self,
        theme_id: &str,
        options: &impl Serialize,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::CREATE_OVERLAY_FROM_THEME,
            None,
            &[("theme_id", theme_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn rate_theme(&self, theme_id: &str, rating: u8) -> Result<Value, StreamElementsError> {
        let body = json!({ "rating": rating });
        self.dispatch(&routes::RATE_THEME, None, &[("theme_id", theme_id)], Some(body))
            .await
    }

    pub async fn get_theme_rating_for_channel(
        &self,
        theme_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::GET_THEME_RATING_FOR_CHANNEL,
            channel,
            &[("theme_id", theme_id)],
            None,
        )
        .await
    }
}
