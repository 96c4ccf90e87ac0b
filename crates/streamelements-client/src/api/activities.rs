use super::routes;
use super::*;

impl StreamElementsClient {
    /// Get the activity feed (follows, tips, subs, ...) of a channel.
    pub async fn get_activities(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_ACTIVITIES, channel, &[], None).await
    }

    pub async fn get_activity(
        &self,
        activity_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_ACTIVITY, channel, &[("activity_id", activity_id)], None)
            .await
    }

    /// Replay an activity's alert on the channel's overlays.
    pub async fn replay_activity(
        &self,
        activity_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::REPLAY_ACTIVITY, channel, &[("activity_id", activity_id)], None)
            .await
    }
}
