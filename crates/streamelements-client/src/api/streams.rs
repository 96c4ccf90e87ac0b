use super::routes;
use super::*;

impl StreamElementsClient {
    pub async fn get_streams(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_STREAMS, channel, &[], None).await
    }

    /// Live/offline status of the channel.
    pub async fn get_stream_status(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_STREAM_STATUS, channel, &[], None).await
    }

    pub async fn get_stream_details(
        &self,
        stream_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_STREAM_DETAILS, channel, &[("stream_id", stream_id)], None)
            .await
    }

    // stats

    pub async fn get_daily_stats(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_DAILY_STATS, channel, &[], None).await
    }

    pub async fn get_monthly_stats(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_MONTHLY_STATS, channel, &[], None).await
    }
}
