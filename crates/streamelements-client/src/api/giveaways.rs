use serde::Serialize;
use serde_json::json;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    pub async fn get_giveaways(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_GIVEAWAYS, channel, &[], None).await
    }

    pub async fn create_giveaway(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CREATE_GIVEAWAY, channel, &[], to_payload(options)?)
            .await
    }

    pub async fn get_past_giveaways(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_PAST_GIVEAWAYS, channel, &[], None).await
    }

    pub async fn get_giveaway(
        &self,
        giveaway_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_GIVEAWAY, channel, &[("giveaway_id", giveaway_id)], None)
            .await
    }

    /// Enter a giveaway with the given number of tickets.
    pub async fn buy_giveaway_tickets(
        &self,
        giveaway_id: &str,
        tickets: u32,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let body = json!({ "tickets": tickets });
        self.dispatch(
            &routes::BUY_GIVEAWAY_TICKETS,
            channel,
            &[("giveaway_id", giveaway_id)],
            Some(body),
        )
        .await
    }

    pub async fn update_giveaway(
        &self,
        giveaway_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_GIVEAWAY,
            channel,
            &[("giveaway_id", giveaway_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn delete_giveaway(
        &self,
        giveaway_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_GIVEAWAY, channel, &[("giveaway_id", giveaway_id)], None)
            .await
    }

    /// Whether the current user has entered the giveaway.
    pub async fn get_user_giveaway_status(
        &self,
        giveaway_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::GET_USER_GIVEAWAY_STATUS,
            channel,
            &[("giveaway_id", giveaway_id)],
            None,
        )
        .await
    }

    /// Draw the winners.
    pub async fn complete_giveaway(
        &self,
        giveaway_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::COMPLETE_GIVEAWAY, channel, &[("giveaway_id", giveaway_id)], None)
            .await
    }

    /// Cancel a giveaway and refund every ticket.
    pub async fn refund_giveaway(
        &self,
        giveaway_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::REFUND_GIVEAWAY, channel, &[("giveaway_id", giveaway_id)], None)
            .await
    }

    /// Stop selling tickets.
    pub async fn close_giveaway(
        &self,
        giveaway_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CLOSE_GIVEAWAY, channel, &[("giveaway_id", giveaway_id)], None)
            .await
    }
}
