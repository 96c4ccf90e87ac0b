use serde::Serialize;
use serde_json::json;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    pub async fn get_contests(&self, channel: Option<&str>) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CONTESTS, channel, &[], None).await
    }

    pub async fn create_contest(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CREATE_CONTEST, channel, &[], to_payload(options)?)
            .await
    }

    pub async fn get_completed_contests(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_COMPLETED_CONTESTS, channel, &[], None).await
    }

    pub async fn get_contest(
        &self,
        contest_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CONTEST, channel, &[("contest_id", contest_id)], None)
            .await
    }

    pub async fn update_contest(
        &self,
        contest_id: &str,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(
            &routes::UPDATE_CONTEST,
            channel,
            &[("contest_id", contest_id)],
            to_payload(options)?,
        )
        .await
    }

    pub async fn delete_contest(
        &self,
        contest_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_CONTEST, channel, &[("contest_id", contest_id)], None)
            .await
    }

    /// Place a bet of `amount` loyalty points on one of the contest's options.
    pub async fn create_contest_bet(
        &self,
        contest_id: &str,
        option_id: &str,
        amount: i64,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let body = json!({ "optionId": option_id, "amount": amount });
        self.dispatch(
            &routes::CREATE_CONTEST_BET,
            channel,
            &[("contest_id", contest_id)],
            Some(body),
        )
        .await
    }

    /// The current user's bet on a contest.
    pub async fn get_contest_bet(
        &self,
        contest_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_CONTEST_BET, channel, &[("contest_id", contest_id)], None)
            .await
    }

    pub async fn start_contest(
        &self,
        contest_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::START_CONTEST, channel, &[("contest_id", contest_id)], None)
            .await
    }

    /// Pick the winning option and pay out the bets placed on it.
    pub async fn set_contest_winner(
        &self,
        contest_id: &str,
        winner_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let body = json!({ "winnerId": winner_id });
        self.dispatch(
            &routes::SET_CONTEST_WINNER,
            channel,
            &[("contest_id", contest_id)],
            Some(body),
        )
        .await
    }

    /// Cancel a contest and return every bet.
    pub async fn refund_contest(
        &self,
        contest_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::REFUND_CONTEST, channel, &[("contest_id", contest_id)], None)
            .await
    }

    /// Stop accepting bets.
    pub async fn close_contest(
        &self,
        contest_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::CLOSE_CONTEST, channel, &[("contest_id", contest_id)], None)
            .await
    }
}
