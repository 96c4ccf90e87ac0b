use serde::Serialize;
use serde_json::json;

use super::dispatch::to_payload;
use super::routes;
use super::*;

impl StreamElementsClient {
    /// Bulk point update for several users at once.
    pub async fn update_points(
        &self,
        options: &impl Serialize,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::UPDATE_POINTS, channel, &[], to_payload(options)?)
            .await
    }

    pub async fn get_user_points(
        &self,
        user_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_USER_POINTS, channel, &[("user_id", user_id)], None)
            .await
    }

    pub async fn delete_user_points(
        &self,
        user_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::DELETE_USER_POINTS, channel, &[("user_id", user_id)], None)
            .await
    }

    /// Credit a user. The sign of `amount` is ignored.
    pub async fn add_user_points(
        &self,
        user_id: &str,
        amount: i64,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let amount = credit_amount(amount);
        self.dispatch(
            &routes::ADD_USER_POINTS,
            channel,
            &[("user_id", user_id), ("amount", amount.as_str())],
            None,
        )
        .await
    }

    /// Debit a user. The sign of `amount` is ignored.
    pub async fn remove_user_points(
        &self,
        user_id: &str,
        amount: i64,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let amount = debit_amount(amount);
        self.dispatch(
            &routes::REMOVE_USER_POINTS,
            channel,
            &[("user_id", user_id), ("amount", amount.as_str())],
            None,
        )
        .await
    }

    pub async fn get_user_rank(
        &self,
        user_id: &str,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::GET_USER_RANK, channel, &[("user_id", user_id)], None)
            .await
    }

    /// Reset the current (non all-time) leaderboard.
    pub async fn reset_points_leaderboard(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::RESET_POINTS_LEADERBOARD, channel, &[], None).await
    }

    pub async fn reset_alltime_points_leaderboard(
        &self,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        self.dispatch(&routes::RESET_ALLTIME_POINTS_LEADERBOARD, channel, &[], None)
            .await
    }

    pub async fn get_top_points_users_alltime(
        &self,
        limit: u32,
        offset: u32,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let query = json!({ "limit": limit, "offset": offset });
        self.dispatch(&routes::GET_TOP_POINTS_USERS_ALLTIME, channel, &[], Some(query))
            .await
    }

    pub async fn get_top_points_users(
        &self,
        limit: u32,
        offset: u32,
        channel: Option<&str>,
    ) -> Result<Value, StreamElementsError> {
        let query = json!({ "limit": limit, "offset": offset });
        self.dispatch(&routes::GET_TOP_POINTS_USERS, channel, &[], Some(query))
            .await
    }
}

fn credit_amount(amount: i64) -> String {
    amount.unsigned_abs().to_string()
}

/// Zero stays `0`; there is no negative zero on the wire.
fn debit_amount(amount: i64) -> String {
    match amount.unsigned_abs() {
        0 => "0".to_string(),
        n => format!("-{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_ignores_sign() {
        assert_eq!(credit_amount(5), "5");
        assert_eq!(credit_amount(-5), "5");
        assert_eq!(credit_amount(i64::MIN), "9223372036854775808");
    }

    #[test]
    fn debit_is_always_negative() {
        assert_eq!(debit_amount(5), "-5");
        assert_eq!(debit_amount(-5), "-5");
        assert_eq!(debit_amount(0), "0");
    }
}
