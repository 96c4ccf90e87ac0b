//! Route table for every StreamElements operation the client exposes.
//!
//! Each route is pure data: a verb, a path template relative to the API
//! root and the kind of payload it carries. Templates use `{name}`
//! placeholders that occupy a whole path segment; `{channel}` is the
//! per-channel account id and falls back to the configured default.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::HttpMethod;
use crate::StreamElementsError;

/// Placeholder name resolved from the channel argument or `accountId`.
pub const CHANNEL: &str = "channel";

/// Everything outside RFC 3986 unreserved characters is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// How the caller-supplied payload of an operation travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// No payload; anything passed is ignored.
    None,
    /// Serialized as the JSON request body.
    Body,
    /// Serialized as URL query parameters; no body is sent.
    Query,
}

/// One remote operation: name, verb, path template and payload kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub payload: Payload,
}

impl Route {
    /// Placeholder names in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder)
    }

    /// Whether the path contains a `{channel}` segment.
    pub fn is_per_channel(&self) -> bool {
        self.placeholders().any(|name| name == CHANNEL)
    }

    /// Substitute placeholders, percent-encoding each value as one segment.
    ///
    /// `channel` must already have the configured default applied. Missing
    /// or empty values are rejected so no template placeholder survives.
    pub fn render(
        &self,
        channel: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<String, StreamElementsError> {
        let mut segments = Vec::new();
        for segment in self.path.split('/') {
            let Some(name) = placeholder(segment) else {
                segments.push(segment.to_string());
                continue;
            };

            let value = if name == CHANNEL {
                channel
                    .filter(|c| !c.is_empty())
                    .ok_or(StreamElementsError::MissingChannel)?
            } else {
                params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .filter(|v| !v.is_empty())
                    .ok_or(StreamElementsError::MissingPathParam(name))?
            };
            segments.push(utf8_percent_encode(value, PATH_SEGMENT).to_string());
        }
        Ok(segments.join("/"))
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Look up a route by its operation name.
pub fn find(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == name)
}

macro_rules! routes {
    ($($ident:ident => $name:literal, $method:ident, $path:literal, $payload:ident;)*) => {
        $(
            pub const $ident: Route = Route {
                name: $name,
                method: HttpMethod::$method,
                path: $path,
                payload: Payload::$payload,
            };
        )*

        /// Every route, in catalog order.
        pub const ROUTES: &[Route] = &[$($ident),*];
    };
}

routes! {
    // activities
    GET_ACTIVITIES => "get_activities", Get, "activities/{channel}", None;
    GET_ACTIVITY => "get_activity", Get, "activities/{channel}/{activity_id}", None;
    REPLAY_ACTIVITY => "replay_activity", Post, "activities/{channel}/{activity_id}/replay", None;

    // bot
    GET_BOT_STATUS => "get_bot_status", Get, "bot/{channel}", None;
    BOT_PART_CHANNEL => "bot_part_channel", Post, "bot/{channel}/part", None;
    BOT_SAY => "bot_say", Post, "bot/{channel}/say", Body;
    BOT_JOIN_CHANNEL => "bot_join_channel", Post, "bot/{channel}/join", None;
    BOT_MUTE => "bot_mute", Post, "bot/{channel}/mute", None;
    BOT_UNMUTE => "bot_unmute", Post, "bot/{channel}/unmute", None;
    GET_BOT_USER_LEVELS => "get_bot_user_levels", Get, "bot/{channel}/levels", None;
    SET_BOT_USER_LEVEL => "set_bot_user_level", Post, "bot/{channel}/levels", Body;
    DELETE_BOT_USER_LEVEL => "delete_bot_user_level", Delete, "bot/{channel}/levels/{username}", Body;

    // bot commands
    GET_BOT_COMMANDS => "get_bot_commands", Get, "bot/commands/{channel}", None;
    CREATE_BOT_COMMAND => "create_bot_command", Post, "bot/commands/{channel}", Body;
    GET_DEFAULT_BOT_COMMANDS => "get_default_bot_commands", Get, "bot/commands/{channel}/default", None;
    UPDATE_DEFAULT_BOT_COMMAND => "update_default_bot_command", Put, "bot/commands/{channel}/default/{command_id}", Body;
    GET_BOT_COMMAND => "get_bot_command", Get, "bot/commands/{channel}/{command_id}", None;
    UPDATE_BOT_COMMAND => "update_bot_command", Put, "bot/commands/{channel}/{command_id}", Body;
    DELETE_BOT_COMMAND => "delete_bot_command", Delete, "bot/commands/{channel}/{command_id}", None;

    // bot timers
    GET_BOT_TIMERS => "get_bot_timers", Get, "bot/timers/{channel}", None;
    CREATE_BOT_TIMER => "create_bot_timer", Post, "bot/timers/{channel}", Body;
    GET_BOT_TIMER => "get_bot_timer", Get, "bot/timers/{channel}/{timer_id}", None;
    UPDATE_BOT_TIMER => "update_bot_timer", Put, "bot/timers/{channel}/{timer_id}", Body;
    DELETE_BOT_TIMER => "delete_bot_timer", Delete, "bot/timers/{channel}/{timer_id}", None;

    // changelogs
    GET_LATEST_CHANGELOG => "get_latest_changelog", Get, "changelogs/latest", None;
    GET_FIRST_CHANGELOG => "get_first_changelog", Get, "changelogs/first", None;

    // channels
    GET_CURRENT_CHANNEL => "get_current_channel", Get, "channels/me", None;
    GET_CHANNEL => "get_channel", Get, "channels/{channel}", None;
    GET_CHANNEL_EMOTES => "get_channel_emotes", Get, "channels/{channel}/emotes", None;
    GET_CHANNEL_DETAILS => "get_channel_details", Get, "channels/{channel}/details", None;
    UPDATE_CHANNEL_PROFILE => "update_channel_profile", Put, "channels/{channel}/profile", Body;
    GET_CHANNEL_USERS => "get_channel_users", Get, "channels/{channel}/users", None;
    UPDATE_USER_ACCESS_LEVEL => "update_user_access_level", Put, "channels/{channel}/users/{user_id}", Body;
    DELETE_USER_ACCESS => "delete_user_access", Delete, "channels/{channel}/users/{user_id}", None;
    ROLEPLAY_AS_USER => "roleplay_as_user", Post, "channels/{channel}/roleplay", None;

    // contests
    GET_CONTESTS => "get_contests", Get, "contests/{channel}", None;
    CREATE_CONTEST => "create_contest", Post, "contests/{channel}", Body;
    GET_COMPLETED_CONTESTS => "get_completed_contests", Get, "contests/{channel}/history", None;
    GET_CONTEST => "get_contest", Get, "contests/{channel}/{contest_id}", None;
    UPDATE_CONTEST => "update_contest", Put, "contests/{channel}/{contest_id}", Body;
    DELETE_CONTEST => "delete_contest", Delete, "contests/{channel}/{contest_id}", None;
    CREATE_CONTEST_BET => "create_contest_bet", Post, "contests/{channel}/{contest_id}/bet", Body;
    GET_CONTEST_BET => "get_contest_bet", Get, "contests/{channel}/{contest_id}/bet", None;
    START_CONTEST => "start_contest", Put, "contests/{channel}/{contest_id}/start", None;
    SET_CONTEST_WINNER => "set_contest_winner", Put, "contests/{channel}/{contest_id}/winner", Body;
    REFUND_CONTEST => "refund_contest", Delete, "contests/{channel}/{contest_id}/refund", None;
    CLOSE_CONTEST => "close_contest", Delete, "contests/{channel}/{contest_id}/stop", None;

    // giveaways
    GET_GIVEAWAYS => "get_giveaways", Get, "giveaways/{channel}", None;
    CREATE_GIVEAWAY => "create_giveaway", Post, "giveaways/{channel}", Body;
    GET_PAST_GIVEAWAYS => "get_past_giveaways", Get, "giveaways/{channel}/history", None;
    GET_GIVEAWAY => "get_giveaway", Get, "giveaways/{channel}/{giveaway_id}", None;
    BUY_GIVEAWAY_TICKETS => "buy_giveaway_tickets", Post, "giveaways/{channel}/{giveaway_id}", Body;
    UPDATE_GIVEAWAY => "update_giveaway", Put, "giveaways/{channel}/{giveaway_id}", Body;
    DELETE_GIVEAWAY => "delete_giveaway", Delete, "giveaways/{channel}/{giveaway_id}", None;
    GET_USER_GIVEAWAY_STATUS => "get_user_giveaway_status", Get, "giveaways/{channel}/{giveaway_id}/joined", None;
    COMPLETE_GIVEAWAY => "complete_giveaway", Put, "giveaways/{channel}/{giveaway_id}/complete", None;
    REFUND_GIVEAWAY => "refund_giveaway", Delete, "giveaways/{channel}/{giveaway_id}/refund", None;
    CLOSE_GIVEAWAY => "close_giveaway", Delete, "giveaways/{channel}/{giveaway_id}/close", None;

    // logs
    GET_LOGS => "get_logs", Get, "logs/{channel}", None;

    // loyalty
    GET_LOYALTY_SETTINGS => "get_loyalty_settings", Get, "loyalty/{channel}", None;
    UPDATE_LOYALTY_SETTINGS => "update_loyalty_settings", Put, "loyalty/{channel}", Body;

    // overlays
    GET_OVERLAYS => "get_overlays", Get, "overlays/{channel}", None;
    CREATE_OVERLAY => "create_overlay", Post, "overlays/{channel}", Body;
    GET_OVERLAY => "get_overlay", Get, "overlays/{channel}/{overlay_id}", None;
    UPDATE_OVERLAY => "update_overlay", Put, "overlays/{channel}/{overlay_id}", Body;
    DELETE_OVERLAY => "delete_overlay", Delete, "overlays/{channel}/{overlay_id}", None;

    // points
    UPDATE_POINTS => "update_points", Put, "points/{channel}", Body;
    GET_USER_POINTS => "get_user_points", Get, "points/{channel}/{user_id}", None;
    DELETE_USER_POINTS => "delete_user_points", Delete, "points/{channel}/{user_id}", None;
    ADD_USER_POINTS => "add_user_points", Put, "points/{channel}/{user_id}/{amount}", None;
    REMOVE_USER_POINTS => "remove_user_points", Put, "points/{channel}/{user_id}/{amount}", None;
    GET_USER_RANK => "get_user_rank", Get, "points/{channel}/{user_id}/rank", None;
    RESET_POINTS_LEADERBOARD => "reset_points_leaderboard", Delete, "points/{channel}/reset/current", None;
    RESET_ALLTIME_POINTS_LEADERBOARD => "reset_alltime_points_leaderboard", Delete, "points/{channel}/reset/alltime", None;
    GET_TOP_POINTS_USERS_ALLTIME => "get_top_points_users_alltime", Get, "points/{channel}/alltime", Query;
    GET_TOP_POINTS_USERS => "get_top_points_users", Get, "points/{channel}/top", Query;

    // sessions
    GET_USER_SESSION_DATA => "get_user_session_data", Get, "sessions/{channel}", None;
    UPDATE_USER_SESSION_DATA => "update_user_session_data", Put, "sessions/{channel}", Body;
    RESET_USER_SESSION_DATA => "reset_user_session_data", Put, "sessions/{channel}/reset", None;
    RELOAD_USER_SESSION_DATA => "reload_user_session_data", Put, "sessions/{channel}/reload", None;

    // song requests
    GET_SONG_REQUEST_SETTINGS => "get_song_request_settings", Get, "songrequest/{channel}/settings", None;
    UPDATE_SONG_REQUEST_SETTINGS => "update_song_request_settings", Put, "songrequest/{channel}/settings", Body;
    GET_PUBLIC_SONG_REQUEST_SETTINGS => "get_public_song_request_settings", Get, "songrequest/{channel}/public", None;
    GET_SONG_REQUEST_QUEUE => "get_song_request_queue", Get, "songrequest/{channel}/queue", None;
    CREATE_SONG_REQUEST => "create_song_request", Post, "songrequest/{channel}/queue", Body;
    GET_SONG_REQUEST_HISTORY => "get_song_request_history", Get, "songrequest/{channel}/queue/history", None;
    SKIP_CURRENT_SONG => "skip_current_song", Delete, "songrequest/{channel}/queue/skip", None;
    DELETE_SONG_REQUEST => "delete_song_request", Delete, "songrequest/{channel}/queue/{song_id}", None;
    CLEAR_SONG_REQUEST_QUEUE => "clear_song_request_queue", Delete, "songrequest/{channel}/clear", None;
    GET_CURRENT_SONG => "get_current_song", Get, "songrequest/{channel}/playing", None;

    // speech
    GENERATE_SPEECH => "generate_speech", Get, "speech", Query;
    GET_SPEECH_VOICES => "get_speech_voices", Get, "speech/voices", None;

    // stats
    GET_DAILY_STATS => "get_daily_stats", Get, "stats/{channel}/daily", None;
    GET_MONTHLY_STATS => "get_monthly_stats", Get, "stats/{channel}/monthly", None;

    // store
    GET_STORE_ITEMS => "get_store_items", Get, "store/{channel}/items", None;
    CREATE_STORE_ITEM => "create_store_item", Post, "store/{channel}/items", Body;
    GET_STORE_ITEM => "get_store_item", Get, "store/{channel}/items/{item_id}", None;
    UPDATE_STORE_ITEM => "update_store_item", Put, "store/{channel}/items/{item_id}", Body;
    DELETE_STORE_ITEM => "delete_store_item", Delete, "store/{channel}/items/{item_id}", None;
    GET_STORE_REDEMPTIONS => "get_store_redemptions", Get, "store/{channel}/redemptions", Query;
    GET_STORE_REDEMPTION => "get_store_redemption", Get, "store/{channel}/redemptions/{redemption_id}", None;
    UPDATE_STORE_REDEMPTION => "update_store_redemption", Put, "store/{channel}/redemptions/{redemption_id}", Body;
    DELETE_STORE_REDEMPTION => "delete_store_redemption", Delete, "store/{channel}/redemptions/{redemption_id}", Body;
    CREATE_STORE_REDEMPTION => "create_store_redemption", Post, "store/{channel}/redemptions/{item_id}", None;

    // streams
    GET_STREAMS => "get_streams", Get, "streams/{channel}", None;
    GET_STREAM_STATUS => "get_stream_status", Get, "streams/{channel}/live", None;
    GET_STREAM_DETAILS => "get_stream_details", Get, "streams/{channel}/{stream_id}", None;

    // themes
    GET_THEMES => "get_themes", Get, "themes", None;
    GET_THEME => "get_theme", Get, "themes/{theme_id}", None;
    CREATE_OVERLAY_FROM_THEME => "create_overlay_from_theme", Post, "themes/{theme_id}", Body;
    RATE_THEME => "rate_theme", Post, "themes/{theme_id}/rate", Body;
    GET_THEME_RATING_FOR_CHANNEL => "get_theme_rating_for_channel", Get, "themes/{theme_id}/{channel}/rating", None;

    // tipping
    GET_TIPPING_EXCHANGE_RATES => "get_tipping_exchange_rates", Get, "tipping/rates", None;
    GET_TIPPING_SETTINGS => "get_tipping_settings", Get, "tipping/{channel}", None;
    UPDATE_TIPPING_SETTINGS => "update_tipping_settings", Put, "tipping/{channel}", Body;

    // tips
    GET_TIPS => "get_tips", Get, "tips/{channel}", None;
    CREATE_TIP => "create_tip", Post, "tips/{channel}", Body;
    GET_TOP_TIPPERS => "get_top_tippers", Get, "tips/{channel}/top", None;
    GET_TIP_LEADERBOARD => "get_tip_leaderboard", Get, "tips/{channel}/leaderboard", None;
    GET_RECENT_TIPS => "get_recent_tips", Get, "tips/{channel}/moderation", None;
    GET_TIP => "get_tip", Get, "tips/{channel}/{tip_id}", None;
    UPDATE_TIP => "update_tip", Put, "tips/{channel}/{tip_id}", Body;
    DELETE_TIP => "delete_tip", Delete, "tips/{channel}/{tip_id}", None;

    // uploads
    GET_ASSETS => "get_assets", Get, "uploads/{channel}", None;
    DELETE_ASSET => "delete_asset", Delete, "uploads/{channel}/{asset_id}", None;

    // users
    GET_CURRENT_USER => "get_current_user", Get, "users/current", None;
    GET_USER_CHANNELS => "get_user_channels", Get, "users/channels", None;
    GET_CHANNEL_ACCESS => "get_channel_access", Get, "users/access", None;
}
