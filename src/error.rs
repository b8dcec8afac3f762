use thiserror::Error;

use crate::core::MealSlot;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Plan(#[from] PlanError),

    #[error("{0}")]
    Chat(#[from] ChatError),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Missing {name}: set it in the config file or the {env} environment variable")]
    MissingSetting {
        name: &'static str,
        env: &'static str,
    },

    #[error("Missing day relation id for {day} (set [days] {day_key} in the config file)", day_key = .day.to_lowercase())]
    MissingDay { day: &'static str },

    #[error("Day relation id {id} is configured for both {first} and {second}")]
    DuplicateDayId {
        id: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Command prefix must not be empty")]
    EmptyPrefix,
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Notion returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode Notion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No recipe snapshot at {path}; run once without --offline first")]
    SnapshotMissing { path: String },

    #[error("Recipe snapshot {path}: {source}")]
    SnapshotIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("The {0} store is read-only")]
    ReadOnly(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum PlanError {
    #[error(
        "Not enough {slot} recipes: {available} available after removing this week's other picks, {required} needed"
    )]
    InsufficientCandidates {
        slot: MealSlot,
        available: usize,
        required: usize,
    },
}

#[derive(Debug, Error)]
pub(crate) enum ChatError {
    #[error("Failed to post to chat webhook: {0}")]
    Webhook(#[source] ureq::Error),

    #[error("Chat webhook returned HTTP {status}")]
    WebhookStatus { status: u16 },

    #[error("--post requires a webhook URL (config webhook_url or DISCORD_WEBHOOK_URL)")]
    NoWebhook,
}
