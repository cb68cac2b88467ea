use std::{env, time::Duration};

use anyhow::Context as _;

use pager_utils::pagination::PaginationSettings;

const TOKEN_VAR: &str = "DISCORD_TOKEN";
const WAIT_SECS_VAR: &str = "PAGINATION_WAIT_SECS";
const PAGE_FOOTERS_VAR: &str = "PAGINATION_PAGE_FOOTERS";

/// Settings read once at startup.
#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub pagination: PaginationSettings,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let discord_token = lookup(TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .with_context(|| format!("{TOKEN_VAR} must be set"))?;

        let mut pagination = PaginationSettings::default();

        if let Some(raw) = lookup(WAIT_SECS_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| format!("{WAIT_SECS_VAR} must be a positive number of seconds, got `{raw}`"))?;
            pagination.wait_time = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(PAGE_FOOTERS_VAR) {
            pagination.page_number_footers = parse_flag(&raw)
                .with_context(|| format!("{PAGE_FOOTERS_VAR} must be true or false, got `{raw}`"))?;
        }

        Ok(Self {
            discord_token,
            pagination,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
