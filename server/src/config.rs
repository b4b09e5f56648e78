use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use products_people::JoinMode;
use reqwest::Url;

const DEFAULT_PROFILE_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_PROFILE_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub profile_source_url: Url,
    pub profile_timeout: Duration,
    pub request_timeout: Duration,
    pub join_mode: JoinMode,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url =
            lookup("PROFILE_SOURCE_URL").unwrap_or_else(|| DEFAULT_PROFILE_SOURCE_URL.into());
        let profile_source_url = Url::parse(raw_url.trim())
            .with_context(|| format!("invalid PROFILE_SOURCE_URL {raw_url}"))?;
        if profile_source_url.cannot_be_a_base() {
            return Err(anyhow!("PROFILE_SOURCE_URL must be an http(s) base url"));
        }

        let profile_timeout = millis(
            &lookup,
            "PROFILE_SOURCE_TIMEOUT_MS",
            DEFAULT_PROFILE_TIMEOUT_MS,
        )?;
        let request_timeout = millis(&lookup, "REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;

        let join_mode = match lookup("PERSON_JOIN_MODE") {
            Some(raw) => raw
                .parse::<JoinMode>()
                .map_err(|err| anyhow!("invalid PERSON_JOIN_MODE: {err}"))?,
            None => JoinMode::default(),
        };

        Ok(Self {
            profile_source_url,
            profile_timeout,
            request_timeout,
            join_mode,
        })
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<Duration> {
    let Some(raw) = lookup(key) else {
        return Ok(Duration::from_millis(default));
    };
    let value = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of milliseconds"))?;
    if value == 0 {
        return Err(anyhow!("{key} must be greater than zero"));
    }
    Ok(Duration::from_millis(value))
}
