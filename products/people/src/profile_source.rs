//! Remote profile source.
//!
//! The HTTP adapter owns transport concerns only: URL building, timeouts,
//! status mapping and JSON decoding into [`Profile`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::{
    error::{PeopleError, PeopleResult, Source},
    model::Profile,
};

#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn all_profiles(&self) -> PeopleResult<Vec<Profile>>;

    async fn profile_by_id(&self, id: i32) -> PeopleResult<Profile>;
}

/// Profile source backed by a JSONPlaceholder-compatible `/users` API.
#[derive(Clone, Debug)]
pub struct HttpProfileSource {
    client: Client,
    base: Url,
}

impl HttpProfileSource {
    /// Build a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn users_url(&self, id: Option<i32>) -> PeopleResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| PeopleError::Transport {
                message: format!("{} cannot be used as a base url", self.base),
                timed_out: false,
            })?;
            segments.pop_if_empty().push("users");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, id: Option<i32>) -> PeopleResult<T> {
        let mut headers = HeaderMap::new();
        platform_obs::inject_current_context(&mut headers);
        let response = self.client.get(url).headers(headers).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(PeopleError::not_found(Source::ProfileService, id));
            }
        }
        if !status.is_success() {
            return Err(PeopleError::Upstream(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| PeopleError::Decode(err.to_string()))
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    #[instrument(name = "profiles.all", skip_all)]
    async fn all_profiles(&self) -> PeopleResult<Vec<Profile>> {
        let url = self.users_url(None)?;
        self.get_json(url, None).await
    }

    #[instrument(name = "profiles.by_id", skip(self))]
    async fn profile_by_id(&self, id: i32) -> PeopleResult<Profile> {
        let url = self.users_url(Some(id))?;
        self.get_json(url, Some(id)).await
    }
}
