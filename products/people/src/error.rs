use std::fmt;

use platform_api::ApiError;
use reqwest::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

pub type PeopleResult<T> = Result<T, PeopleError>;

/// Which side of the join produced a record or a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    ProfileService,
    EmploymentStore,
}

impl Source {
    /// Short label used in call lifecycle log lines.
    pub fn call_label(self) -> &'static str {
        match self {
            Source::ProfileService => "service",
            Source::EmploymentStore => "db",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::ProfileService => f.write_str("profile service"),
            Source::EmploymentStore => f.write_str("employment store"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PeopleError {
    #[error("{origin} has no record for id {id}")]
    NotFound { origin: Source, id: i32 },
    #[error("profile service unreachable: {message}")]
    Transport { message: String, timed_out: bool },
    #[error("profile service responded with {0}")]
    Upstream(StatusCode),
    #[error("malformed profile payload: {0}")]
    Decode(String),
    #[error("employment store failure: {0}")]
    Store(#[from] DbErr),
}

impl PeopleError {
    pub fn not_found(origin: Source, id: i32) -> Self {
        Self::NotFound { origin, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PeopleError::NotFound { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PeopleError::Transport { .. } | PeopleError::Upstream(_)
        )
    }
}

impl From<reqwest::Error> for PeopleError {
    fn from(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let message = if timed_out {
            format!("request timed out: {err}")
        } else {
            err.to_string()
        };
        Self::Transport { message, timed_out }
    }
}

impl From<PeopleError> for ApiError {
    fn from(err: PeopleError) -> Self {
        match err {
            PeopleError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PeopleError::Transport { .. } | PeopleError::Upstream(_) | PeopleError::Decode(_) => {
                ApiError::BadGateway(err.to_string())
            }
            PeopleError::Store(db) => ApiError::internal(db.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode as HttpStatus;

    #[test]
    fn not_found_maps_to_client_visible_404() {
        let api: ApiError = PeopleError::not_found(Source::EmploymentStore, 42).into();
        assert_eq!(api.status(), HttpStatus::NOT_FOUND);
        assert_eq!(
            api.to_string(),
            "resource not found: employment store has no record for id 42"
        );
    }

    #[test]
    fn upstream_failures_map_to_bad_gateway_and_store_to_internal() {
        let api: ApiError = PeopleError::Upstream(StatusCode::SERVICE_UNAVAILABLE).into();
        assert_eq!(api.status(), HttpStatus::BAD_GATEWAY);

        let timed_out = PeopleError::Transport {
            message: "operation timed out".into(),
            timed_out: true,
        };
        let api: ApiError = timed_out.into();
        assert_eq!(api.status(), HttpStatus::BAD_GATEWAY);

        let api: ApiError = PeopleError::Decode("missing field `email`".into()).into();
        assert_eq!(api.status(), HttpStatus::BAD_GATEWAY);

        let api: ApiError = PeopleError::Store(DbErr::Custom("pool closed".into())).into();
        assert_eq!(api.status(), HttpStatus::INTERNAL_SERVER_ERROR);
        assert_eq!(api.to_string(), "internal server error");
    }
}
