//! Concurrent fetch-and-merge over the profile service and the employment
//! store.
//!
//! Both sources are polled inside the caller's future. Whichever fails first
//! short-circuits the join and drops the other call, and dropping the caller's
//! future cancels both.

use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

use tracing::{error, info, instrument, warn};

use crate::{
    employment_store::EmploymentStore,
    error::{PeopleResult, Source},
    model::{CompositeUser, EmploymentRecord, Profile},
    profile_source::ProfileSource,
};

/// How `fetch_all` pairs profiles with employment records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinMode {
    /// Nth profile with Nth record, truncated to the shorter list.
    #[default]
    Positional,
    /// Match on id; profiles without a record are skipped.
    Keyed,
}

impl FromStr for JoinMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positional" | "zip" => Ok(JoinMode::Positional),
            "keyed" | "id" => Ok(JoinMode::Keyed),
            other => Err(format!("unknown join mode `{other}` (use positional|keyed)")),
        }
    }
}

impl fmt::Display for JoinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinMode::Positional => f.write_str("positional"),
            JoinMode::Keyed => f.write_str("keyed"),
        }
    }
}

#[derive(Clone)]
pub struct PersonService {
    profiles: Arc<dyn ProfileSource>,
    employment: Arc<dyn EmploymentStore>,
    mode: JoinMode,
}

impl PersonService {
    pub fn new(profiles: Arc<dyn ProfileSource>, employment: Arc<dyn EmploymentStore>) -> Self {
        Self {
            profiles,
            employment,
            mode: JoinMode::default(),
        }
    }

    pub fn with_join_mode(mut self, mode: JoinMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn join_mode(&self) -> JoinMode {
        self.mode
    }

    #[instrument(name = "people.fetch_all", skip_all, fields(mode = %self.mode))]
    pub async fn fetch_all(&self) -> PeopleResult<Vec<CompositeUser>> {
        let (profiles, records) = tokio::try_join!(
            logged(Source::ProfileService, self.profiles.all_profiles()),
            logged(Source::EmploymentStore, self.employment.all_records()),
        )?;
        Ok(match self.mode {
            JoinMode::Positional => zip_positional(profiles, records),
            JoinMode::Keyed => join_keyed(profiles, records),
        })
    }

    #[instrument(name = "people.fetch_by_id", skip(self))]
    pub async fn fetch_by_id(&self, id: i32) -> PeopleResult<CompositeUser> {
        let (profile, record) = tokio::try_join!(
            logged(Source::ProfileService, self.profiles.profile_by_id(id)),
            logged(Source::EmploymentStore, self.employment.record_by_id(id)),
        )?;
        Ok(CompositeUser::merge(profile, record))
    }
}

async fn logged<T>(
    source: Source,
    call: impl Future<Output = PeopleResult<T>>,
) -> PeopleResult<T> {
    let label = source.call_label();
    match call.await {
        Ok(value) => {
            info!(%source, "{label} call success");
            Ok(value)
        }
        Err(err) => {
            error!(%source, error = %err, "{label} call error");
            Err(err)
        }
    }
}

fn zip_positional(profiles: Vec<Profile>, records: Vec<EmploymentRecord>) -> Vec<CompositeUser> {
    if profiles.len() != records.len() {
        warn!(
            profiles = profiles.len(),
            records = records.len(),
            "source lengths differ; truncating to the shorter"
        );
    }
    profiles
        .into_iter()
        .zip(records)
        .map(|(profile, record)| {
            if profile.id != record.id {
                warn!(
                    profile_id = profile.id,
                    employment_id = record.id,
                    "positional pairing merged mismatched ids"
                );
            }
            CompositeUser::merge(profile, record)
        })
        .collect()
}

fn join_keyed(profiles: Vec<Profile>, records: Vec<EmploymentRecord>) -> Vec<CompositeUser> {
    let by_id: HashMap<i32, EmploymentRecord> =
        records.into_iter().map(|record| (record.id, record)).collect();
    profiles
        .into_iter()
        .filter_map(|profile| match by_id.get(&profile.id) {
            Some(record) => Some(CompositeUser::merge(profile, record.clone())),
            None => {
                warn!(id = profile.id, "no employment record for profile; skipping");
                None
            }
        })
        .collect()
}
