//! People slice: joins remote user profiles with locally stored employment
//! details into a single composite record.

pub mod employment_store;
pub mod error;
pub mod model;
pub mod profile_source;
pub mod service;

#[cfg(test)]
pub(crate) mod fixtures;

pub use employment_store::{EmploymentStore, SeaOrmEmploymentStore};
pub use error::{PeopleError, PeopleResult, Source};
pub use model::{Address, Company, CompositeUser, EmploymentRecord, Geo, Profile};
pub use profile_source::{HttpProfileSource, ProfileSource};
pub use service::{JoinMode, PersonService};
