use async_trait::async_trait;
use entity::employment_details;
use platform_db::DbPool;
use sea_orm::{EntityTrait, QueryOrder};
use tracing::instrument;

use crate::{
    error::{PeopleError, PeopleResult, Source},
    model::EmploymentRecord,
};

#[async_trait]
pub trait EmploymentStore: Send + Sync {
    async fn all_records(&self) -> PeopleResult<Vec<EmploymentRecord>>;

    async fn record_by_id(&self, id: i32) -> PeopleResult<EmploymentRecord>;
}

#[derive(Clone, Debug)]
pub struct SeaOrmEmploymentStore {
    pool: DbPool,
}

impl SeaOrmEmploymentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmploymentStore for SeaOrmEmploymentStore {
    // Ordered by id so positional pairing is stable across calls.
    #[instrument(name = "employment.all", skip_all)]
    async fn all_records(&self) -> PeopleResult<Vec<EmploymentRecord>> {
        let rows = employment_details::Entity::find()
            .order_by_asc(employment_details::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(EmploymentRecord::from).collect())
    }

    #[instrument(name = "employment.by_id", skip(self))]
    async fn record_by_id(&self, id: i32) -> PeopleResult<EmploymentRecord> {
        employment_details::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .map(EmploymentRecord::from)
            .ok_or_else(|| PeopleError::not_found(Source::EmploymentStore, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use platform_db::{DatabaseSettings, connect, upsert_employment_details};

    async fn seeded_store(rows: &[employment_details::Model]) -> SeaOrmEmploymentStore {
        let settings = DatabaseSettings::new("UNSET_PEOPLE_TEST_URL")
            .with_fallback("sqlite::memory:")
            .with_max_connections(1);
        let pool = connect(&settings).await.unwrap();
        Migrator::up(&pool, None).await.unwrap();
        upsert_employment_details(&pool, rows).await.unwrap();
        SeaOrmEmploymentStore::new(pool)
    }

    fn row(id: i32, designation: &str, salary: i32) -> employment_details::Model {
        employment_details::Model {
            id,
            designation: designation.into(),
            salary,
        }
    }

    #[tokio::test]
    async fn lists_rows_in_id_order() {
        let store = seeded_store(&[row(3, "Architect", 160_000), row(1, "Engineer", 90_000)]).await;
        let records = store.all_records().await.unwrap();
        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(records[0].designation, "Engineer");
    }

    #[tokio::test]
    async fn finds_single_row_or_reports_not_found() {
        let store = seeded_store(&[row(1, "Engineer", 90_000)]).await;

        let found = store.record_by_id(1).await.unwrap();
        assert_eq!(found.salary, 90_000);

        let err = store.record_by_id(2).await.unwrap_err();
        assert!(matches!(
            err,
            PeopleError::NotFound {
                origin: Source::EmploymentStore,
                id: 2
            }
        ));
    }
}
