use sea_orm_migration::prelude::*;

// Plain ANSI types so the same statement runs on Postgres and SQLite.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS employment_details (
    id integer PRIMARY KEY,
    designation varchar(255) NOT NULL,
    salary integer NOT NULL
);
"#;

const DOWN_SQL: &str = "DROP TABLE IF EXISTS employment_details";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(UP_SQL)
            .await
            .map(|_| ())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DOWN_SQL)
            .await
            .map(|_| ())
    }
}
