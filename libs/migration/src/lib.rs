pub use sea_orm_migration::prelude::*;

mod m20250801_000000_create_events;
mod m20250801_000001_create_teams;
mod m20250801_000002_create_viewers;
mod m20250801_000003_create_client_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000000_create_events::Migration),
            Box::new(m20250801_000001_create_teams::Migration),
            Box::new(m20250801_000002_create_viewers::Migration),
            Box::new(m20250801_000003_create_client_comments::Migration),
        ]
    }
}
