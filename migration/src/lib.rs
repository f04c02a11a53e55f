pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_club_table;
mod m20260810_000002_create_room_table;
mod m20260810_000003_create_meeting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_club_table::Migration),
            Box::new(m20260810_000002_create_room_table::Migration),
            Box::new(m20260810_000003_create_meeting_table::Migration),
        ]
    }
}
