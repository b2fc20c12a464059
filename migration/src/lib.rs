pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_otp_codes_table;
mod m20250301_000003_create_diseases_table;
mod m20250301_000004_seed_diseases;
mod m20250302_000001_create_incidents_table;
mod m20250303_000001_create_sms_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_otp_codes_table::Migration),
            Box::new(m20250301_000003_create_diseases_table::Migration),
            Box::new(m20250301_000004_seed_diseases::Migration),
            Box::new(m20250302_000001_create_incidents_table::Migration),
            Box::new(m20250303_000001_create_sms_tables::Migration),
        ]
    }
}
