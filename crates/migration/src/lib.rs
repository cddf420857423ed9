pub use sea_orm_migration::*;

mod m20260815_01_create_profile_table;
mod m20260815_02_create_skill_tables;
mod m20260815_03_create_interest_tables;
mod m20260815_04_create_user_swipe_table;
mod m20260815_05_seed_attribute_catalogs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260815_01_create_profile_table::Migration),
      Box::new(m20260815_02_create_skill_tables::Migration),
      Box::new(m20260815_03_create_interest_tables::Migration),
      Box::new(m20260815_04_create_user_swipe_table::Migration),
      Box::new(m20260815_05_seed_attribute_catalogs::Migration),
    ]
  }
}
