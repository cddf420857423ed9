use sea_orm_migration::{
  prelude::*,
  schema::{text, text_null, timestamp_with_time_zone, uuid},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Profile::Table)
          .if_not_exists()
          .col(uuid(Profile::Id).primary_key())
          .col(text(Profile::DisplayName))
          .col(text_null(Profile::Bio))
          .col(
            timestamp_with_time_zone(Profile::CreatedAt).default(Expr::current_timestamp()),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Profile::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Profile {
  Table,

  Id, // uuid, minted by the account system
  DisplayName,
  Bio,
  CreatedAt,
}
