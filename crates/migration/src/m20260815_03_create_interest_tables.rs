use sea_orm_migration::{
  prelude::*,
  schema::{text, text_null, uuid},
};

use super::m20260815_01_create_profile_table::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Interest::Table)
          .if_not_exists()
          .col(uuid(Interest::Id).primary_key())
          .col(text(Interest::Name))
          .col(text_null(Interest::DisplayName))
          .col(text(Interest::Category))
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(UserInterest::Table)
          .if_not_exists()
          .col(uuid(UserInterest::ProfileId))
          .col(uuid(UserInterest::InterestId))
          .primary_key(
            Index::create()
              .col(UserInterest::ProfileId)
              .col(UserInterest::InterestId),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_user_interest_profile")
              .from(UserInterest::Table, UserInterest::ProfileId)
              .to(Profile::Table, Profile::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_user_interest_interest")
              .from(UserInterest::Table, UserInterest::InterestId)
              .to(Interest::Table, Interest::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(UserInterest::Table).to_owned())
      .await?;

    manager
      .drop_table(Table::drop().table(Interest::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Interest {
  Table,

  Id,
  // stable machine name, e.g. "trail_running"
  Name,
  // what the UI renders
  DisplayName,
  // coarse grouping the indirect-interest signal counts over
  Category,
}

#[derive(Iden)]
pub enum UserInterest {
  Table,

  ProfileId,
  InterestId,
}
