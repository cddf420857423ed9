use sea_orm_migration::{
  prelude::*,
  schema::{text, timestamp_with_time_zone, uuid},
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
          .table(UserSwipe::Table)
          .if_not_exists()
          .col(uuid(UserSwipe::Id).primary_key())
          .col(uuid(UserSwipe::SenderId))
          .col(uuid(UserSwipe::ReceiverId))
          .col(text(UserSwipe::Action))
          .col(
            timestamp_with_time_zone(UserSwipe::CreatedAt).default(Expr::current_timestamp()),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_user_swipe_sender")
              .from(UserSwipe::Table, UserSwipe::SenderId)
              .to(Profile::Table, Profile::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_user_swipe_receiver")
              .from(UserSwipe::Table, UserSwipe::ReceiverId)
              .to(Profile::Table, Profile::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    // One verdict per (sender, receiver) pair; doubles as the lookup
    // index for a sender's swipe history.
    manager
      .create_index(
        Index::create()
          .name("idx_user_swipe_sender_receiver")
          .table(UserSwipe::Table)
          .col(UserSwipe::SenderId)
          .col(UserSwipe::ReceiverId)
          .unique()
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(UserSwipe::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum UserSwipe {
  Table,

  Id,
  SenderId,
  ReceiverId,
  // "like" | "dislike"
  Action,
  CreatedAt,
}
