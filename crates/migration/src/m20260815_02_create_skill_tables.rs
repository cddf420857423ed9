use sea_orm_migration::{
  prelude::*,
  schema::{integer, text, uuid},
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
          .table(SkillLevel::Table)
          .if_not_exists()
          .col(uuid(SkillLevel::Id).primary_key())
          .col(text(SkillLevel::Name))
          .col(integer(SkillLevel::NumericValue))
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(UserSkill::Table)
          .if_not_exists()
          .col(uuid(UserSkill::ProfileId))
          .col(uuid(UserSkill::SkillLevelId))
          .primary_key(
            Index::create()
              .col(UserSkill::ProfileId)
              .col(UserSkill::SkillLevelId),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_user_skill_profile")
              .from(UserSkill::Table, UserSkill::ProfileId)
              .to(Profile::Table, Profile::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_user_skill_skill_level")
              .from(UserSkill::Table, UserSkill::SkillLevelId)
              .to(SkillLevel::Table, SkillLevel::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(UserSkill::Table).to_owned())
      .await?;

    manager
      .drop_table(Table::drop().table(SkillLevel::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum SkillLevel {
  Table,

  Id,
  // attribute category, e.g. "FITNESS"; transport options share this catalog
  Name,
  // ordinal position of the level within its category
  NumericValue,
}

#[derive(Iden)]
pub enum UserSkill {
  Table,

  ProfileId,
  SkillLevelId,
}
