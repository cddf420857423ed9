use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Join table: the skill levels a profile selected, one row per selection.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_skill")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub profile_id: Uuid,
  #[sea_orm(primary_key, auto_increment = false)]
  pub skill_level_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::profile::Entity",
    from = "Column::ProfileId",
    to = "super::profile::Column::Id"
  )]
  Profile,
  #[sea_orm(
    belongs_to = "super::skill_level::Entity",
    from = "Column::SkillLevelId",
    to = "super::skill_level::Column::Id"
  )]
  SkillLevel,
}

impl Related<super::profile::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Profile.def()
  }
}

impl Related<super::skill_level::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::SkillLevel.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
