use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One selectable level of a skill attribute, e.g. `("FITNESS", 2)`.
///
/// `name` is the attribute category; every level of the same category
/// shares it. `numeric_value` is the ordinal position used as the
/// embedding value. Transport preferences live in this catalog too but
/// are excluded from the skill signal by name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "skill_level")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub name: String,
  pub numeric_value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::user_skill::Entity")]
  UserSkill,
}

impl Related<super::user_skill::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::UserSkill.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
