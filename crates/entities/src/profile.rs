use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A registered user. The id is minted by the account system; this table
/// only carries what the matching pipeline and the profile card need.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub display_name: String,
  pub bio: Option<String>,
  pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::user_skill::Entity")]
  UserSkill,
  #[sea_orm(has_many = "super::user_interest::Entity")]
  UserInterest,
}

impl Related<super::user_skill::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::UserSkill.def()
  }
}

impl Related<super::user_interest::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::UserInterest.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
