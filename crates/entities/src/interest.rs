use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One entry of the global interest catalog.
///
/// `name` is the stable machine name, `display_name` what the UI renders,
/// `category` the coarse grouping the indirect-interest signal counts over.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "interest")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub name: String,
  pub display_name: Option<String>,
  pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::user_interest::Entity")]
  UserInterest,
}

impl Related<super::user_interest::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::UserInterest.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
