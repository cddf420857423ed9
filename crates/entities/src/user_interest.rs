use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Join table: the interests a profile holds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_interest")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub profile_id: Uuid,
  #[sea_orm(primary_key, auto_increment = false)]
  pub interest_id: Uuid,
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
    belongs_to = "super::interest::Entity",
    from = "Column::InterestId",
    to = "super::interest::Column::Id"
  )]
  Interest,
}

impl Related<super::profile::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Profile.def()
  }
}

impl Related<super::interest::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Interest.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
