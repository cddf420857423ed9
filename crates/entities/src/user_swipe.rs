use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A recorded verdict: `sender` swiped on `receiver`.
///
/// Uniqueness over (sender, receiver) is enforced by the schema; a profile
/// gets exactly one verdict per counterpart and leaves the sender's
/// candidate pool either way.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_swipe")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub sender_id: Uuid,
  pub receiver_id: Uuid,
  pub action: SwipeAction,
  pub created_at: DateTimeWithTimeZone,
}

#[derive(
  Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, strum::Display,
  strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase")]
pub enum SwipeAction {
  #[sea_orm(string_value = "like")]
  Like,
  #[sea_orm(string_value = "dislike")]
  Dislike,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::profile::Entity",
    from = "Column::SenderId",
    to = "super::profile::Column::Id"
  )]
  Sender,
  #[sea_orm(
    belongs_to = "super::profile::Entity",
    from = "Column::ReceiverId",
    to = "super::profile::Column::Id"
  )]
  Receiver,
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use sea_orm::ActiveEnum;

  use super::*;

  #[test]
  fn swipe_action_maps_to_db_strings() {
    assert_eq!(SwipeAction::Like.to_value(), "like");
    assert_eq!(SwipeAction::Dislike.to_value(), "dislike");
  }

  #[test]
  fn swipe_action_round_trips_through_display() {
    assert_eq!(SwipeAction::Like.to_string(), "like");
    assert_eq!(SwipeAction::from_str("dislike").ok(), Some(SwipeAction::Dislike));
  }
}
