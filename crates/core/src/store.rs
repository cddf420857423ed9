use std::collections::HashSet;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use trailmatch_entities::{interest, profile, skill_level, user_interest, user_skill, user_swipe};
use trailmatch_shared::AppError;
use uuid::Uuid;

/// All known profile ids except the requester, in id order.
///
/// The order is arbitrary but stable, so ties in the ranker resolve the
/// same way on every call.
pub async fn candidate_profile_ids(
  requester: Uuid,
  db: &DatabaseConnection,
) -> Result<Vec<Uuid>, AppError> {
  let profiles = profile::Entity::find()
    .filter(profile::Column::Id.ne(requester))
    .order_by_asc(profile::Column::Id)
    .all(db)
    .await?;

  Ok(profiles.into_iter().map(|p| p.id).collect())
}

/// Ids of every profile the sender has swiped on, likes and dislikes
/// alike.
pub async fn swiped_receiver_ids(
  sender: Uuid,
  db: &DatabaseConnection,
) -> Result<HashSet<Uuid>, AppError> {
  let swipes = user_swipe::Entity::find()
    .filter(user_swipe::Column::SenderId.eq(sender))
    .all(db)
    .await?;

  Ok(swipes.into_iter().map(|s| s.receiver_id).collect())
}

/// The full skill-level catalog, transport rows included. Exclusion is
/// the signal layer's policy, not the store's.
pub async fn skill_levels(db: &DatabaseConnection) -> Result<Vec<skill_level::Model>, AppError> {
  Ok(skill_level::Entity::find().all(db).await?)
}

/// Skill selections of every listed profile, fetched in one query.
pub async fn user_skill_rows(
  profile_ids: &[Uuid],
  db: &DatabaseConnection,
) -> Result<Vec<user_skill::Model>, AppError> {
  Ok(
    user_skill::Entity::find()
      .filter(user_skill::Column::ProfileId.is_in(profile_ids.iter().copied()))
      .all(db)
      .await?,
  )
}

/// The full interest catalog in id order. This is the canonical slot
/// order every direct-interest embedding of one request shares.
pub async fn interests(db: &DatabaseConnection) -> Result<Vec<interest::Model>, AppError> {
  Ok(
    interest::Entity::find()
      .order_by_asc(interest::Column::Id)
      .all(db)
      .await?,
  )
}

/// Held interests of every listed profile, fetched in one query.
pub async fn user_interest_rows(
  profile_ids: &[Uuid],
  db: &DatabaseConnection,
) -> Result<Vec<user_interest::Model>, AppError> {
  Ok(
    user_interest::Entity::find()
      .filter(user_interest::Column::ProfileId.is_in(profile_ids.iter().copied()))
      .all(db)
      .await?,
  )
}
