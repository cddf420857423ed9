use axum::{
  Json,
  extract::{Path, State},
};
use serde::Serialize;
use trailmatch_shared::AppError;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct Recommendations {
  /// Up to ten profile ids, best match first
  pub recommended_user_ids: Vec<Uuid>,
}

/// Recommend hiking partners for a user.
///
/// Ranks every profile the user has not swiped on by weighted skill and
/// interest similarity. Unknown users are not an error: they hold no
/// signals and simply get the neutral ranking.
#[utoipa::path(
  get,
  path = "/api/v0/recommendations/{user_id}",
  params(
    ("user_id" = Uuid, Path, description = "Profile id of the requesting user")
  ),
  responses(
    (status = 200, description = "Ranked candidate ids, best match first", body = Recommendations),
  )
)]
#[axum::debug_handler]
pub async fn recommendations(
  State(state): State<AppState>,
  Path(user_id): Path<Uuid>,
) -> Result<Json<Recommendations>, AppError> {
  let recommended_user_ids = trailmatch_core::recommendations(user_id, &state.db).await?;

  tracing::debug!(
    user_id = %user_id,
    count = recommended_user_ids.len(),
    "served recommendations"
  );

  Ok(Json(Recommendations {
    recommended_user_ids,
  }))
}
