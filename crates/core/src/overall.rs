use sea_orm::DatabaseConnection;
use trailmatch_engine::{OVERALL_WEIGHTS, signal_similarity};
use uuid::Uuid;

use crate::signals;

/// Overall similarity between two specific users, in [-1.0, 1.0].
///
/// The pairwise variant used for one-to-one matching: an outer
/// skill/interest split with the direct/indirect blend nested inside the
/// interest share. A signal whose fetch fails contributes 0 instead of
/// failing the comparison, so the result is always defined.
pub async fn overall_similarity(a: Uuid, b: Uuid, db: &DatabaseConnection) -> f32 {
  let pair = [b];

  let skill = match signals::skill_embeddings(a, &pair, db).await {
    Ok(emb) => signal_similarity(&emb.reference, &emb.candidates[0]),
    Err(err) => {
      tracing::warn!(user_a = %a, user_b = %b, error = %err, "skill similarity degraded to 0");
      0.0
    }
  };

  let (direct, indirect) = match signals::interest_embeddings(a, &pair, db).await {
    Ok((d, i)) => (
      signal_similarity(&d.reference, &d.candidates[0]),
      signal_similarity(&i.reference, &i.candidates[0]),
    ),
    Err(err) => {
      tracing::warn!(user_a = %a, user_b = %b, error = %err, "interest similarity degraded to 0");
      (0.0, 0.0)
    }
  };

  OVERALL_WEIGHTS.combine(skill, direct, indirect)
}
