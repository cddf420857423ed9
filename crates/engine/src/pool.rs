use std::collections::HashSet;

use uuid::Uuid;

/// Filter the known-profile list down to the candidates eligible for
/// ranking: never the requester, never a profile the requester already
/// swiped on (liked or disliked). Input order is preserved.
#[must_use]
pub fn eligible_candidates(
  candidates: Vec<Uuid>,
  requester: Uuid,
  swiped: &HashSet<Uuid>,
) -> Vec<Uuid> {
  candidates
    .into_iter()
    .filter(|id| *id != requester && !swiped.contains(id))
    .collect()
}
