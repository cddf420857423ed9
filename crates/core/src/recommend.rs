use sea_orm::DatabaseConnection;
use trailmatch_engine::{
  RANKING_WEIGHTS, RECOMMENDATION_LIMIT, eligible_candidates, rank_top_k, signal_similarity_batch,
};
use trailmatch_shared::AppError;
use uuid::Uuid;

use crate::signals;
use crate::store;

/// Rank every eligible profile against the requester and return the top
/// [`RECOMMENDATION_LIMIT`] ids, best match first.
///
/// Pool derivation failures propagate. A failed per-signal fetch degrades
/// that signal to 0 for the whole batch instead, so a flaky attribute
/// table can not take the endpoint down.
pub async fn recommendations(
  user_id: Uuid,
  db: &DatabaseConnection,
) -> Result<Vec<Uuid>, AppError> {
  let known = store::candidate_profile_ids(user_id, db).await?;
  let swiped = store::swiped_receiver_ids(user_id, db).await?;
  let pool = eligible_candidates(known, user_id, &swiped);

  if pool.is_empty() {
    tracing::debug!(user_id = %user_id, "no eligible candidates to rank");
    return Ok(Vec::new());
  }

  let skill_scores = match signals::skill_embeddings(user_id, &pool, db).await {
    Ok(emb) => signal_similarity_batch(&emb.reference, &emb.candidates),
    Err(err) => {
      tracing::warn!(user_id = %user_id, error = %err, "skill signal degraded to 0");
      vec![0.0; pool.len()]
    }
  };

  let (direct_scores, indirect_scores) =
    match signals::interest_embeddings(user_id, &pool, db).await {
      Ok((direct, indirect)) => (
        signal_similarity_batch(&direct.reference, &direct.candidates),
        signal_similarity_batch(&indirect.reference, &indirect.candidates),
      ),
      Err(err) => {
        tracing::warn!(user_id = %user_id, error = %err, "interest signals degraded to 0");
        (vec![0.0; pool.len()], vec![0.0; pool.len()])
      }
    };

  let scores: Vec<f32> = (0..pool.len())
    .map(|i| RANKING_WEIGHTS.aggregate(skill_scores[i], direct_scores[i], indirect_scores[i]))
    .collect();

  tracing::debug!(user_id = %user_id, pool = pool.len(), "ranked candidate pool");

  Ok(rank_top_k(&pool, &scores, RECOMMENDATION_LIMIT))
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use sea_orm::{DatabaseBackend, MockDatabase};
  use trailmatch_entities::{
    SwipeAction, interest, profile, skill_level, user_interest, user_skill, user_swipe,
  };

  use super::*;

  const REQUESTER: Uuid = Uuid::from_u128(900);
  const ALIKE: Uuid = Uuid::from_u128(1);
  const SWIPED: Uuid = Uuid::from_u128(2);
  const OTHER: Uuid = Uuid::from_u128(3);

  fn profile_row(id: Uuid) -> profile::Model {
    profile::Model {
      id,
      display_name: "hiker".to_owned(),
      bio: None,
      created_at: Utc::now().into(),
    }
  }

  fn swipe_row(sender: Uuid, receiver: Uuid) -> user_swipe::Model {
    user_swipe::Model {
      id: Uuid::from_u128(7000),
      sender_id: sender,
      receiver_id: receiver,
      action: SwipeAction::Dislike,
      created_at: Utc::now().into(),
    }
  }

  fn level_row(id: u128, name: &str, value: i32) -> skill_level::Model {
    skill_level::Model {
      id: Uuid::from_u128(id),
      name: name.to_owned(),
      numeric_value: value,
    }
  }

  fn skill_row(profile: Uuid, level: u128) -> user_skill::Model {
    user_skill::Model {
      profile_id: profile,
      skill_level_id: Uuid::from_u128(level),
    }
  }

  fn interest_row(id: u128, category: &str) -> interest::Model {
    interest::Model {
      id: Uuid::from_u128(id),
      name: format!("interest-{id}"),
      display_name: None,
      category: category.to_owned(),
    }
  }

  fn held_row(profile: Uuid, interest: u128) -> user_interest::Model {
    user_interest::Model {
      profile_id: profile,
      interest_id: Uuid::from_u128(interest),
    }
  }

  /// Catalog used across tests: three categories with levels 1..=3 each,
  /// plus the transport rows the skill signal must ignore.
  fn level_catalog() -> Vec<skill_level::Model> {
    vec![
      level_row(101, "ENDURANCE", 1),
      level_row(102, "ENDURANCE", 2),
      level_row(103, "ENDURANCE", 3),
      level_row(111, "FITNESS", 1),
      level_row(112, "FITNESS", 2),
      level_row(113, "FITNESS", 3),
      level_row(121, "NAVIGATION", 1),
      level_row(122, "NAVIGATION", 2),
      level_row(123, "NAVIGATION", 3),
      level_row(131, "CAR", 0),
      level_row(132, "PUBLIC_TRANSPORT", 0),
      level_row(133, "BOTH", 0),
    ]
  }

  #[tokio::test]
  async fn empty_pool_returns_no_recommendations() {
    // Queries run in a fixed order: profiles, then swipes. No further
    // queries are mocked, so reaching the signal fetches would error.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
      .append_query_results([Vec::<profile::Model>::new()])
      .append_query_results([Vec::<user_swipe::Model>::new()])
      .into_connection();

    let result = recommendations(REQUESTER, &db).await.unwrap();
    assert_eq!(result, Vec::<Uuid>::new());
  }

  #[tokio::test]
  async fn ranks_similar_profiles_first_and_drops_swiped_ones() {
    // REQUESTER and ALIKE share skills (E=3, F=2, N=1) and the interest
    // catalog entry 201. OTHER picked the opposite skill levels and no
    // interests. SWIPED already received a verdict and must not appear.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
      .append_query_results([vec![
        profile_row(ALIKE),
        profile_row(SWIPED),
        profile_row(OTHER),
      ]])
      .append_query_results([vec![swipe_row(REQUESTER, SWIPED)]])
      .append_query_results([level_catalog()])
      .append_query_results([vec![
        skill_row(REQUESTER, 103),
        skill_row(REQUESTER, 112),
        skill_row(REQUESTER, 121),
        skill_row(ALIKE, 103),
        skill_row(ALIKE, 112),
        skill_row(ALIKE, 121),
        skill_row(OTHER, 101),
        skill_row(OTHER, 112),
        skill_row(OTHER, 123),
        // transport selections are ignored by the skill signal
        skill_row(REQUESTER, 131),
        skill_row(OTHER, 133),
      ]])
      .append_query_results([vec![
        interest_row(201, "MUSIC"),
        interest_row(202, "OUTDOOR_ACTIVITY"),
      ]])
      .append_query_results([vec![held_row(REQUESTER, 201), held_row(ALIKE, 201)]])
      .into_connection();

    let result = recommendations(REQUESTER, &db).await.unwrap();
    assert_eq!(result, vec![ALIKE, OTHER]);
  }

  #[tokio::test]
  async fn failed_signal_fetches_degrade_to_zero_scores() {
    // Only the pool queries succeed; every signal fetch errors out. The
    // endpoint still answers, with all candidates scored 0 in pool order.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
      .append_query_results([vec![profile_row(ALIKE), profile_row(OTHER)]])
      .append_query_results([Vec::<user_swipe::Model>::new()])
      .into_connection();

    let result = recommendations(REQUESTER, &db).await.unwrap();
    assert_eq!(result, vec![ALIKE, OTHER]);
  }

  #[tokio::test]
  async fn pool_listing_failures_propagate() {
    // No mocked results at all: the very first query fails and the error
    // must reach the caller instead of degrading.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    assert!(recommendations(REQUESTER, &db).await.is_err());
  }

  #[tokio::test]
  async fn requesters_without_signals_get_zero_scored_candidates() {
    // The requester holds no skills and no interests: every signal is a
    // no-signal vector, every candidate scores 0 and pool order wins.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
      .append_query_results([vec![profile_row(ALIKE), profile_row(OTHER)]])
      .append_query_results([Vec::<user_swipe::Model>::new()])
      .append_query_results([level_catalog()])
      .append_query_results([vec![skill_row(ALIKE, 103)]])
      .append_query_results([vec![interest_row(201, "MUSIC")]])
      .append_query_results([vec![held_row(ALIKE, 201)]])
      .into_connection();

    let result = recommendations(REQUESTER, &db).await.unwrap();
    assert_eq!(result, vec![ALIKE, OTHER]);
  }
}
