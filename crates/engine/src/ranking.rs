use uuid::Uuid;

/// Maximum number of candidates a ranking request returns.
pub const RECOMMENDATION_LIMIT: usize = 10;

/// Sort candidates by aggregate score, best first, and keep the top `k`.
///
/// `scores` is parallel to `candidates`. The sort is stable, so equal
/// scores keep their original relative order and one input always ranks
/// the same way.
#[must_use]
pub fn rank_top_k(candidates: &[Uuid], scores: &[f32], k: usize) -> Vec<Uuid> {
  debug_assert_eq!(candidates.len(), scores.len(), "one score per candidate");

  let mut ranked: Vec<(Uuid, f32)> = candidates
    .iter()
    .copied()
    .zip(scores.iter().copied())
    .collect();

  ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
  ranked.truncate(k);
  ranked.into_iter().map(|(id, _)| id).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(n: u128) -> Vec<Uuid> {
    (1..=n).map(Uuid::from_u128).collect()
  }

  #[test]
  fn ranks_best_scores_first() {
    let candidates = ids(4);
    let scores = [0.1, 0.9, -0.3, 0.5];

    let top = rank_top_k(&candidates, &scores, 10);
    assert_eq!(
      top,
      vec![candidates[1], candidates[3], candidates[0], candidates[2]]
    );
  }

  #[test]
  fn truncates_to_k_results() {
    let candidates = ids(5);
    let scores = [0.5, 0.4, 0.3, 0.2, 0.1];

    assert_eq!(rank_top_k(&candidates, &scores, 2).len(), 2);
    assert_eq!(rank_top_k(&candidates, &scores, 0), Vec::<Uuid>::new());
  }

  #[test]
  fn returns_everything_when_fewer_candidates_than_k() {
    let candidates = ids(3);
    let scores = [0.1, 0.2, 0.3];

    assert_eq!(rank_top_k(&candidates, &scores, 10).len(), 3);
  }

  #[test]
  fn ties_keep_candidate_order() {
    let candidates = ids(3);
    let scores = [0.5, 0.5, 0.5];

    assert_eq!(rank_top_k(&candidates, &scores, 10), candidates);
  }

  #[test]
  fn empty_pool_ranks_to_nothing() {
    assert_eq!(rank_top_k(&[], &[], 10), Vec::<Uuid>::new());
  }
}
