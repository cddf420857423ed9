mod embedding;
pub use embedding::{
  EXCLUDED_SKILL_CATEGORIES, NO_SIGNAL_SENTINEL, SKILL_EMBEDDING_WIDTH, SkillRecord,
  direct_interest_embedding, direct_interest_embedding_batch, has_signal,
  indirect_interest_embedding, indirect_interest_embedding_batch, skill_embedding,
  skill_embedding_batch,
};

mod pool;
pub use pool::eligible_candidates;

mod ranking;
pub use ranking::{RECOMMENDATION_LIMIT, rank_top_k};

mod similarity;
pub use similarity::{
  NORM_EPSILON, cosine_similarity, cosine_similarity_batch, signal_similarity,
  signal_similarity_batch,
};

mod weights;
pub use weights::{OVERALL_WEIGHTS, OverallWeights, RANKING_WEIGHTS, SignalWeights};
