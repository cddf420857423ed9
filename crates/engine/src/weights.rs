/// Per-signal weights used when ranking a candidate pool.
///
/// Kept as plain named constants rather than a config surface: the split
/// between skill and interest signals is a product decision still being
/// tuned, and tests want to construct their own instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalWeights {
  pub skill: f32,
  pub direct_interest: f32,
  pub indirect_interest: f32,
}

impl SignalWeights {
  /// Weighted sum of the three per-signal similarity scores.
  #[must_use]
  pub fn aggregate(&self, skill: f32, direct: f32, indirect: f32) -> f32 {
    self.skill * skill + self.direct_interest * direct + self.indirect_interest * indirect
  }
}

/// Weights of the candidate-ranking pipeline. Skill compatibility
/// dominates; shared interest categories count for more than exact
/// interest overlap.
pub const RANKING_WEIGHTS: SignalWeights = SignalWeights {
  skill: 0.67,
  direct_interest: 0.11,
  indirect_interest: 0.22,
};

/// Weights of the pairwise overall-similarity variant: an outer
/// skill/interest split, with a direct/indirect split nested inside the
/// interest share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallWeights {
  pub skill: f32,
  pub interest: f32,
  pub direct_interest: f32,
  pub indirect_interest: f32,
}

impl OverallWeights {
  /// Fold the three per-signal scores into one overall score.
  #[must_use]
  pub fn combine(&self, skill: f32, direct: f32, indirect: f32) -> f32 {
    let interest = self.direct_interest * direct + self.indirect_interest * indirect;
    self.skill * skill + self.interest * interest
  }
}

pub const OVERALL_WEIGHTS: OverallWeights = OverallWeights {
  skill: 0.66,
  interest: 0.34,
  direct_interest: 0.33,
  indirect_interest: 0.67,
};
