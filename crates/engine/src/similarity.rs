use crate::embedding::has_signal;

/// Denominator guard for cosine similarity. A product of norms below this
/// threshold counts as zero and the similarity becomes 0 instead of a
/// division blowing up.
pub const NORM_EPSILON: f64 = 1e-12;

/// Compute cosine similarity between two embedding vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction, or
/// 0.0 for empty vectors, mismatched lengths and zero-norm operands.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }
  if a.len() != b.len() {
    return 0.0;
  }

  let mut dot = 0.0_f64;
  let mut norm_a = 0.0_f64;
  let mut norm_b = 0.0_f64;

  for (&x, &y) in a.iter().zip(b.iter()) {
    let x = x as f64;
    let y = y as f64;
    dot = x.mul_add(y, dot);
    norm_a = x.mul_add(x, norm_a);
    norm_b = y.mul_add(y, norm_b);
  }

  let denom = norm_a.sqrt() * norm_b.sqrt();
  if denom < NORM_EPSILON {
    return 0.0;
  }

  (dot / denom) as f32
}

/// Batched cosine similarity: one reference vector against many rows.
///
/// The reference norm is computed once, so each row costs a single fused
/// dot-and-norm pass. Rows that are empty, mismatched in length or
/// zero-norm score 0, exactly like the pairwise path.
#[must_use]
pub fn cosine_similarity_batch(reference: &[f32], rows: &[Vec<f32>]) -> Vec<f32> {
  let mut ref_norm = 0.0_f64;
  for &x in reference {
    let x = x as f64;
    ref_norm = x.mul_add(x, ref_norm);
  }
  let ref_norm = ref_norm.sqrt();

  rows
    .iter()
    .map(|row| {
      if reference.is_empty() || row.len() != reference.len() {
        return 0.0;
      }

      let mut dot = 0.0_f64;
      let mut norm = 0.0_f64;
      for (&x, &y) in reference.iter().zip(row.iter()) {
        let x = x as f64;
        let y = y as f64;
        dot = x.mul_add(y, dot);
        norm = y.mul_add(y, norm);
      }

      let denom = ref_norm * norm.sqrt();
      if denom < NORM_EPSILON {
        0.0
      } else {
        (dot / denom) as f32
      }
    })
    .collect()
}

/// [`cosine_similarity`] with the no-signal rule applied first: an operand
/// carrying no measurement (all zeros and sentinels) scores 0 regardless
/// of the correlation its raw values would produce.
#[must_use]
pub fn signal_similarity(a: &[f32], b: &[f32]) -> f32 {
  if !has_signal(a) || !has_signal(b) {
    return 0.0;
  }
  cosine_similarity(a, b)
}

/// Batched form of [`signal_similarity`], row-consistent with the pairwise
/// path: `result[i] == signal_similarity(reference, &rows[i])`.
#[must_use]
pub fn signal_similarity_batch(reference: &[f32], rows: &[Vec<f32>]) -> Vec<f32> {
  if !has_signal(reference) {
    return vec![0.0; rows.len()];
  }

  let mut scores = cosine_similarity_batch(reference, rows);
  for (score, row) in scores.iter_mut().zip(rows.iter()) {
    if !has_signal(row) {
      *score = 0.0;
    }
  }
  scores
}
