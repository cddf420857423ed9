use std::collections::{HashMap, HashSet};

use uuid::Uuid;

/// Skill attribute categories that never contribute to the skill signal.
///
/// Transport preferences live in the same attribute catalog as the hiking
/// skills, but comparing them as ordinal values is meaningless.
pub const EXCLUDED_SKILL_CATEGORIES: [&str; 3] = ["CAR", "PUBLIC_TRANSPORT", "BOTH"];

/// Minimum width of a skill embedding. Vectors are padded with
/// [`NO_SIGNAL_SENTINEL`] up to this width so rows stay comparable even if
/// the category catalog shrinks below it.
pub const SKILL_EMBEDDING_WIDTH: usize = 3;

/// Marks a slot holding no measurement. Distinct from a legitimate zero:
/// sentinel slots enter the cosine as-is, but a vector made of nothing but
/// sentinels and zeros carries no signal at all and must score 0 (see
/// [`has_signal`]).
pub const NO_SIGNAL_SENTINEL: f32 = -1.0;

/// One resolved skill selection: the attribute category and the ordinal
/// value the user picked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecord {
  pub category: String,
  pub numeric_value: f32,
}

/// Whether an embedding carries any usable measurement.
///
/// All-zero and all-sentinel vectors (and any mix of the two) are "no
/// signal": their similarity against anything is defined as 0 rather than
/// whatever correlation the raw sentinel values would produce.
#[must_use]
pub fn has_signal(values: &[f32]) -> bool {
  values.iter().any(|&v| v != 0.0 && v != NO_SIGNAL_SENTINEL)
}

/// Build a skill embedding over the canonical category order.
///
/// `categories` is the lexicographically sorted global list of eligible
/// skill categories. Each slot holds the user's value for that category,
/// or the sentinel when the user has no selection there. The result is
/// padded with the sentinel to at least [`SKILL_EMBEDDING_WIDTH`].
#[must_use]
pub fn skill_embedding(categories: &[String], records: &[SkillRecord]) -> Vec<f32> {
  let by_category: HashMap<&str, f32> = records
    .iter()
    .map(|r| (r.category.as_str(), r.numeric_value))
    .collect();

  let width = categories.len().max(SKILL_EMBEDDING_WIDTH);
  let mut values = Vec::with_capacity(width);
  for category in categories {
    values.push(
      by_category
        .get(category.as_str())
        .copied()
        .unwrap_or(NO_SIGNAL_SENTINEL),
    );
  }
  values.resize(width, NO_SIGNAL_SENTINEL);
  values
}

/// Batched form of [`skill_embedding`]: one row per id in `order`.
///
/// Users missing from `records` get an all-sentinel row; one empty profile
/// never aborts the batch.
#[must_use]
pub fn skill_embedding_batch(
  categories: &[String],
  records: &HashMap<Uuid, Vec<SkillRecord>>,
  order: &[Uuid],
) -> Vec<Vec<f32>> {
  order
    .iter()
    .map(|id| skill_embedding(categories, records.get(id).map_or(&[][..], Vec::as_slice)))
    .collect()
}

/// 0/1 membership vector over the global interest-id catalog.
#[must_use]
pub fn direct_interest_embedding(catalog: &[Uuid], held: &HashSet<Uuid>) -> Vec<f32> {
  catalog
    .iter()
    .map(|id| if held.contains(id) { 1.0 } else { 0.0 })
    .collect()
}

/// Batched form of [`direct_interest_embedding`]: one row per id in
/// `order`, all-zero for users holding no interests.
#[must_use]
pub fn direct_interest_embedding_batch(
  catalog: &[Uuid],
  held: &HashMap<Uuid, HashSet<Uuid>>,
  order: &[Uuid],
) -> Vec<Vec<f32>> {
  order
    .iter()
    .map(|id| match held.get(id) {
      Some(ids) => direct_interest_embedding(catalog, ids),
      None => vec![0.0; catalog.len()],
    })
    .collect()
}

/// Per-category occurrence counts over the sorted category catalog.
///
/// `held_categories` carries one entry per interest the user holds;
/// categories outside the catalog are ignored.
#[must_use]
pub fn indirect_interest_embedding(categories: &[String], held_categories: &[String]) -> Vec<f32> {
  let mut counts: HashMap<&str, f32> = HashMap::new();
  for category in held_categories {
    *counts.entry(category.as_str()).or_insert(0.0) += 1.0;
  }

  categories
    .iter()
    .map(|c| counts.get(c.as_str()).copied().unwrap_or(0.0))
    .collect()
}

/// Batched form of [`indirect_interest_embedding`]: one row per id in
/// `order`, all-zero for users holding no interests.
#[must_use]
pub fn indirect_interest_embedding_batch(
  categories: &[String],
  held: &HashMap<Uuid, Vec<String>>,
  order: &[Uuid],
) -> Vec<Vec<f32>> {
  order
    .iter()
    .map(|id| {
      indirect_interest_embedding(categories, held.get(id).map_or(&[][..], Vec::as_slice))
    })
    .collect()
}
