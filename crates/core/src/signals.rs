use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;
use trailmatch_engine::{
  EXCLUDED_SKILL_CATEGORIES, SkillRecord, direct_interest_embedding,
  direct_interest_embedding_batch, indirect_interest_embedding,
  indirect_interest_embedding_batch, skill_embedding, skill_embedding_batch,
};
use trailmatch_entities::{interest, skill_level, user_interest, user_skill};
use trailmatch_shared::AppError;
use uuid::Uuid;

use crate::store;

/// One signal's embeddings: the requester's reference vector plus one row
/// per candidate, in pool order.
pub(crate) struct SignalEmbeddings {
  pub reference: Vec<f32>,
  pub candidates: Vec<Vec<f32>>,
}

// ──────────────────────────────────────────────────
// Catalog derivation
// ──────────────────────────────────────────────────

/// Canonical skill-category order: eligible category names, deduplicated
/// and sorted lexicographically. Store return order is deliberately not
/// trusted; every vector of one request must agree on slot meaning.
pub(crate) fn skill_category_catalog(levels: &[skill_level::Model]) -> Vec<String> {
  let mut names: Vec<String> = levels
    .iter()
    .filter(|level| !EXCLUDED_SKILL_CATEGORIES.contains(&level.name.as_str()))
    .map(|level| level.name.clone())
    .collect();
  names.sort();
  names.dedup();
  names
}

/// Resolve skill selections against the level catalog and group them by
/// profile. Rows pointing at an unknown level and rows in excluded
/// categories are dropped.
pub(crate) fn skill_records_by_profile(
  levels: &[skill_level::Model],
  rows: &[user_skill::Model],
) -> HashMap<Uuid, Vec<SkillRecord>> {
  let by_id: HashMap<Uuid, &skill_level::Model> =
    levels.iter().map(|level| (level.id, level)).collect();

  let mut records: HashMap<Uuid, Vec<SkillRecord>> = HashMap::new();
  for row in rows {
    let Some(level) = by_id.get(&row.skill_level_id) else {
      continue;
    };
    if EXCLUDED_SKILL_CATEGORIES.contains(&level.name.as_str()) {
      continue;
    }
    records.entry(row.profile_id).or_default().push(SkillRecord {
      category: level.name.clone(),
      numeric_value: level.numeric_value as f32,
    });
  }
  records
}

/// Canonical interest-category order: sorted and deduplicated.
pub(crate) fn interest_category_catalog(catalog: &[interest::Model]) -> Vec<String> {
  let mut categories: Vec<String> = catalog.iter().map(|i| i.category.clone()).collect();
  categories.sort();
  categories.dedup();
  categories
}

/// Held interest ids per profile.
pub(crate) fn interests_by_profile(rows: &[user_interest::Model]) -> HashMap<Uuid, HashSet<Uuid>> {
  let mut held: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
  for row in rows {
    held.entry(row.profile_id).or_default().insert(row.interest_id);
  }
  held
}

/// Held interest categories per profile, one entry per held interest.
/// Rows pointing at an unknown interest are dropped.
pub(crate) fn categories_by_profile(
  catalog: &[interest::Model],
  rows: &[user_interest::Model],
) -> HashMap<Uuid, Vec<String>> {
  let by_id: HashMap<Uuid, &interest::Model> = catalog.iter().map(|i| (i.id, i)).collect();

  let mut held: HashMap<Uuid, Vec<String>> = HashMap::new();
  for row in rows {
    let Some(interest) = by_id.get(&row.interest_id) else {
      continue;
    };
    held
      .entry(row.profile_id)
      .or_default()
      .push(interest.category.clone());
  }
  held
}

// ──────────────────────────────────────────────────
// Fetch + assemble, one signal at a time
// ──────────────────────────────────────────────────

/// Fetch everything the skill signal needs and embed the requester plus
/// the whole pool against the shared category catalog.
pub(crate) async fn skill_embeddings(
  requester: Uuid,
  pool: &[Uuid],
  db: &DatabaseConnection,
) -> Result<SignalEmbeddings, AppError> {
  let levels = store::skill_levels(db).await?;

  let mut everyone = Vec::with_capacity(pool.len() + 1);
  everyone.push(requester);
  everyone.extend_from_slice(pool);
  let rows = store::user_skill_rows(&everyone, db).await?;

  let categories = skill_category_catalog(&levels);
  let records = skill_records_by_profile(&levels, &rows);

  let reference = skill_embedding(
    &categories,
    records.get(&requester).map_or(&[][..], Vec::as_slice),
  );
  let candidates = skill_embedding_batch(&categories, &records, pool);

  Ok(SignalEmbeddings {
    reference,
    candidates,
  })
}

/// Fetch everything the two interest signals need. Both are derived from
/// the same pair of queries: the direct signal embeds over interest ids,
/// the indirect one over interest categories.
pub(crate) async fn interest_embeddings(
  requester: Uuid,
  pool: &[Uuid],
  db: &DatabaseConnection,
) -> Result<(SignalEmbeddings, SignalEmbeddings), AppError> {
  let catalog = store::interests(db).await?;

  let mut everyone = Vec::with_capacity(pool.len() + 1);
  everyone.push(requester);
  everyone.extend_from_slice(pool);
  let rows = store::user_interest_rows(&everyone, db).await?;

  let interest_ids: Vec<Uuid> = catalog.iter().map(|i| i.id).collect();
  let categories = interest_category_catalog(&catalog);

  let held_ids = interests_by_profile(&rows);
  let held_categories = categories_by_profile(&catalog, &rows);

  let empty_ids = HashSet::new();
  let direct = SignalEmbeddings {
    reference: direct_interest_embedding(
      &interest_ids,
      held_ids.get(&requester).unwrap_or(&empty_ids),
    ),
    candidates: direct_interest_embedding_batch(&interest_ids, &held_ids, pool),
  };

  let indirect = SignalEmbeddings {
    reference: indirect_interest_embedding(
      &categories,
      held_categories.get(&requester).map_or(&[][..], Vec::as_slice),
    ),
    candidates: indirect_interest_embedding_batch(&categories, &held_categories, pool),
  };

  Ok((direct, indirect))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn level(id: u128, name: &str, value: i32) -> skill_level::Model {
    skill_level::Model {
      id: Uuid::from_u128(id),
      name: name.to_owned(),
      numeric_value: value,
    }
  }

  fn selection(profile: u128, level: u128) -> user_skill::Model {
    user_skill::Model {
      profile_id: Uuid::from_u128(profile),
      skill_level_id: Uuid::from_u128(level),
    }
  }

  fn interest(id: u128, category: &str) -> interest::Model {
    interest::Model {
      id: Uuid::from_u128(id),
      name: format!("interest-{id}"),
      display_name: None,
      category: category.to_owned(),
    }
  }

  #[test]
  fn skill_catalog_is_sorted_and_excludes_transport() {
    let levels = [
      level(1, "NAVIGATION", 1),
      level(2, "CAR", 0),
      level(3, "ENDURANCE", 1),
      level(4, "ENDURANCE", 2),
      level(5, "PUBLIC_TRANSPORT", 0),
      level(6, "BOTH", 0),
    ];

    assert_eq!(
      skill_category_catalog(&levels),
      vec!["ENDURANCE".to_owned(), "NAVIGATION".to_owned()]
    );
  }

  #[test]
  fn skill_records_resolve_levels_and_drop_transport_rows() {
    let levels = [level(1, "FITNESS", 2), level(2, "CAR", 0)];
    let rows = [
      selection(10, 1),
      selection(10, 2), // transport, dropped
      selection(10, 99), // unknown level, dropped
    ];

    let records = skill_records_by_profile(&levels, &rows);
    let mine = &records[&Uuid::from_u128(10)];
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].category, "FITNESS");
    assert_eq!(mine[0].numeric_value, 2.0);
  }

  #[test]
  fn interest_categories_are_sorted_and_deduplicated() {
    let catalog = [
      interest(1, "MUSIC"),
      interest(2, "CULTURE"),
      interest(3, "MUSIC"),
    ];

    assert_eq!(
      interest_category_catalog(&catalog),
      vec!["CULTURE".to_owned(), "MUSIC".to_owned()]
    );
  }

  #[test]
  fn held_categories_keep_one_entry_per_interest() {
    let catalog = [interest(1, "MUSIC"), interest(2, "MUSIC")];
    let rows = [
      user_interest::Model {
        profile_id: Uuid::from_u128(10),
        interest_id: Uuid::from_u128(1),
      },
      user_interest::Model {
        profile_id: Uuid::from_u128(10),
        interest_id: Uuid::from_u128(2),
      },
      user_interest::Model {
        profile_id: Uuid::from_u128(10),
        interest_id: Uuid::from_u128(99), // unknown interest, dropped
      },
    ];

    let held = categories_by_profile(&catalog, &rows);
    assert_eq!(held[&Uuid::from_u128(10)], vec!["MUSIC", "MUSIC"]);
  }
}
