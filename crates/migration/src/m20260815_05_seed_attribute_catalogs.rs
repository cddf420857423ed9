use sea_orm_migration::prelude::*;
use uuid::Uuid;

use super::m20260815_02_create_skill_tables::SkillLevel;
use super::m20260815_03_create_interest_tables::Interest;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Skill-level catalog: three hiking attributes with three ordinal levels
/// each, plus the transport options that share the table but carry no
/// ordinal meaning.
const SKILL_LEVELS: &[(&str, &str, i32)] = &[
  ("a0000000-0000-4000-8000-000000000001", "EXPERIENCE", 1),
  ("a0000000-0000-4000-8000-000000000002", "EXPERIENCE", 2),
  ("a0000000-0000-4000-8000-000000000003", "EXPERIENCE", 3),
  ("a0000000-0000-4000-8000-000000000004", "FITNESS", 1),
  ("a0000000-0000-4000-8000-000000000005", "FITNESS", 2),
  ("a0000000-0000-4000-8000-000000000006", "FITNESS", 3),
  ("a0000000-0000-4000-8000-000000000007", "TERRAIN", 1),
  ("a0000000-0000-4000-8000-000000000008", "TERRAIN", 2),
  ("a0000000-0000-4000-8000-000000000009", "TERRAIN", 3),
  ("a0000000-0000-4000-8000-000000000010", "CAR", 0),
  ("a0000000-0000-4000-8000-000000000011", "PUBLIC_TRANSPORT", 0),
  ("a0000000-0000-4000-8000-000000000012", "BOTH", 0),
];

/// Interest catalog: (id, name, display name, category).
const INTERESTS: &[(&str, &str, &str, &str)] = &[
  ("b0000000-0000-4000-8000-000000000001", "camping", "Camping", "OUTDOOR_ACTIVITY"),
  ("b0000000-0000-4000-8000-000000000002", "birdwatching", "Birdwatching", "OUTDOOR_ACTIVITY"),
  ("b0000000-0000-4000-8000-000000000003", "foraging", "Foraging", "OUTDOOR_ACTIVITY"),
  ("b0000000-0000-4000-8000-000000000004", "climbing", "Climbing", "OUTDOOR_ACTIVITY"),
  ("b0000000-0000-4000-8000-000000000005", "kayaking", "Kayaking", "OUTDOOR_ACTIVITY"),
  ("b0000000-0000-4000-8000-000000000006", "trail_running", "Trail running", "SPORTS"),
  ("b0000000-0000-4000-8000-000000000007", "cycling", "Cycling", "SPORTS"),
  ("b0000000-0000-4000-8000-000000000008", "bouldering", "Bouldering", "SPORTS"),
  ("b0000000-0000-4000-8000-000000000009", "yoga", "Yoga", "SPORTS"),
  ("b0000000-0000-4000-8000-000000000010", "swimming", "Swimming", "SPORTS"),
  ("b0000000-0000-4000-8000-000000000011", "concerts", "Concerts", "MUSIC"),
  ("b0000000-0000-4000-8000-000000000012", "festivals", "Festivals", "MUSIC"),
  ("b0000000-0000-4000-8000-000000000013", "vinyl", "Vinyl collecting", "MUSIC"),
  ("b0000000-0000-4000-8000-000000000014", "choir", "Choir singing", "MUSIC"),
  ("b0000000-0000-4000-8000-000000000015", "guitar", "Playing guitar", "MUSIC"),
  ("b0000000-0000-4000-8000-000000000016", "cooking", "Cooking", "FOOD_DRINK"),
  ("b0000000-0000-4000-8000-000000000017", "baking", "Baking", "FOOD_DRINK"),
  ("b0000000-0000-4000-8000-000000000018", "craft_beer", "Craft beer", "FOOD_DRINK"),
  ("b0000000-0000-4000-8000-000000000019", "coffee", "Specialty coffee", "FOOD_DRINK"),
  ("b0000000-0000-4000-8000-000000000020", "wine", "Wine tasting", "FOOD_DRINK"),
  ("b0000000-0000-4000-8000-000000000021", "museums", "Museums", "CULTURE"),
  ("b0000000-0000-4000-8000-000000000022", "photography", "Photography", "CULTURE"),
  ("b0000000-0000-4000-8000-000000000023", "reading", "Reading", "CULTURE"),
  ("b0000000-0000-4000-8000-000000000024", "board_games", "Board games", "CULTURE"),
  ("b0000000-0000-4000-8000-000000000025", "languages", "Learning languages", "CULTURE"),
];

fn seed_uuid(value: &str) -> Result<Uuid, DbErr> {
  Uuid::parse_str(value).map_err(|e| DbErr::Custom(format!("invalid seed uuid {value}: {e}")))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    let mut skill_levels = Query::insert()
      .into_table(SkillLevel::Table)
      .columns([SkillLevel::Id, SkillLevel::Name, SkillLevel::NumericValue])
      .to_owned();
    for (id, name, value) in SKILL_LEVELS {
      skill_levels.values_panic([seed_uuid(id)?.into(), (*name).into(), (*value).into()]);
    }
    manager.exec_stmt(skill_levels).await?;

    let mut interests = Query::insert()
      .into_table(Interest::Table)
      .columns([
        Interest::Id,
        Interest::Name,
        Interest::DisplayName,
        Interest::Category,
      ])
      .to_owned();
    for (id, name, display_name, category) in INTERESTS {
      interests.values_panic([
        seed_uuid(id)?.into(),
        (*name).into(),
        (*display_name).into(),
        (*category).into(),
      ]);
    }
    manager.exec_stmt(interests).await?;

    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .exec_stmt(Query::delete().from_table(Interest::Table).to_owned())
      .await?;

    manager
      .exec_stmt(Query::delete().from_table(SkillLevel::Table).to_owned())
      .await
  }
}
