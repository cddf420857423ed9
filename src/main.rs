use sea_orm::Database;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trailmatch_migration::{Migrator, MigratorTrait};
use trailmatch_server::server;
use trailmatch_shared::{APP_ENV, AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .with(ErrorLayer::default())
    .init();
  dotenvy::dotenv().ok();

  let db = Database::connect(APP_ENV.database_url.as_str()).await?;

  // Apply all pending migrations
  // https://www.sea-ql.org/SeaORM/docs/migration/running-migration/#migrating-programmatically
  Migrator::up(&db, None).await?;

  server(db).await?;

  Ok(())
}
