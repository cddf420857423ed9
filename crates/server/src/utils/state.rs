use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
  pub db: DatabaseConnection,
}

impl AppState {
  #[must_use]
  pub const fn new(db: DatabaseConnection) -> Self {
    Self { db }
  }
}
