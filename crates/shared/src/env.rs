use std::env;
use std::sync::LazyLock;

pub struct AppEnv {
  pub database_url: String,
}

impl AppEnv {
  fn new() -> Self {
    Self {
      database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
    }
  }
}

pub static APP_ENV: LazyLock<AppEnv> = LazyLock::new(AppEnv::new);
