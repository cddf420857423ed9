use axum::{
  Json, Router,
  routing::get,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod recommendations;

pub use recommendations::Recommendations;

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Trailmatch API",
    version = "0.1.0",
    description = "Multi-signal similarity matching for hiking partners"
  ),
  paths(recommendations::recommendations),
  components(schemas(Recommendations))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route(
      "/api/v0/recommendations/{user_id}",
      get(recommendations::recommendations),
    )
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
