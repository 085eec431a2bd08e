use axum::{
  extract::{Request, State},
  middleware::{self, Next},
  response::Response,
  routing::get,
  Router,
};
use slog::Logger;
use slog::{info, o, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::errors::AppError;
use crate::store::ColorStore;

mod handlers;
pub mod openapi;

#[derive(Clone)]
pub struct AppState {
  pub colors: Arc<ColorStore>,
  pub logger: Logger,
}

impl AppState {
  pub fn new(colors: ColorStore, logger: &Logger) -> AppState {
    AppState {
      colors: Arc::new(colors),
      logger: logger.new(o!("component" => "http")),
    }
  }
}

async fn log_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
  let method = request.method().to_string();
  let path = request.uri().path().to_owned();
  let response = next.run(request).await;
  info!(state.logger, "{} {}", method, path; "status" => response.status().as_u16());
  response
}

pub fn app_router(state: AppState, swagger: bool) -> Router {
  let mut router = Router::new()
    .route("/api/colors", get(handlers::list_colors).post(handlers::add_color))
    .route("/api/colors/random", get(handlers::random_color));
  if swagger {
    router = router.route("/swagger/v1/swagger.json", get(handlers::openapi_document));
  }
  router
    .layer(middleware::from_fn_with_state(state.clone(), log_request))
    .with_state(state)
}

async fn shutdown_signal(logger: Logger) {
  if let Err(err) = tokio::signal::ctrl_c().await {
    warn!(logger, "Cannot listen for ctrl-c, running until killed"; "error" => err.to_string());
    std::future::pending::<()>().await;
  }
  info!(logger, "Shutting down");
}

pub async fn serve(settings: &Settings, logger: &Logger) -> Result<(), AppError> {
  let addr: SocketAddr = settings.get_listen_or_default().parse()?;
  let state = AppState::new(ColorStore::new(logger), logger);
  let app = app_router(state, settings.swagger_enabled());

  let listener = TcpListener::bind(addr).await?;
  info!(logger, "Listening"; "addr" => listener.local_addr()?.to_string(), "swagger" => settings.swagger_enabled());

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal(logger.clone()))
    .await?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::color::ColorItem;
  use axum::body::{to_bytes, Body};
  use axum::http::{header, Request, StatusCode};
  use serde_json::{json, Value};
  use slog::Discard;
  use tower::ServiceExt;

  const MAX_SIZE: usize = 64 * 1024;

  fn a_logger() -> Logger {
    Logger::root(Discard, o!())
  }

  fn an_app() -> (Router, AppState) {
    let logger = a_logger();
    let state = AppState::new(ColorStore::new(&logger), &logger);
    (app_router(state.clone(), false), state)
  }

  fn post_colors(body: &str) -> Request<Body> {
    Request::builder()
      .method("POST")
      .uri("/api/colors")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_owned()))
      .unwrap()
  }

  fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
  }

  async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), MAX_SIZE).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  #[tokio::test]
  async fn test_get_all_returns_initial_colors() {
    let (app, _) = an_app();
    let response = app.oneshot(get("/api/colors")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let colors: Vec<ColorItem> = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
      colors,
      vec![
        ColorItem::new("Red", "#FF0000"),
        ColorItem::new("Yellow", "#FFFF00"),
        ColorItem::new("Black", "#000000"),
      ]
    );
  }

  #[tokio::test]
  async fn test_get_all_uses_canonical_field_names() {
    let (app, _) = an_app();
    let response = app.oneshot(get("/api/colors")).await.unwrap();
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json[0], json!({"name": "Red", "hexCode": "#FF0000"}));
  }

  #[tokio::test]
  async fn test_get_random_returns_member() {
    let (app, state) = an_app();
    let response = app.oneshot(get("/api/colors/random")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let color: ColorItem = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(state.colors.all().contains(&color));
  }

  #[tokio::test]
  async fn test_get_random_on_empty_store_is_not_found() {
    let logger = a_logger();
    let app = app_router(AppState::new(ColorStore::empty(&logger), &logger), false);
    let response = app.oneshot(get("/api/colors/random")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "No colors available");
  }

  #[tokio::test]
  async fn test_add_valid_color() {
    let (app, _) = an_app();
    let response = app
      .clone()
      .oneshot(post_colors(r##"{"name": "Blue", "hexCode": "#0000FF"}"##))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/api/colors");
    let created: ColorItem = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(created, ColorItem::new("Blue", "#0000FF"));

    let response = app.oneshot(get("/api/colors")).await.unwrap();
    let colors: Vec<ColorItem> = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(colors.len(), 4);
    assert!(colors.contains(&ColorItem::new("Blue", "#0000FF")));
  }

  #[tokio::test]
  async fn test_add_accepts_any_field_case() {
    let (app, state) = an_app();
    let response = app
      .oneshot(post_colors(r##"{"Name": "Green", "HEXCODE": "#00ff00"}"##))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(state.colors.all().contains(&ColorItem::new("Green", "#00ff00")));
  }

  #[tokio::test]
  async fn test_add_repeated_field_takes_later_value() {
    let (app, state) = an_app();
    let response = app
      .oneshot(post_colors(r##"{"name": "b", "Name": "a", "hexcode": "#000000"}"##))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ColorItem = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(created, ColorItem::new("a", "#000000"));
    assert_eq!(state.colors.all().last(), Some(&created));
  }

  #[tokio::test]
  async fn test_add_invalid_hex_code() {
    let (app, state) = an_app();
    let response = app
      .oneshot(post_colors(r#"{"name": "InvalidColor", "hexCode": "invalidhex"}"#))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Invalid hex code format. Use format #RRGGBB (e.g., #FF0000)");
    assert_eq!(state.colors.len(), 3);
  }

  #[tokio::test]
  async fn test_add_empty_name() {
    let (app, state) = an_app();
    let response = app.oneshot(post_colors(r##"{"name": "", "hexCode": "#0000FF"}"##)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Color name is required");
    assert_eq!(state.colors.len(), 3);
  }

  #[tokio::test]
  async fn test_add_empty_body() {
    let (app, _) = an_app();
    let response = app.oneshot(post_colors("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Color data is required");
  }

  #[tokio::test]
  async fn test_add_null_body() {
    let (app, _) = an_app();
    let response = app.oneshot(post_colors("null")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Color data is required");
  }

  #[tokio::test]
  async fn test_add_garbage_body() {
    let (app, state) = an_app();
    let response = app.oneshot(post_colors("{not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.starts_with("Invalid color data"));
    assert_eq!(state.colors.len(), 3);
  }

  #[tokio::test]
  async fn test_swagger_only_when_enabled() {
    let logger = a_logger();
    let state = AppState::new(ColorStore::new(&logger), &logger);

    let response = app_router(state.clone(), false)
      .oneshot(get("/swagger/v1/swagger.json"))
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app_router(state, true).oneshot(get("/swagger/v1/swagger.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let doc: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(doc["openapi"], "3.0.1");
  }

  #[tokio::test]
  async fn test_end_to_end_over_tcp() {
    let logger = a_logger();
    let app = app_router(AppState::new(ColorStore::new(&logger), &logger), false);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let client = reqwest::Client::new();
    let base = format!("http://{}/api/colors", addr);

    let response = client
      .post(&base)
      .json(&json!({"name": "Blue", "hexCode": "#0000FF"}))
      .send()
      .await
      .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let response = client.post(&base).body("").send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let colors: Vec<ColorItem> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(colors.len(), 4);
    assert_eq!(colors.last(), Some(&ColorItem::new("Blue", "#0000FF")));
  }
}
