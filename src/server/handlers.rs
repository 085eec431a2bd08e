use axum::{
  body::Bytes,
  extract::State,
  http::{header, StatusCode},
  response::IntoResponse,
  Json,
};
use serde_json::Value;
use slog::info;

use crate::color::{ColorItem, ColorPayload};
use crate::server::{openapi, AppState};

type Rejection = (StatusCode, String);

fn bad_request(message: impl Into<String>) -> Rejection {
  (StatusCode::BAD_REQUEST, message.into())
}

fn parse_payload(body: &[u8]) -> Result<ColorPayload, Rejection> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Err(bad_request("Color data is required"));
  }
  match serde_json::from_slice::<Option<ColorPayload>>(body) {
    Ok(Some(payload)) => Ok(payload),
    Ok(None) => Err(bad_request("Color data is required")),
    Err(err) => Err(bad_request(format!("Invalid color data: {}", err))),
  }
}

pub async fn list_colors(State(state): State<AppState>) -> Json<Vec<ColorItem>> {
  Json(state.colors.all())
}

pub async fn add_color(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, Rejection> {
  let color = parse_payload(&body)?.into_color();
  state.colors.try_add(color.clone()).map_err(|reason| bad_request(reason.to_string()))?;
  info!(state.logger, "Color added"; "name" => &color.name, "hex_code" => &color.hex_code, "count" => state.colors.len());

  Ok((StatusCode::CREATED, [(header::LOCATION, "/api/colors")], Json(color)))
}

pub async fn random_color(State(state): State<AppState>) -> Result<Json<ColorItem>, Rejection> {
  state
    .colors
    .random()
    .map(Json)
    .ok_or_else(|| (StatusCode::NOT_FOUND, "No colors available".to_owned()))
}

pub async fn openapi_document() -> Json<Value> {
  Json(openapi::document())
}
