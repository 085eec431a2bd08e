use serde_json::{json, Value};

/// OpenAPI 3.0 description of the colors endpoints.
pub fn document() -> Value {
  let color_ref = json!({ "$ref": "#/components/schemas/ColorItem" });
  let text = json!({ "text/plain": { "schema": { "type": "string" } } });

  json!({
    "openapi": "3.0.1",
    "info": {
      "title": "colors",
      "version": env!("CARGO_PKG_VERSION"),
    },
    "paths": {
      "/api/colors": {
        "get": {
          "tags": ["Colors"],
          "summary": "Get all colors",
          "responses": {
            "200": {
              "description": "List of all colors",
              "content": { "application/json": { "schema": { "type": "array", "items": color_ref } } },
            },
          },
        },
        "post": {
          "tags": ["Colors"],
          "summary": "Add a new color",
          "requestBody": {
            "required": true,
            "content": { "application/json": { "schema": color_ref } },
          },
          "responses": {
            "201": {
              "description": "Created color",
              "content": { "application/json": { "schema": color_ref } },
            },
            "400": { "description": "Validation error", "content": text },
          },
        },
      },
      "/api/colors/random": {
        "get": {
          "tags": ["Colors"],
          "summary": "Get a random color",
          "responses": {
            "200": {
              "description": "A random color from the collection",
              "content": { "application/json": { "schema": color_ref } },
            },
            "404": { "description": "No colors available", "content": text },
          },
        },
      },
    },
    "components": {
      "schemas": {
        "ColorItem": {
          "type": "object",
          "required": ["name", "hexCode"],
          "properties": {
            "name": { "type": "string", "minLength": 1 },
            "hexCode": { "type": "string", "pattern": "^#[0-9A-Fa-f]{6}$", "example": "#FF0000" },
          },
        },
      },
    },
  })
}
