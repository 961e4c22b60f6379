// src/api.rs
//! HTTP surface: `/health`, `/tokenize`, `/negate`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::config::TokenizerConfig;
use crate::negation::add_negation_suffixes;
use crate::pipeline::Pipeline;

#[derive(Clone)]
pub struct AppState {
    config: Arc<TokenizerConfig>,
}

impl AppState {
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Config from `$TOKENIZER_CONFIG_PATH` / `config/`; defaults if loading fails.
    pub fn from_env() -> Self {
        let cfg = TokenizerConfig::load_default().unwrap_or_else(|e| {
            warn!(error = ?e, "tokenizer config not loaded, using defaults");
            TokenizerConfig::default()
        });
        Self::new(cfg)
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/tokenize", post(tokenize))
        .route("/negate", post(negate))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct TokenizeReq {
    // Kept as a raw value: a non-string text is a client error, not a parse error.
    #[serde(default)]
    text: Value,
    #[serde(default)]
    preserve_case: Option<bool>,
    #[serde(default)]
    mark_negation: Option<bool>,
    #[serde(default)]
    decode_html_entities: Option<bool>,
}

#[derive(Serialize)]
struct TokenizeResp {
    tokens: Vec<String>,
    count: usize,
}

#[derive(Serialize)]
struct ErrorResp {
    error: String,
}

async fn tokenize(
    State(state): State<AppState>,
    Json(body): Json<TokenizeReq>,
) -> Result<Json<TokenizeResp>, (StatusCode, Json<ErrorResp>)> {
    let base = state.config();
    let cfg = TokenizerConfig {
        preserve_case: body.preserve_case.unwrap_or(base.preserve_case),
        mark_negation: body.mark_negation.unwrap_or(base.mark_negation),
        decode_html_entities: body
            .decode_html_entities
            .unwrap_or(base.decode_html_entities),
    };

    match Pipeline::new(&cfg).process_value(&body.text) {
        Ok(tokens) => Ok(Json(TokenizeResp {
            count: tokens.len(),
            tokens,
        })),
        Err(e) => {
            warn!(error = %e, "rejected /tokenize request");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResp {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

#[derive(Deserialize)]
struct NegateReq {
    tokens: Vec<String>,
}

#[derive(Serialize)]
struct NegateResp {
    tokens: Vec<String>,
}

async fn negate(Json(body): Json<NegateReq>) -> Json<NegateResp> {
    Json(NegateResp {
        tokens: add_negation_suffixes(&body.tokens),
    })
}
