// src/lib.rs
// Public library surface for integration tests (and reuse from other crates).

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod negation;
pub mod normalize;
pub mod pipeline;
pub mod tokenizer;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::config::TokenizerConfig;
pub use crate::error::TokenizeError;
pub use crate::negation::{add_negation_suffixes, NEGATION_SUFFIX};
pub use crate::pipeline::Pipeline;
pub use crate::tokenizer::{looks_like_emoticon, tokenize, PatternCategory, Tokenizer};
